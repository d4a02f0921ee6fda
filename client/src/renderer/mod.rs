mod renderthing;

use liblife::Grid;
use renderthing::{
    Renderer,
    frame::{Color, RenderFrame},
    window::RendererWindowConfig,
};
use winit::{
    event::{ElementState, WindowEvent},
    keyboard::{Key, NamedKey},
};

use crate::{
    config::Config,
    state::SharedState,
    ticker::{TickerCommand, TickerHost},
};

const BACKGROUND: Color = [255, 255, 255, 255];
const GRID_LINE: Color = [0, 0, 0, 255];
const ALIVE: Color = [0, 255, 0, 255];

pub fn run(state: SharedState, ticker: TickerHost, config: &Config) -> anyhow::Result<()> {
    let cell_size = config.cell_size;
    let draw_state = state.clone();

    let renderer = Renderer::new(RendererWindowConfig {
        title: "Game of Life".to_owned(),
        width: config.display_width,
        height: config.display_height,
        target_fps: config.target_fps,
        draw_callback: Box::new(move |mut frame| {
            let state = draw_state.read();
            draw(&mut frame, state.life.grid(), cell_size);
        }),
        event_callback: Some(Box::new(move |event| {
            on_event(&state, &ticker, event);
        })),
    })?;

    log::info!(
        "Opening {}x{} window",
        config.display_width,
        config.display_height
    );
    renderer.run()
}

/// Draws grid lines every `cell_size` pixels and fills each live cell inside its lines.
/// Rows run down the y axis and columns along the x axis.
fn draw(frame: &mut RenderFrame, grid: &Grid, cell_size: u32) {
    frame.fill(BACKGROUND);

    for x in (0..frame.width).step_by(cell_size as usize) {
        frame.draw_vertical_line(x, GRID_LINE);
    }
    for y in (0..frame.height).step_by(cell_size as usize) {
        frame.draw_horizontal_line(y, GRID_LINE);
    }

    let inner_size = cell_size.saturating_sub(1);

    for (pos, cell) in grid.enumerate_cells() {
        if !cell.is_alive() {
            continue;
        }

        frame.draw_square(
            pos.col as u32 * cell_size + 1,
            pos.row as u32 * cell_size + 1,
            inner_size,
            inner_size,
            ALIVE,
        );
    }
}

fn on_event(state: &SharedState, ticker: &TickerHost, event: &WindowEvent) {
    let WindowEvent::KeyboardInput { event, .. } = event else {
        return;
    };

    if event.state != ElementState::Pressed || event.repeat {
        return;
    }

    match event.logical_key.as_ref() {
        Key::Named(NamedKey::Space) => ticker.send(TickerCommand::TogglePause),
        Key::Character("n" | "N") => state.write().advance(1),
        Key::Character("r" | "R") => {
            log::info!("Reseeding");
            state.write().reseed(None);
        }
        _ => {}
    }
}
