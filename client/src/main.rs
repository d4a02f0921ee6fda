use std::{env, thread};

use anyhow::Context;
use config::Config;
use state::{SharedState, State};
use ticker::TickerHost;

mod cli;
mod config;
mod renderer;
mod sleeper;
mod state;
mod ticker;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::load(env::args().nth(1)).context("Loading config")?;
    let board_size = config.board_size()?;

    log::info!(
        "Board {}x{} cells of {}px, {} generations/s",
        board_size.height,
        board_size.width,
        config.cell_size,
        config.speed
    );

    let grid = match (config.randomize, config.seed) {
        (true, Some(seed)) => board_size.create_seeded(seed),
        (randomize, _) => board_size.create(randomize),
    };

    let state = SharedState::new(State::new(grid, config.parallel));
    let ticker = TickerHost::start(state.clone(), config.speed);

    let cli_state = state.clone();
    let cli_ticker = ticker.clone();
    thread::spawn(move || cli::run_cli(cli_state, cli_ticker));

    renderer::run(state, ticker, &config)
}
