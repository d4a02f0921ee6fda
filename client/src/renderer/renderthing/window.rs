use std::{sync::Arc, time::Duration};

use anyhow::Context;
use pixels::{Pixels, PixelsBuilder, SurfaceTexture, wgpu::TextureFormat};
use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalSize},
    event::WindowEvent,
    event_loop::ActiveEventLoop,
    window::{Window, WindowAttributes},
};

use super::frame::RenderFrame;
use crate::sleeper::Sleeper;

pub(super) struct RendererWindow {
    config: RendererWindowConfig,
    resumed_window: Option<ResumedWindow>,
    sleeper: Sleeper,
}

impl RendererWindow {
    pub fn new(config: RendererWindowConfig) -> Self {
        let sleeper = {
            let target_frame_time = Duration::from_micros(1_000_000 / config.target_fps.max(1));
            Sleeper::new(target_frame_time)
        };

        Self {
            config,
            resumed_window: None,
            sleeper,
        }
    }

    fn resume(&self, event_loop: &ActiveEventLoop) -> anyhow::Result<ResumedWindow> {
        let window = Arc::new({
            let window_size = LogicalSize::new(self.config.width, self.config.height);

            event_loop
                .create_window(
                    WindowAttributes::default()
                        .with_title(self.config.title.clone())
                        .with_inner_size(window_size),
                )
                .context("Creating window")?
        });

        // The buffer keeps the configured size and pixels scales it onto whatever the surface is.
        let pixels = {
            let PhysicalSize { width, height } = window.inner_size();
            let surface_texture = SurfaceTexture::new(width, height, window.clone());

            PixelsBuilder::new(self.config.width, self.config.height, surface_texture)
                .texture_format(TextureFormat::Rgba8UnormSrgb)
                .build()
                .context("Creating pixels buffer")?
        };

        Ok(ResumedWindow { window, pixels })
    }
}

pub struct RendererWindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub target_fps: u64,
    pub draw_callback: Box<dyn FnMut(RenderFrame)>,
    pub event_callback: Option<Box<dyn FnMut(&WindowEvent)>>,
}

struct ResumedWindow {
    window: Arc<Window>,
    pixels: Pixels<'static>,
}

impl ApplicationHandler for RendererWindow {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.resumed_window.is_some() {
            return;
        }

        match self.resume(event_loop) {
            Ok(resumed_window) => {
                log::debug!("Window created");
                resumed_window.window.request_redraw();
                self.resumed_window = Some(resumed_window);
            }
            Err(e) => {
                log::error!("{e:?}");
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let Some(ResumedWindow { window, pixels }) = self.resumed_window.as_mut() else {
            return;
        };

        match event {
            WindowEvent::RedrawRequested => {
                let next_frame = RenderFrame {
                    width: self.config.width,
                    height: self.config.height,
                    buffer: pixels.frame_mut(),
                };

                (self.config.draw_callback)(next_frame);

                if let Err(e) = pixels.render() {
                    log::error!("Rendering with pixels: {e}");
                    event_loop.exit();
                    return;
                }

                // FIXME: It isn't ideal that we're hanging the entire event loop just for the throttled redraw loop.
                //        This can make things such as resizing less responsive, since we're waiting here instead of handling the resize.
                self.sleeper.sleep();
                window.request_redraw();
            }
            WindowEvent::Resized(PhysicalSize { width, height }) => {
                if let Err(e) = pixels.resize_surface(width, height) {
                    log::warn!("Resizing surface to {width}x{height}: {e}");
                }
                window.request_redraw();
            }
            WindowEvent::CloseRequested => {
                log::info!("Window closed");
                event_loop.exit();
            }
            _ => {}
        }

        if let Some(event_callback) = &mut self.config.event_callback {
            event_callback(&event);
        }
    }
}
