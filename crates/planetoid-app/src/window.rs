//! Window creation and event handling via winit.
//!
//! [`AppState`] implements winit's [`ApplicationHandler`]: it owns the sprite
//! renderer, the displayed [`RenderState`], the frame clock and the GPU
//! state. Sprites are regenerated in `about_to_wait` when a clock tick is
//! due, and a redraw is requested only then.

use std::sync::Arc;
use std::time::Instant;

use planetoid_config::Config;
use planetoid_render::{RenderContext, SpriteCompositor, SurfaceError, init_render_context_blocking};
use planetoid_sprite::{RenderState, SphereRenderer};
use tracing::{error, info, instrument, warn};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowAttributes, WindowId};

use crate::frame_clock::FrameClock;

/// Errors that end the windowed run.
#[derive(Debug, thiserror::Error)]
pub enum WindowError {
    /// The winit event loop could not be created or failed while running.
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
}

/// Returns [`WindowAttributes`] based on the given configuration.
pub fn window_attributes_from_config(config: &Config) -> WindowAttributes {
    WindowAttributes::default()
        .with_title(config.window.title.clone())
        .with_inner_size(winit::dpi::LogicalSize::new(
            config.window.width as f64,
            config.window.height as f64,
        ))
}

/// Application state driven by the winit event loop.
pub struct AppState {
    config: Config,
    renderer: SphereRenderer,
    state: Option<RenderState>,
    clock: FrameClock,
    window: Option<Arc<Window>>,
    gpu: Option<RenderContext>,
    compositor: Option<SpriteCompositor>,
}

impl AppState {
    /// Create application state; the window opens on `resumed`.
    pub fn new(config: Config, renderer: SphereRenderer) -> Self {
        let clock = FrameClock::new(config.clock.tick_hz, config.clock.max_frame_time);
        Self {
            config,
            renderer,
            state: None,
            clock,
            window: None,
            gpu: None,
            compositor: None,
        }
    }

    /// Run due clock ticks, regenerating the sprites once per tick.
    /// Returns whether the displayed frame changed.
    fn step(&mut self) -> bool {
        let Some(mut state) = self.state.take() else {
            return false;
        };
        let renderer = &self.renderer;
        let ticks = self.clock.tick(|dt| {
            state = renderer.update(state.clone(), dt);
        });
        self.state = Some(state);
        ticks > 0
    }

    /// Present the current textures.
    fn draw(&mut self, event_loop: &ActiveEventLoop) {
        let result = match (&self.gpu, &self.compositor) {
            (Some(gpu), Some(compositor)) => compositor.draw(gpu),
            _ => return,
        };

        match result {
            Ok(()) => {}
            Err(SurfaceError::Lost) => {
                if let (Some(window), Some(gpu)) = (&self.window, &mut self.gpu) {
                    let size = window.inner_size();
                    gpu.resize(size.width, size.height);
                }
            }
            Err(SurfaceError::OutOfMemory) => {
                error!("GPU out of memory");
                event_loop.exit();
            }
            Err(SurfaceError::Timeout) => {
                warn!("Surface timeout, skipping frame");
            }
        }
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = window_attributes_from_config(&self.config);
        let window = match event_loop.create_window(attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                error!("Window creation failed: {e}");
                event_loop.exit();
                return;
            }
        };

        let ctx = match init_render_context_blocking(window.clone(), self.config.window.vsync) {
            Ok(ctx) => ctx,
            Err(e) => {
                error!("GPU initialization failed: {e}");
                event_loop.exit();
                return;
            }
        };

        let state = self
            .state
            .take()
            .unwrap_or_else(|| self.renderer.initial_state());
        self.compositor = Some(SpriteCompositor::new(&ctx, &state));
        self.state = Some(state);
        self.gpu = Some(ctx);

        let size = window.inner_size();
        info!("Window opened at {}x{}", size.width, size.height);
        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                info!(
                    ticks = self.clock.tick_count(),
                    polls = self.clock.frame_count(),
                    simulated_secs = self.clock.total_time(),
                    "Close requested, shutting down"
                );
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(new_size.width, new_size.height);
                    if let Some(compositor) = &self.compositor {
                        compositor.resize(gpu);
                    }
                    info!("Window resized to {}x{}", new_size.width, new_size.height);
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            WindowEvent::RedrawRequested => self.draw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.step() {
            if let (Some(gpu), Some(compositor), Some(state)) =
                (&self.gpu, &self.compositor, &self.state)
            {
                compositor.upload(gpu, state);
            }
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(
            Instant::now() + self.clock.until_next_tick(),
        ));
    }
}

/// Creates an event loop and runs the application until the window closes.
#[instrument(skip_all)]
pub fn run(config: Config, renderer: SphereRenderer) -> Result<(), WindowError> {
    let event_loop = EventLoop::new()?;
    let mut app = AppState::new(config, renderer);
    event_loop.run_app(&mut app)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use planetoid_sprite::SpriteSettings;

    fn tiny_app() -> AppState {
        let renderer = SphereRenderer::new(SpriteSettings {
            planet_size: 16,
            cloud_shrink: 4,
            ..SpriteSettings::default()
        });
        AppState::new(Config::default(), renderer)
    }

    #[test]
    fn test_window_attributes_from_default_config() {
        let attrs = window_attributes_from_config(&Config::default());
        assert_eq!(attrs.title, "Planetoid");
        assert_eq!(
            attrs.inner_size,
            Some(winit::dpi::Size::Logical(winit::dpi::LogicalSize::new(
                640.0, 480.0
            )))
        );
    }

    #[test]
    fn test_window_attributes_follow_config() {
        let mut config = Config::default();
        config.window.title = "Moon".to_string();
        config.window.width = 300;
        config.window.height = 200;
        let attrs = window_attributes_from_config(&config);
        assert_eq!(attrs.title, "Moon");
        assert_eq!(
            attrs.inner_size,
            Some(winit::dpi::Size::Logical(winit::dpi::LogicalSize::new(
                300.0, 200.0
            )))
        );
    }

    #[test]
    fn test_no_state_before_resume() {
        let mut app = tiny_app();
        assert!(app.state.is_none());
        assert!(!app.step(), "nothing to advance before the window opens");
    }

    #[test]
    fn test_no_redraw_until_a_tick_is_due() {
        let mut app = tiny_app();
        let initial = app.renderer.initial_state();
        app.state = Some(initial.clone());

        // Half a hertz: the first tick is two seconds away.
        app.clock = FrameClock::new(0.5, 2.0);
        assert!(!app.step());
        assert_eq!(app.state.as_ref(), Some(&initial));
        assert_eq!(app.clock.tick_count(), 0);
    }

    #[test]
    fn test_step_regenerates_on_due_tick() {
        let mut app = tiny_app();
        let initial = app.renderer.initial_state();
        app.state = Some(initial.clone());

        app.clock = FrameClock::new(1000.0, 1.0);
        std::thread::sleep(std::time::Duration::from_millis(5));
        assert!(app.step());
        let state = app.state.as_ref().unwrap();
        assert!(state.rotation > initial.rotation);
    }
}
