//! Application Host
//!
//! [`App`] owns the window, the [`Renderer`] and the [`Scene`], and drives
//! one update + render per redraw:
//!
//! 1. tick the [`Timer`]
//! 2. run the user update callback
//! 3. propagate world matrices
//! 4. render
//!
//! The renderer is created lazily in `resumed`; frames before that are not
//! drawn.

pub mod input;

use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::errors::Result;
use crate::renderer::{RenderSettings, Renderer};
use crate::scene::Scene;
use crate::utils::{FpsCounter, Timer};

use self::input::Input;

/// Per-frame callback: scene, this frame's input, and the ticked timer.
pub type UpdateFn = Box<dyn FnMut(&mut Scene, &Input, &Timer)>;

pub const DEFAULT_WIDTH: f64 = 1280.0;
pub const DEFAULT_HEIGHT: f64 = 720.0;

pub struct App {
    window: Option<Arc<Window>>,
    pub title: String,
    pub renderer: Renderer,
    pub scene: Scene,

    update_fn: Option<UpdateFn>,
    timer: Timer,
    fps_counter: FpsCounter,
    input: Input,
}

impl App {
    #[must_use]
    pub fn new() -> Self {
        Self {
            window: None,
            title: "Chomp".into(),
            renderer: Renderer::new(RenderSettings::default()),
            scene: Scene::new(),
            update_fn: None,
            timer: Timer::new(),
            fps_counter: FpsCounter::new(),
            input: Input::new(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_settings(mut self, settings: RenderSettings) -> Self {
        self.renderer = Renderer::new(settings);
        self
    }

    pub fn set_update_fn<F>(&mut self, f: F) -> &mut Self
    where
        F: FnMut(&mut Scene, &Input, &Timer) + 'static,
    {
        self.update_fn = Some(Box::new(f));
        self
    }

    /// Aspect ratio of the initial window size.
    #[must_use]
    pub fn initial_aspect() -> f32 {
        (DEFAULT_WIDTH / DEFAULT_HEIGHT) as f32
    }

    pub fn run(mut self) -> Result<()> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);
        event_loop.run_app(&mut self)?;
        Ok(())
    }

    fn update(&mut self) {
        self.timer.tick();

        if let Some(update_fn) = &mut self.update_fn {
            update_fn(&mut self.scene, &self.input, &self.timer);
        }

        self.input.end_frame();
        self.scene.update_matrix_world();

        if let Some(fps) = self.fps_counter.record(self.timer.delta) {
            log::debug!("{fps:.1} FPS");
            if let Some(window) = &self.window {
                window.set_title(&format!("{} | FPS: {fps:.0}", self.title));
            }
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.renderer.resize(width, height);
        self.input.handle_resize(width, height);

        if height > 0
            && let Some((_, camera)) = self.scene.query_main_camera_bundle()
        {
            camera.set_aspect(width as f32 / height as f32);
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attributes = Window::default_attributes()
            .with_title(self.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(DEFAULT_WIDTH, DEFAULT_HEIGHT));

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };
        self.window = Some(window.clone());

        let size = window.inner_size();
        log::info!("Initializing renderer ({}x{})", size.width, size.height);

        if let Err(e) = pollster::block_on(self.renderer.init(window, size.width, size.height)) {
            log::error!("Fatal renderer error: {e}");
            event_loop.exit();
            return;
        }

        self.resize(size.width, size.height);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                self.resize(physical_size.width, physical_size.height);
            }
            WindowEvent::RedrawRequested => {
                self.update();
                self.renderer.render(&self.scene);
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.input.handle_cursor_move(position.x, position.y);
            }
            WindowEvent::CursorLeft { .. } => {
                self.input.handle_cursor_left();
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.input.handle_mouse_input(state, button);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.input.handle_mouse_wheel(delta);
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
