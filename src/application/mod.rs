//! A minimal application model for the labs.
//!
//! A lab implements `Application`, whose per-frame methods are called in a pre-determined
//! order by the loop that hosts it: `on_update` first, then `on_render`. Window and
//! context creation stay outside of this crate; `Headless` is a loop without a window,
//! which renders into a `CommandBuffer`.

pub mod settings;
pub use self::settings::{Settings, ViewParams, WindowParams};

use crate::errors::Result;
use crate::input::InputState;
use crate::video::command::CommandBuffer;
use crate::video::{Canvas, Viewport};

/// `Application` is a user-friendly facade to building labs, which defines a number
/// of event functions that get executed in a pre-determined order.
pub trait Application {
    /// `Application::on_update` is called every frame, before any rendering.
    fn on_update(&mut self, _: &InputState, _: f32) -> Result<()> {
        Ok(())
    }

    /// `Application::on_render` is called every frame after `on_update`.
    fn on_render(&mut self, _: &mut dyn Canvas, _: f32) -> Result<()> {
        Ok(())
    }

    /// `Application::on_resize` is called whenever the framebuffer changes its size.
    fn on_resize(&mut self, _: Viewport) {}
}

/// Drives an `Application` without a window.
pub struct Headless {
    input: InputState,
    canvas: CommandBuffer,
    viewport: Viewport,
    frames: u64,
}

impl Headless {
    pub fn new(settings: &Settings) -> Self {
        let size = settings.window.size;
        info!(
            "[Headless] Starts \"{}\" with framebuffer {}x{}.",
            settings.window.title, size.x, size.y
        );

        Headless {
            input: InputState::new(),
            canvas: CommandBuffer::new(),
            viewport: Viewport::new(0, 0, size.x, size.y),
            frames: 0,
        }
    }

    /// Gets the input state, which could be fed with events before `advance`.
    #[inline]
    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    /// Gets the commands recorded during the last frame.
    #[inline]
    pub fn canvas(&self) -> &CommandBuffer {
        &self.canvas
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Gets the number of frames that has been advanced.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Resizes the framebuffer and notifies the application.
    pub fn resize<T: Application>(&mut self, app: &mut T, width: u32, height: u32) {
        self.viewport = Viewport::new(0, 0, width, height);
        app.on_resize(self.viewport);
    }

    /// Runs one frame of `app`.
    pub fn advance<T: Application>(&mut self, app: &mut T, dt: f32) -> Result<()> {
        self.canvas.clear_commands();

        app.on_update(&self.input, dt)?;
        app.on_render(&mut self.canvas, dt)?;

        self.input.advance();
        self.frames += 1;
        trace!("[Headless] Frame {} recorded {} commands.", self.frames, self.canvas.len());
        Ok(())
    }
}
