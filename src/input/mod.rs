//! Keyboard and mouse state, fed by whatever window loop hosts a lab.
//!
//! The window loop forwards its events through the `on_*` methods and calls `advance`
//! once at the end of every frame:
//!
//! ```rust
//! use easel::input::prelude::*;
//! use easel::math::prelude::Vector2;
//!
//! let mut input = InputState::new();
//! input.on_key_pressed(Key::W);
//! input.on_mouse_moved(Vector2::new(10.0, 0.0));
//!
//! assert!(input.is_key_down(Key::W));
//! assert!(input.is_key_press(Key::W));
//! assert_eq!(input.mouse_movement(), Vector2::new(10.0, 0.0));
//!
//! input.advance();
//! assert!(input.is_key_down(Key::W));
//! assert!(!input.is_key_press(Key::W));
//! ```

pub mod keyboard;
pub mod mouse;

pub mod prelude {
    pub use super::keyboard::Key;
    pub use super::mouse::MouseButton;
    pub use super::InputState;
}

use crate::math::prelude::Vector2;

use self::keyboard::{Key, Keyboard};
use self::mouse::{Mouse, MouseButton};

/// The input state of one frame.
#[derive(Debug, Default)]
pub struct InputState {
    keyboard: Keyboard,
    mouse: Mouse,
}

impl InputState {
    pub fn new() -> Self {
        InputState::default()
    }

    /// Clears every held key and button, e.g. when the window loses focus.
    pub fn reset(&mut self) {
        trace!("[Input] Reset.");
        self.keyboard.reset();
        self.mouse.reset();
    }

    /// Ends the current frame.
    pub fn advance(&mut self) {
        self.keyboard.advance();
        self.mouse.advance();
    }

    #[inline]
    pub fn on_key_pressed(&mut self, key: Key) {
        self.keyboard.on_key_pressed(key);
    }

    #[inline]
    pub fn on_key_released(&mut self, key: Key) {
        self.keyboard.on_key_released(key);
    }

    #[inline]
    pub fn on_mouse_pressed(&mut self, button: MouseButton) {
        self.mouse.on_button_pressed(button);
    }

    #[inline]
    pub fn on_mouse_released(&mut self, button: MouseButton) {
        self.mouse.on_button_released(button);
    }

    #[inline]
    pub fn on_mouse_moved(&mut self, position: Vector2<f32>) {
        self.mouse.on_moved(position);
    }

    /// Checks if a key is currently held down.
    #[inline]
    pub fn is_key_down(&self, key: Key) -> bool {
        self.keyboard.is_key_down(key)
    }

    /// Checks if a key has been pressed down during the last frame.
    #[inline]
    pub fn is_key_press(&self, key: Key) -> bool {
        self.keyboard.is_key_press(key)
    }

    /// Checks if a key has been released during the last frame.
    #[inline]
    pub fn is_key_release(&self, key: Key) -> bool {
        self.keyboard.is_key_release(key)
    }

    /// Checks if either of the shift keys is held down.
    #[inline]
    pub fn is_shift_down(&self) -> bool {
        self.is_key_down(Key::LShift) || self.is_key_down(Key::RShift)
    }

    /// Checks if either of the alt keys is held down.
    #[inline]
    pub fn is_alt_down(&self) -> bool {
        self.is_key_down(Key::LAlt) || self.is_key_down(Key::RAlt)
    }

    #[inline]
    pub fn is_mouse_down(&self, button: MouseButton) -> bool {
        self.mouse.is_button_down(button)
    }

    #[inline]
    pub fn is_mouse_press(&self, button: MouseButton) -> bool {
        self.mouse.is_button_press(button)
    }

    #[inline]
    pub fn is_mouse_release(&self, button: MouseButton) -> bool {
        self.mouse.is_button_release(button)
    }

    /// Gets the mouse position relative to the top-left hand corner of the window.
    #[inline]
    pub fn mouse_position(&self) -> Vector2<f32> {
        self.mouse.position()
    }

    /// Gets mouse movement in pixels since last frame.
    #[inline]
    pub fn mouse_movement(&self) -> Vector2<f32> {
        self.mouse.movement()
    }
}
