use std::collections::HashSet;

use crate::math::prelude::Vector2;

/// Describes a button of a mouse controller.
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u8),
}

/// Buttons and cursor of the mouse. Positions are measured in pixels relative to the
/// top-left corner of the window.
#[derive(Debug)]
pub struct Mouse {
    downs: HashSet<MouseButton>,
    presses: HashSet<MouseButton>,
    releases: HashSet<MouseButton>,
    last_position: Vector2<f32>,
    position: Vector2<f32>,
}

impl Default for Mouse {
    fn default() -> Self {
        Mouse::new()
    }
}

impl Mouse {
    pub fn new() -> Self {
        Mouse {
            downs: HashSet::new(),
            presses: HashSet::new(),
            releases: HashSet::new(),
            last_position: Vector2::new(0.0, 0.0),
            position: Vector2::new(0.0, 0.0),
        }
    }

    #[inline]
    pub fn reset(&mut self) {
        self.downs.clear();
        self.presses.clear();
        self.releases.clear();
        self.last_position = Vector2::new(0.0, 0.0);
        self.position = Vector2::new(0.0, 0.0);
    }

    #[inline]
    pub fn advance(&mut self) {
        self.presses.clear();
        self.releases.clear();
        self.last_position = self.position;
    }

    #[inline]
    pub fn on_moved(&mut self, position: Vector2<f32>) {
        self.position = position;
    }

    #[inline]
    pub fn on_button_pressed(&mut self, button: MouseButton) {
        if self.downs.insert(button) {
            self.presses.insert(button);
        }
    }

    #[inline]
    pub fn on_button_released(&mut self, button: MouseButton) {
        if self.downs.remove(&button) {
            self.releases.insert(button);
        }
    }

    #[inline]
    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.downs.contains(&button)
    }

    #[inline]
    pub fn is_button_press(&self, button: MouseButton) -> bool {
        self.presses.contains(&button)
    }

    #[inline]
    pub fn is_button_release(&self, button: MouseButton) -> bool {
        self.releases.contains(&button)
    }

    #[inline]
    pub fn position(&self) -> Vector2<f32> {
        self.position
    }

    /// Gets the cursor movement since last frame.
    #[inline]
    pub fn movement(&self) -> Vector2<f32> {
        self.position - self.last_position
    }
}
