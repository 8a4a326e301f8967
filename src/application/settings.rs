//! Functions for loading lab settings.

use crate::errors::Result;
use crate::math::prelude::Vector2;

/// A structure containing configuration data of a lab, which are used to specify the
/// window and the way a scene is viewed and navigated.
///
/// Missing fields fall back to their defaults when parsing:
///
/// ```rust
/// use easel::application::Settings;
///
/// let settings = Settings::from_json(r#"{ "view": { "move_step": 0.5 } }"#).unwrap();
/// assert_eq!(settings.view.move_step, 0.5);
/// assert_eq!(settings.window.size.x, 1280);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window: WindowParams,
    pub view: ViewParams,
}

impl Settings {
    /// Parses settings from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        let settings = serde_json::from_str(json)?;
        info!("[Settings] Loaded {:?}.", settings);
        Ok(settings)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowParams {
    /// Sets the title of window.
    pub title: String,
    /// Sets the size in pixels of the framebuffer.
    pub size: Vector2<u32>,
}

impl Default for WindowParams {
    fn default() -> Self {
        WindowParams {
            title: "Lab".to_owned(),
            size: Vector2::new(1280, 720),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewParams {
    /// The distance between the observer camera and the origin along +Z.
    pub observer_distance: f32,
    /// The half height of the orthographic viewing box.
    pub view_size: f32,
    /// The distance moved per frame while a movement key is held.
    pub move_step: f32,
    /// Multiplier of `move_step` while shift is held.
    pub fast_multiplier: f32,
    /// Multiplier of `move_step` while alt is held.
    pub slow_multiplier: f32,
    /// Degrees rotated per pixel of mouse drag.
    pub rotate_sensitivity: f32,
}

impl Default for ViewParams {
    fn default() -> Self {
        ViewParams {
            observer_distance: 10.0,
            view_size: 10.0,
            move_step: 0.1,
            fast_multiplier: 10.0,
            slow_multiplier: 0.1,
            rotate_sensitivity: 0.1,
        }
    }
}
