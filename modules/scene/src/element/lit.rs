use easel::math::prelude::*;

/// A point light located at the origin of its node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lit {
    /// Is this light enable.
    pub enable: bool,
    /// Color of the light.
    pub color: Color,
    pub intensity: f32,
    /// Maximum radius of the light's affected area.
    pub radius: f32,
}

impl Default for Lit {
    fn default() -> Self {
        Lit {
            enable: true,
            color: Color::white(),
            intensity: 1.0,
            radius: 10.0,
        }
    }
}
