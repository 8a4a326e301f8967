use easel::math::prelude::*;
use easel::video::{Canvas, Primitive, Vertex};

/// An axis indicator: three segments from the origin along X, Y and Z, colored red,
/// green and blue.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    /// The length of the segments.
    pub size: f32,
}

impl Default for Axis {
    fn default() -> Self {
        Axis { size: 1.0 }
    }
}

impl Axis {
    pub fn new(size: f32) -> Self {
        Axis { size }
    }

    pub fn vertices(&self) -> [Vertex; 6] {
        let o = Vector3::new(0.0, 0.0, 0.0);
        let s = self.size;

        [
            Vertex::new(o, Color::red()),
            Vertex::new(Vector3::new(s, 0.0, 0.0), Color::red()),
            Vertex::new(o, Color::green()),
            Vertex::new(Vector3::new(0.0, s, 0.0), Color::green()),
            Vertex::new(o, Color::blue()),
            Vertex::new(Vector3::new(0.0, 0.0, s), Color::blue()),
        ]
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.draw(Primitive::Lines, &self.vertices());
    }
}
