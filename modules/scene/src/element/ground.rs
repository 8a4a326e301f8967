use easel::math::prelude::*;
use easel::video::{Canvas, Primitive, Vertex};

/// A grid of line segments on the plane `y = height`, spanning `[-size, size]` along
/// both X and Z with a line every `step`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ground {
    pub size: f32,
    pub step: f32,
    pub height: f32,
    pub color: Color,
}

impl Default for Ground {
    fn default() -> Self {
        Ground {
            size: 50.0,
            step: 5.0,
            height: -2.5,
            color: Color::silver(),
        }
    }
}

impl Ground {
    pub fn new(size: f32, step: f32, height: f32) -> Self {
        Ground {
            size,
            step,
            height,
            ..Default::default()
        }
    }

    /// Gets the segments, lines along X first, then lines along Z. Nothing is generated
    /// for a non-positive step.
    pub fn vertices(&self) -> Vec<Vertex> {
        if !(self.step > 0.0) || self.size < 0.0 {
            return Vec::new();
        }

        let (s, h) = (self.size, self.height);
        let lines = (2.0 * s / self.step).floor() as usize + 1;
        let offsets: Vec<_> = (0..lines).map(|i| -s + i as f32 * self.step).collect();

        let mut vertices = Vec::with_capacity(lines * 4);
        for &v in &offsets {
            vertices.push(Vertex::new(Vector3::new(-s, h, v), self.color));
            vertices.push(Vertex::new(Vector3::new(s, h, v), self.color));
        }

        for &v in &offsets {
            vertices.push(Vertex::new(Vector3::new(v, h, -s), self.color));
            vertices.push(Vertex::new(Vector3::new(v, h, s), self.color));
        }

        vertices
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.draw(Primitive::Lines, &self.vertices());
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn grid() {
        let vertices = Ground::default().vertices();
        assert_eq!(vertices.len(), 21 * 4);
        assert_eq!(vertices[0].position, Vector3::new(-50.0, -2.5, -50.0));
        assert_eq!(vertices[41].position, Vector3::new(50.0, -2.5, 50.0));

        assert!(Ground::new(1.0, 0.0, 0.0).vertices().is_empty());
    }
}
