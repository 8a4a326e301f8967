use std::f32::consts::PI;

use easel::math::prelude::*;
use easel::video::{Canvas, Primitive, Vertex};

/// A UV sphere centered at the origin, with its poles on the Z axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    pub radius: f32,
    /// Subdivisions around the Z axis.
    pub slices: u32,
    /// Subdivisions along the Z axis.
    pub stacks: u32,
    pub color: Color,
}

impl Default for Sphere {
    fn default() -> Self {
        Sphere::new(1.0)
    }
}

impl Sphere {
    pub fn new(radius: f32) -> Self {
        Sphere {
            radius,
            slices: 64,
            stacks: 64,
            color: Color::white(),
        }
    }

    fn vertex(&self, slice: u32, stack: u32) -> Vertex {
        let theta = 2.0 * PI * slice as f32 / self.slices as f32;
        let phi = PI * stack as f32 / self.stacks as f32;

        let normal = Vector3::new(theta.cos() * phi.sin(), theta.sin() * phi.sin(), phi.cos());
        let uv = Vector2::new(
            slice as f32 / self.slices as f32,
            1.0 - stack as f32 / self.stacks as f32,
        );

        Vertex::new(normal * self.radius, self.color)
            .with_normal(normal)
            .with_texcoord(uv)
    }

    /// Gets the quads, stack by stack from the +Z pole.
    pub fn vertices(&self) -> Vec<Vertex> {
        let mut vertices = Vec::with_capacity((self.slices * self.stacks * 4) as usize);

        for j in 0..self.stacks {
            for i in 0..self.slices {
                vertices.push(self.vertex(i, j));
                vertices.push(self.vertex(i, j + 1));
                vertices.push(self.vertex(i + 1, j + 1));
                vertices.push(self.vertex(i + 1, j));
            }
        }

        vertices
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.draw(Primitive::Quads, &self.vertices());
    }
}
