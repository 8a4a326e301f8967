use easel::math::prelude::*;
use easel::video::{Canvas, Primitive, Vertex};

/// Corner indices and normal of each face.
const FACES: [([usize; 4], [f32; 3]); 6] = [
    // top
    ([1, 0, 4, 5], [0.0, 1.0, 0.0]),
    // bottom
    ([2, 3, 7, 6], [0.0, -1.0, 0.0]),
    // left
    ([5, 4, 6, 7], [-1.0, 0.0, 0.0]),
    // right
    ([0, 1, 3, 2], [1.0, 0.0, 0.0]),
    // front
    ([1, 5, 7, 3], [0.0, 0.0, -1.0]),
    // back
    ([4, 0, 2, 6], [0.0, 0.0, 1.0]),
];

const TEXCOORDS: [[f32; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

/// A cube centered at the origin, made of six quads of distinct flat colors. Faces are
/// textured with the whole texture when one is bound.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cube {
    pub half_size: f32,
    /// The alpha channel of every face.
    pub alpha: u8,
    /// Colors of the top, bottom, left, right, front and back faces.
    pub colors: [Color; 6],
}

impl Default for Cube {
    fn default() -> Self {
        Cube::new(0.5)
    }
}

impl Cube {
    pub fn new(half_size: f32) -> Self {
        Cube {
            half_size,
            alpha: 255,
            colors: [
                Color::rgb8(169, 102, 194),
                Color::rgb8(164, 33, 14),
                Color::rgb8(228, 69, 147),
                Color::rgb8(136, 157, 210),
                Color::rgb8(138, 250, 122),
                Color::rgb8(1, 37, 146),
            ],
        }
    }

    #[inline]
    pub fn with_alpha(mut self, alpha: u8) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn vertices(&self) -> Vec<Vertex> {
        let h = self.half_size;
        let corners = [
            Vector3::new(h, h, h),
            Vector3::new(h, h, -h),
            Vector3::new(h, -h, h),
            Vector3::new(h, -h, -h),
            Vector3::new(-h, h, h),
            Vector3::new(-h, h, -h),
            Vector3::new(-h, -h, h),
            Vector3::new(-h, -h, -h),
        ];

        let mut vertices = Vec::with_capacity(24);
        for (&(indices, normal), color) in FACES.iter().zip(self.colors.iter()) {
            let color = color.with_alpha8(self.alpha);
            for (&i, &uv) in indices.iter().zip(TEXCOORDS.iter()) {
                let v = Vertex::new(corners[i], color)
                    .with_texcoord(uv.into())
                    .with_normal(normal.into());
                vertices.push(v);
            }
        }

        vertices
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.draw(Primitive::Quads, &self.vertices());
    }
}
