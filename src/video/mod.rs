//! The opaque drawing capability consumed by the scene graph.
//!
//! Rasterization itself belongs to whatever graphics library hosts a lab. The scene
//! graph only ever talks to a `Canvas`, an immediate-mode sink of state changes and
//! primitive batches. `CommandBuffer` is a headless `Canvas` which records everything
//! it receives, together with the render state each draw call was issued under.
//!
//! Textures and shaders are referred by opaque handles, their storage is managed
//! outside of this crate.

pub mod command;
pub mod guard;

pub mod prelude {
    pub use super::command::{Command, CommandBuffer, DrawCall, RenderState};
    pub use super::guard::{BindingGuard, Bindings};
    pub use super::{Canvas, Light, Primitive, ShaderHandle, TextureHandle, Vertex, Viewport};
}

use crate::math::prelude::{Color, Matrix4, Point3, Vector2, Vector3};

impl_handle!(TextureHandle);
impl_handle!(ShaderHandle);

/// The maximum number of lights a `Canvas` is able to take.
pub const MAX_LITS: usize = 8;

/// The rectangle of the framebuffer that drawings are mapped to, in pixels.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Viewport {
            x,
            y,
            width,
            height,
        }
    }

    /// Gets the aspect ratio (width / height) of this viewport.
    ///
    /// Zero-area viewports are not clamped.
    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

/// The topology of a vertex batch.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Primitive {
    /// Every two vertices make a segment.
    Lines,
    /// Every three vertices make a triangle.
    Triangles,
    /// Every four vertices make a quad.
    Quads,
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub position: Vector3<f32>,
    pub color: Color,
    pub texcoord: Vector2<f32>,
    pub normal: Vector3<f32>,
}

impl Vertex {
    pub fn new(position: Vector3<f32>, color: Color) -> Self {
        Vertex {
            position,
            color,
            texcoord: Vector2::new(0.0, 0.0),
            normal: Vector3::new(0.0, 0.0, 0.0),
        }
    }

    #[inline]
    pub fn with_texcoord(mut self, texcoord: Vector2<f32>) -> Self {
        self.texcoord = texcoord;
        self
    }

    #[inline]
    pub fn with_normal(mut self, normal: Vector3<f32>) -> Self {
        self.normal = normal;
        self
    }
}

/// A point light, expressed in the view space of the camera being rendered.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Light {
    pub position: Point3<f32>,
    pub color: Color,
    pub intensity: f32,
    /// Maximum radius of the affected area.
    pub radius: f32,
}

/// An immediate-mode drawing sink.
///
/// Every state set through a `Canvas` stays in effect until it is set again. Matrices are
/// column-major `cgmath` matrices; the projection maps view space onto the normalized
/// device cube, the model-view maps the local space of the drawn vertices onto view
/// space.
pub trait Canvas {
    /// Clears the color and depth attachments of the whole framebuffer.
    fn clear(&mut self, color: Color);

    fn set_viewport(&mut self, viewport: Viewport);

    fn set_projection(&mut self, projection: &Matrix4<f32>);

    fn set_model_view(&mut self, model_view: &Matrix4<f32>);

    /// Binds a texture for the following draw calls, `None` unbinds it.
    fn bind_texture(&mut self, texture: Option<TextureHandle>);

    /// Binds a shader for the following draw calls, `None` falls back to the fixed
    /// function pipeline.
    fn bind_shader(&mut self, shader: Option<ShaderHandle>);

    fn set_depth_write(&mut self, enable: bool);

    /// Enables standard alpha blending, `src * alpha + dst * (1 - alpha)`.
    fn set_blend(&mut self, enable: bool);

    /// Sets or clears the light at `slot`, which must be less than `MAX_LITS`.
    fn set_light(&mut self, slot: usize, light: Option<Light>);

    fn draw(&mut self, primitive: Primitive, vertices: &[Vertex]);
}
