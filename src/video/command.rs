use crate::math::prelude::{Color, Matrix4, One};

use super::{Canvas, Light, Primitive, ShaderHandle, TextureHandle, Vertex, Viewport, MAX_LITS};

/// The render state that a draw call was issued under.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderState {
    pub viewport: Viewport,
    pub projection: Matrix4<f32>,
    pub model_view: Matrix4<f32>,
    pub texture: Option<TextureHandle>,
    pub shader: Option<ShaderHandle>,
    pub depth_write: bool,
    pub blend: bool,
}

impl Default for RenderState {
    fn default() -> Self {
        RenderState {
            viewport: Viewport::default(),
            projection: Matrix4::one(),
            model_view: Matrix4::one(),
            texture: None,
            shader: None,
            depth_write: true,
            blend: false,
        }
    }
}

/// A recorded batch of primitives.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    pub state: RenderState,
    pub primitive: Primitive,
    pub vertices: Vec<Vertex>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Clear(Color),
    SetViewport(Viewport),
    SetProjection(Matrix4<f32>),
    SetModelView(Matrix4<f32>),
    BindTexture(Option<TextureHandle>),
    BindShader(Option<ShaderHandle>),
    SetDepthWrite(bool),
    SetBlend(bool),
    SetLight(usize, Option<Light>),
    Draw(DrawCall),
}

/// A headless `Canvas` which records every command it receives.
#[derive(Debug, Default)]
pub struct CommandBuffer {
    cmds: Vec<Command>,
    state: RenderState,
    lits: [Option<Light>; MAX_LITS],
}

impl CommandBuffer {
    /// Creates a new and empty `CommandBuffer`.
    #[inline]
    pub fn new() -> Self {
        CommandBuffer {
            cmds: Vec::with_capacity(32),
            state: RenderState::default(),
            lits: [None; MAX_LITS],
        }
    }

    /// Gets the recorded commands, in submission order.
    #[inline]
    pub fn commands(&self) -> &[Command] {
        &self.cmds
    }

    /// Iterates the recorded draw calls, in submission order.
    pub fn draw_calls(&self) -> impl Iterator<Item = &DrawCall> {
        self.cmds.iter().filter_map(|v| match v {
            Command::Draw(dc) => Some(dc),
            _ => None,
        })
    }

    /// Gets the current render state.
    #[inline]
    pub fn state(&self) -> &RenderState {
        &self.state
    }

    /// Gets the lights that are currently set.
    #[inline]
    pub fn lights(&self) -> &[Option<Light>] {
        &self.lits
    }

    /// Discards all the recorded commands. The render state is kept.
    #[inline]
    pub fn clear_commands(&mut self) {
        self.cmds.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cmds.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }
}

impl Canvas for CommandBuffer {
    fn clear(&mut self, color: Color) {
        self.cmds.push(Command::Clear(color));
    }

    fn set_viewport(&mut self, viewport: Viewport) {
        self.state.viewport = viewport;
        self.cmds.push(Command::SetViewport(viewport));
    }

    fn set_projection(&mut self, projection: &Matrix4<f32>) {
        self.state.projection = *projection;
        self.cmds.push(Command::SetProjection(*projection));
    }

    fn set_model_view(&mut self, model_view: &Matrix4<f32>) {
        self.state.model_view = *model_view;
        self.cmds.push(Command::SetModelView(*model_view));
    }

    fn bind_texture(&mut self, texture: Option<TextureHandle>) {
        self.state.texture = texture;
        self.cmds.push(Command::BindTexture(texture));
    }

    fn bind_shader(&mut self, shader: Option<ShaderHandle>) {
        self.state.shader = shader;
        self.cmds.push(Command::BindShader(shader));
    }

    fn set_depth_write(&mut self, enable: bool) {
        self.state.depth_write = enable;
        self.cmds.push(Command::SetDepthWrite(enable));
    }

    fn set_blend(&mut self, enable: bool) {
        self.state.blend = enable;
        self.cmds.push(Command::SetBlend(enable));
    }

    fn set_light(&mut self, slot: usize, light: Option<Light>) {
        if slot >= MAX_LITS {
            warn!("[CommandBuffer] Light slot {} is out of range.", slot);
            return;
        }

        self.lits[slot] = light;
        self.cmds.push(Command::SetLight(slot, light));
    }

    fn draw(&mut self, primitive: Primitive, vertices: &[Vertex]) {
        self.cmds.push(Command::Draw(DrawCall {
            state: self.state,
            primitive,
            vertices: vertices.to_vec(),
        }));
    }
}
