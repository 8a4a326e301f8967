use std::ops::{Deref, DerefMut};

use super::{Canvas, ShaderHandle, TextureHandle};

/// The texture and shader bound to a `Canvas`. `None` means nothing is bound.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Bindings {
    pub texture: Option<TextureHandle>,
    pub shader: Option<ShaderHandle>,
}

impl Bindings {
    pub fn new(texture: Option<TextureHandle>, shader: Option<ShaderHandle>) -> Self {
        Bindings { texture, shader }
    }

    /// Overrides `self` with the non-empty bindings of `overrides`.
    #[inline]
    pub fn inherit(&self, overrides: Bindings) -> Bindings {
        Bindings {
            texture: overrides.texture.or(self.texture),
            shader: overrides.shader.or(self.shader),
        }
    }
}

/// Binds a texture and a shader to a `Canvas` for as long as the guard lives. The
/// `inherited` bindings are restored when the guard goes out of scope, on every exit
/// path.
///
/// Nothing is touched for empty overrides, so the inherited bindings stay in effect.
pub struct BindingGuard<'a, C: Canvas + ?Sized> {
    canvas: &'a mut C,
    inherited: Bindings,
    texture: bool,
    shader: bool,
}

impl<'a, C: Canvas + ?Sized> BindingGuard<'a, C> {
    pub fn new(canvas: &'a mut C, overrides: Bindings, inherited: Bindings) -> Self {
        if overrides.texture.is_some() {
            canvas.bind_texture(overrides.texture);
        }

        if overrides.shader.is_some() {
            canvas.bind_shader(overrides.shader);
        }

        BindingGuard {
            canvas,
            inherited,
            texture: overrides.texture.is_some(),
            shader: overrides.shader.is_some(),
        }
    }
}

impl<'a, C: Canvas + ?Sized> Deref for BindingGuard<'a, C> {
    type Target = C;

    fn deref(&self) -> &Self::Target {
        self.canvas
    }
}

impl<'a, C: Canvas + ?Sized> DerefMut for BindingGuard<'a, C> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.canvas
    }
}

impl<'a, C: Canvas + ?Sized> Drop for BindingGuard<'a, C> {
    fn drop(&mut self) {
        if self.shader {
            self.canvas.bind_shader(self.inherited.shader);
        }

        if self.texture {
            self.canvas.bind_texture(self.inherited.texture);
        }
    }
}
