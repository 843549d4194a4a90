//! Boundary between the UI draw tree and a rendering backend.
//!
//! The renderer only issues immediate-mode primitives; textures, fonts and
//! shader objects stay opaque handles owned by the backend.

use std::borrow::Cow;
use std::fmt;

use crate::coords::{Rect, Vec2, Viewport};
use crate::paint::Color;

use super::error::UiError;
use super::records::{FontId, TextureId};

/// Framebuffer blend state.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum BlendMode {
    /// Straight alpha: `src * a + dst * (1 - a)`.
    #[default]
    Alpha,
    /// `src + dst`.
    Additive,
    /// Premultiplied alpha: `src + dst * (1 - a)`.
    PreMultAlpha,
    /// Blending off.
    Disabled,
}

/// Shader program identified by its vertex and fragment asset names.
///
/// This is the key backends cache compiled programs under.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct ShaderProgram {
    pub vertex: Cow<'static, str>,
    pub fragment: Cow<'static, str>,
}

impl ShaderProgram {
    pub fn new(vertex: impl Into<Cow<'static, str>>, fragment: impl Into<Cow<'static, str>>) -> Self {
        Self { vertex: vertex.into(), fragment: fragment.into() }
    }
}

impl fmt::Display for ShaderProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}", self.vertex, self.fragment)
    }
}

/// Backend-defined handle of a loaded shader program.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ShaderId(pub u64);

/// Primitive sink the UI renderer draws into.
///
/// Implementations own their clip and blend stacks as well as a resource
/// cache for shader programs. All coordinates are render-target pixels.
pub trait UiBackend {
    /// Current render-target size.
    fn viewport(&self) -> Viewport;

    fn push_blend_mode(&mut self, mode: BlendMode);

    fn pop_blend_mode(&mut self) -> Result<(), UiError>;

    /// Pushes `rect` intersected with the active clip region.
    ///
    /// A nested clip can only shrink the visible area, never extend it.
    fn push_clip_combined(&mut self, rect: Rect);

    /// Restores the clip region active before the matching push.
    fn pop_clip(&mut self) -> Result<(), UiError>;

    /// Returns the program for `program`, loading it on first request.
    ///
    /// Loaded programs stay cached until [`reset_resources`](Self::reset_resources).
    fn shader(&mut self, program: &ShaderProgram) -> anyhow::Result<ShaderId>;

    /// Drops cached resources; the next [`shader`](Self::shader) call reloads.
    fn reset_resources(&mut self);

    fn shader_start(&mut self, shader: ShaderId);

    fn shader_stop(&mut self, shader: ShaderId);

    fn set_float(&mut self, name: &str, value: f32);

    fn set_float2(&mut self, name: &str, value: [f32; 2]);

    fn set_float4(&mut self, name: &str, value: [f32; 4]);

    fn draw_textured_quad(&mut self, texture: TextureId, rect: Rect);

    /// Sets the color used by [`draw_rect`](Self::draw_rect) and [`draw_border`](Self::draw_border).
    fn set_color(&mut self, color: Color);

    fn draw_rect(&mut self, rect: Rect);

    /// Outline of `rect`, `thickness` pixels wide, drawn inside its edges.
    fn draw_border(&mut self, thickness: f32, rect: Rect);

    fn draw_text(&mut self, font: FontId, text: &str, origin: Vec2, color: Color);
}
