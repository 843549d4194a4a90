//! Draw records attached to layers.

use crate::coords::{Rect, Vec2};
use crate::paint::Color;

use super::arena::StrSpan;

/// Backend-defined texture handle. The renderer never dereferences it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TextureId(pub u64);

/// Backend-defined font handle.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(pub u64);

/// Textured quad.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ImageCmd {
    pub texture: TextureId,
    pub rect: Rect,
}

/// Beveled panel drawn with the panel shader.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PanelCmd {
    pub rect: Rect,
    pub color: Color,
    pub bevel: f32,
    /// Blend factor of the panel interior against its rim.
    pub inner_alpha: f32,
}

/// Flat rectangle, filled or outlined.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub color: Color,
    pub outline: bool,
}

/// Text run. The string lives in the frame's string arena.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextCmd {
    pub font: FontId,
    pub text: StrSpan,
    pub origin: Vec2,
    pub color: Color,
}
