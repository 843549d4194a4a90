use std::fmt;

use crate::coords::{Rect, Vec2, Viewport};
use crate::paint::Color;

use super::backend::{BlendMode, ShaderId, ShaderProgram, UiBackend};
use super::cache::ResourceCache;
use super::clip::ClipStack;
use super::error::UiError;
use super::records::{FontId, TextureId};

/// Value written to a shader uniform.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Uniform {
    Float(f32),
    Float2([f32; 2]),
    Float4([f32; 4]),
}

/// One backend call as seen by [`RecordingBackend`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    PushBlend(BlendMode),
    PopBlend,
    /// Carries the effective region after combining with the parent clip.
    PushClip(Rect),
    PopClip,
    ShaderStart(ShaderId),
    ShaderStop(ShaderId),
    Uniform { name: String, value: Uniform },
    Image { texture: TextureId, rect: Rect },
    Rect { rect: Rect, color: Color },
    Border { thickness: f32, rect: Rect, color: Color },
    Text { font: FontId, text: String, origin: Vec2, color: Color },
}

impl DrawOp {
    /// Screen area touched by a drawing op; `None` for state changes.
    ///
    /// Text has no metrics here, so it is probed as a 1 px square at its origin.
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            DrawOp::Image { rect, .. } | DrawOp::Rect { rect, .. } | DrawOp::Border { rect, .. } => {
                Some(*rect)
            }
            DrawOp::Text { origin, .. } => Some(Rect::from_origin_size(*origin, Vec2::splat(1.0))),
            _ => None,
        }
    }
}

/// A recorded op with the state it was issued under.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub op: DrawOp,
    /// Effective clip region. `None` = unclipped.
    pub clip: Option<Rect>,
    /// Top of the blend stack.
    pub blend: Option<BlendMode>,
    /// Bound shader program, if any.
    pub shader: Option<ShaderId>,
}

impl DrawItem {
    /// `false` when the op lies entirely outside its clip region.
    pub fn is_visible(&self) -> bool {
        match (self.clip, self.op.bounds()) {
            (Some(clip), Some(bounds)) => clip.intersect(bounds).is_some(),
            _ => true,
        }
    }
}

type ShaderLoader = Box<dyn FnMut(&ShaderProgram) -> anyhow::Result<ShaderId>>;

/// Backend that records every call instead of talking to a GPU.
///
/// Keeps real clip and blend stacks and a shader cache, so the recorded
/// stream is what a GPU backend would have to execute. Used by tests, tools
/// and as a reference for real backends.
pub struct RecordingBackend {
    viewport: Viewport,
    items: Vec<DrawItem>,

    clips: ClipStack,
    blends: Vec<BlendMode>,
    color: Color,
    bound_shader: Option<ShaderId>,

    shaders: ResourceCache<ShaderProgram, ShaderId>,
    loader: ShaderLoader,
    shader_loads: usize,
}

impl RecordingBackend {
    pub fn new(viewport: Viewport) -> Self {
        let mut next_id = 0u64;
        Self {
            viewport,
            items: Vec::new(),
            clips: ClipStack::new(),
            blends: Vec::new(),
            color: Color::default(),
            bound_shader: None,
            shaders: ResourceCache::new("shader"),
            loader: Box::new(move |_| {
                let id = ShaderId(next_id);
                next_id += 1;
                Ok(id)
            }),
            shader_loads: 0,
        }
    }

    /// Replaces the function that "compiles" shader programs on a cache miss.
    pub fn with_shader_loader(
        mut self,
        loader: impl FnMut(&ShaderProgram) -> anyhow::Result<ShaderId> + 'static,
    ) -> Self {
        self.loader = Box::new(loader);
        self
    }

    /// Recorded ops in issue order.
    #[inline]
    pub fn ops(&self) -> &[DrawItem] {
        &self.items
    }

    /// Only the ops that can produce pixels.
    pub fn visible_ops(&self) -> impl Iterator<Item = &DrawItem> {
        self.items.iter().filter(|item| item.op.bounds().is_some() && item.is_visible())
    }

    /// Forgets recorded ops and stack state. Cached shaders survive.
    pub fn clear(&mut self) {
        self.items.clear();
        self.clips.clear();
        self.blends.clear();
        self.bound_shader = None;
        self.color = Color::default();
    }

    /// Number of cache misses that ran the shader loader.
    #[inline]
    pub fn shader_loads(&self) -> usize {
        self.shader_loads
    }

    #[inline]
    pub fn clip_depth(&self) -> usize {
        self.clips.depth()
    }

    #[inline]
    pub fn blend_depth(&self) -> usize {
        self.blends.len()
    }

    fn record(&mut self, op: DrawOp) {
        self.items.push(DrawItem {
            op,
            clip: self.clips.current(),
            blend: self.blends.last().copied(),
            shader: self.bound_shader,
        });
    }
}

impl fmt::Debug for RecordingBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordingBackend")
            .field("viewport", &self.viewport)
            .field("ops", &self.items.len())
            .field("clip_depth", &self.clips.depth())
            .field("blend_depth", &self.blends.len())
            .field("cached_shaders", &self.shaders.len())
            .finish_non_exhaustive()
    }
}

impl UiBackend for RecordingBackend {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn push_blend_mode(&mut self, mode: BlendMode) {
        self.blends.push(mode);
        self.record(DrawOp::PushBlend(mode));
    }

    fn pop_blend_mode(&mut self) -> Result<(), UiError> {
        self.blends.pop().ok_or(UiError::BlendStackUnderflow)?;
        self.record(DrawOp::PopBlend);
        Ok(())
    }

    fn push_clip_combined(&mut self, rect: Rect) {
        let effective = self.clips.push_combined(rect);
        self.record(DrawOp::PushClip(effective));
    }

    fn pop_clip(&mut self) -> Result<(), UiError> {
        self.clips.pop()?;
        self.record(DrawOp::PopClip);
        Ok(())
    }

    fn shader(&mut self, program: &ShaderProgram) -> anyhow::Result<ShaderId> {
        let loader = &mut self.loader;
        let loads = &mut self.shader_loads;
        let id = self.shaders.get_or_try_insert_with(program.clone(), || {
            *loads += 1;
            loader(program)
        })?;
        Ok(*id)
    }

    fn reset_resources(&mut self) {
        self.shaders.clear();
    }

    fn shader_start(&mut self, shader: ShaderId) {
        self.bound_shader = Some(shader);
        self.record(DrawOp::ShaderStart(shader));
    }

    fn shader_stop(&mut self, shader: ShaderId) {
        if self.bound_shader != Some(shader) {
            log::warn!("RecordingBackend: stopping {shader:?} while {:?} is bound", self.bound_shader);
        }
        self.bound_shader = None;
        self.record(DrawOp::ShaderStop(shader));
    }

    fn set_float(&mut self, name: &str, value: f32) {
        self.record(DrawOp::Uniform { name: name.to_owned(), value: Uniform::Float(value) });
    }

    fn set_float2(&mut self, name: &str, value: [f32; 2]) {
        self.record(DrawOp::Uniform { name: name.to_owned(), value: Uniform::Float2(value) });
    }

    fn set_float4(&mut self, name: &str, value: [f32; 4]) {
        self.record(DrawOp::Uniform { name: name.to_owned(), value: Uniform::Float4(value) });
    }

    fn draw_textured_quad(&mut self, texture: TextureId, rect: Rect) {
        self.record(DrawOp::Image { texture, rect });
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn draw_rect(&mut self, rect: Rect) {
        let color = self.color;
        self.record(DrawOp::Rect { rect, color });
    }

    fn draw_border(&mut self, thickness: f32, rect: Rect) {
        let color = self.color;
        self.record(DrawOp::Border { thickness, rect, color });
    }

    fn draw_text(&mut self, font: FontId, text: &str, origin: Vec2, color: Color) {
        self.record(DrawOp::Text { font, text: text.to_owned(), origin, color });
    }
}
