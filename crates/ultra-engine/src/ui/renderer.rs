use crate::coords::{Rect, Vec2, Viewport};
use crate::paint::Color;

use super::arena::{Arena, StrArena};
use super::config::UiRendererConfig;
use super::error::UiError;
use super::layer::{Layer, LayerId};
use super::list::Pool;
use super::records::{FontId, ImageCmd, PanelCmd, RectCmd, TextCmd, TextureId};

/// Lifecycle of the frame held by a [`UiRenderer`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FramePhase {
    /// Nothing recorded yet.
    Idle,
    /// Between `begin` and `end`; layers and commands may be recorded.
    Building,
    /// Closed by `end`; ready to draw until the next `begin`.
    Finished,
}

/// Per-frame UI draw tree.
///
/// Usage per frame:
///
/// ```ignore
/// ui.begin(backend.viewport());
/// ui.begin_layer(Rect::new(20.0, 20.0, 200.0, 120.0), true)?;
/// ui.panel(Rect::new(20.0, 20.0, 200.0, 120.0), Color::rgb(0.1, 0.1, 0.15), 4.0, 0.9)?;
/// ui.text(font, "Status", Vec2::new(28.0, 28.0), Color::white())?;
/// ui.end_layer()?;
/// ui.end()?;
/// ui.draw(&mut backend)?;
/// ```
///
/// Every record lives in an arena that is reset by [`begin`](Self::begin), so
/// a warmed-up renderer does not allocate. Begin/end calls must nest; every
/// violation is reported as a [`UiError`] instead of corrupting the tree.
#[derive(Debug)]
pub struct UiRenderer {
    pub(crate) config: UiRendererConfig,

    pub(crate) layers: Arena<Layer>,
    pub(crate) images: Pool<ImageCmd>,
    pub(crate) panels: Pool<PanelCmd>,
    pub(crate) rects: Pool<RectCmd>,
    pub(crate) texts: Pool<TextCmd>,
    pub(crate) strings: StrArena,

    pub(crate) root: Option<LayerId>,
    current: Option<LayerId>,
    /// Open layers, root included.
    depth: usize,
    phase: FramePhase,
    frame_index: u64,
}

impl UiRenderer {
    pub fn new() -> Self {
        Self::with_config(UiRendererConfig::default())
    }

    pub fn with_config(config: UiRendererConfig) -> Self {
        let cap = config.initial_capacity;
        Self {
            layers: Arena::with_capacity(cap),
            images: Pool::with_capacity(cap),
            panels: Pool::with_capacity(cap),
            rects: Pool::with_capacity(cap),
            texts: Pool::with_capacity(cap),
            strings: StrArena::with_capacity(cap * 16),
            root: None,
            current: None,
            depth: 0,
            phase: FramePhase::Idle,
            frame_index: 0,
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &UiRendererConfig {
        &self.config
    }

    #[inline]
    pub fn phase(&self) -> FramePhase {
        self.phase
    }

    /// Number of frames started so far.
    #[inline]
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    /// Layers currently open, root included.
    #[inline]
    pub fn open_layers(&self) -> usize {
        self.depth
    }

    // ── frame bracket ─────────────────────────────────────────────────────

    /// Starts a new frame.
    ///
    /// Resets every arena, which drops all layers and commands of the previous
    /// frame, then opens the clipping root layer covering `viewport`.
    pub fn begin(&mut self, viewport: Viewport) {
        if self.phase == FramePhase::Building {
            log::warn!(
                "UiRenderer::begin: discarding frame {} with {} open layer(s)",
                self.frame_index,
                self.depth
            );
        }

        self.layers.reset();
        self.images.reset();
        self.panels.reset();
        self.rects.reset();
        self.texts.reset();
        self.strings.reset();

        self.root = None;
        self.current = None;
        self.depth = 0;
        self.frame_index = self.frame_index.wrapping_add(1);

        let root = self.layers.alloc(Layer::new(None, viewport.to_rect(), true));
        self.root = Some(root);
        self.current = Some(root);
        self.depth = 1;
        self.phase = FramePhase::Building;

        log::trace!("ui frame {} begin ({}x{})", self.frame_index, viewport.width, viewport.height);
    }

    /// Closes the root layer and finishes the frame.
    ///
    /// Fails with [`UiError::UnclosedLayers`] if a `begin_layer` is still open;
    /// the frame stays open so the caller can close the remaining layers.
    pub fn end(&mut self) -> Result<(), UiError> {
        if self.phase != FramePhase::Building {
            return Err(UiError::FrameNotStarted);
        }
        if self.depth > 1 {
            return Err(UiError::UnclosedLayers { open: self.depth - 1 });
        }

        self.current = None;
        self.depth = 0;
        self.phase = FramePhase::Finished;

        if log::log_enabled!(log::Level::Debug) {
            log::debug!("ui frame {} end: {:?}", self.frame_index, self.stats());
        }
        Ok(())
    }

    // ── layer bracket ─────────────────────────────────────────────────────

    /// Opens a layer as the last child of the current layer and makes it current.
    ///
    /// With `clip` set, everything drawn in the layer and its descendants is
    /// restricted to `rect` (intersected with ancestor clips).
    pub fn begin_layer(&mut self, rect: Rect, clip: bool) -> Result<(), UiError> {
        let parent = self.active_layer()?;
        let limit = self.config.max_layer_depth;
        if self.depth >= limit {
            return Err(UiError::LayerStackOverflow { limit });
        }

        let id = self.layers.alloc(Layer::new(Some(parent), rect, clip));
        self.current = Some(id);
        self.depth += 1;
        Ok(())
    }

    /// Closes the current layer and attaches it to its parent.
    ///
    /// The closed layer is prepended to the parent's children, so the layer
    /// closed last is drawn first among its siblings.
    pub fn end_layer(&mut self) -> Result<(), UiError> {
        if self.phase != FramePhase::Building {
            return Err(UiError::FrameNotStarted);
        }
        let id = self.current.ok_or(UiError::LayerStackUnderflow)?;

        // The root is closed by `end`.
        let Some(parent) = self.layers.get(id).and_then(|layer| layer.parent) else {
            return Err(UiError::LayerStackUnderflow);
        };

        let parent_layer = self.layers.get_mut(parent).ok_or(UiError::LayerStackUnderflow)?;
        let prev_first = parent_layer.first_child.replace(id);
        parent_layer.child_count += 1;

        if let Some(layer) = self.layers.get_mut(id) {
            layer.next_sibling = prev_first;
        }

        self.current = Some(parent);
        self.depth -= 1;
        Ok(())
    }

    // ── commands ──────────────────────────────────────────────────────────

    /// Records a textured quad in the current layer.
    pub fn image(&mut self, texture: TextureId, rect: Rect) -> Result<(), UiError> {
        let id = self.active_layer()?;
        let layer = self.layers.get_mut(id).ok_or(UiError::NoActiveLayer)?;
        layer.images.push_front(&mut self.images, ImageCmd { texture, rect });
        Ok(())
    }

    /// Records a beveled panel in the current layer.
    pub fn panel(
        &mut self,
        rect: Rect,
        color: Color,
        bevel: f32,
        inner_alpha: f32,
    ) -> Result<(), UiError> {
        let id = self.active_layer()?;
        let layer = self.layers.get_mut(id).ok_or(UiError::NoActiveLayer)?;
        layer
            .panels
            .push_front(&mut self.panels, PanelCmd { rect, color, bevel, inner_alpha });
        Ok(())
    }

    /// Records a filled (`outline == false`) or outlined rectangle in the current layer.
    pub fn rect(&mut self, rect: Rect, color: Color, outline: bool) -> Result<(), UiError> {
        let id = self.active_layer()?;
        let layer = self.layers.get_mut(id).ok_or(UiError::NoActiveLayer)?;
        layer.rects.push_front(&mut self.rects, RectCmd { rect, color, outline });
        Ok(())
    }

    /// Records a text run in the current layer. `text` is copied into the frame.
    pub fn text(
        &mut self,
        font: FontId,
        text: &str,
        origin: Vec2,
        color: Color,
    ) -> Result<(), UiError> {
        let id = self.active_layer()?;
        let span = self.strings.push(text);
        let layer = self.layers.get_mut(id).ok_or(UiError::NoActiveLayer)?;
        layer.texts.push_front(&mut self.texts, TextCmd { font, text: span, origin, color });
        Ok(())
    }

    // ── internal ──────────────────────────────────────────────────────────

    fn active_layer(&self) -> Result<LayerId, UiError> {
        if self.phase != FramePhase::Building {
            return Err(UiError::FrameNotStarted);
        }
        self.current.ok_or(UiError::NoActiveLayer)
    }
}

impl Default for UiRenderer {
    fn default() -> Self {
        Self::new()
    }
}
