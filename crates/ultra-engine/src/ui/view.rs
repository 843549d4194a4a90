//! Read-only access to a recorded frame.

use crate::coords::Rect;

use super::layer::{Children, Layer, LayerId};
use super::records::{ImageCmd, PanelCmd, RectCmd, TextCmd};
use super::renderer::UiRenderer;

/// Record counts of the current frame.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct FrameStats {
    pub layers: usize,
    pub images: usize,
    pub panels: usize,
    pub rects: usize,
    pub texts: usize,
    /// Depth of the layer tree reachable from the root (root alone = 1).
    pub max_depth: usize,
}

/// Borrowed view of one layer of the current frame.
#[derive(Clone, Copy)]
pub struct LayerView<'a> {
    ui: &'a UiRenderer,
    id: LayerId,
    layer: &'a Layer,
}

impl<'a> LayerView<'a> {
    #[inline]
    pub fn id(&self) -> LayerId {
        self.id
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        self.layer.rect
    }

    #[inline]
    pub fn clip(&self) -> bool {
        self.layer.clip
    }

    #[inline]
    pub fn child_count(&self) -> usize {
        self.layer.child_count as usize
    }

    /// Children in draw order (most recently closed first).
    pub fn children(self) -> impl Iterator<Item = LayerView<'a>> {
        let ui = self.ui;
        Children::new(&ui.layers, self.layer.first_child).map(move |(id, layer)| LayerView { ui, id, layer })
    }

    /// Images newest-first.
    pub fn images(self) -> impl Iterator<Item = &'a ImageCmd> {
        self.layer.images.iter(&self.ui.images)
    }

    /// Panels newest-first.
    pub fn panels(self) -> impl Iterator<Item = &'a PanelCmd> {
        self.layer.panels.iter(&self.ui.panels)
    }

    /// Rects newest-first.
    pub fn rects(self) -> impl Iterator<Item = &'a RectCmd> {
        self.layer.rects.iter(&self.ui.rects)
    }

    /// Text runs newest-first, paired with their content.
    pub fn texts(self) -> impl Iterator<Item = (&'a TextCmd, &'a str)> {
        let strings = &self.ui.strings;
        self.layer
            .texts
            .iter(&self.ui.texts)
            .map(move |cmd| (cmd, strings.get(cmd.text).unwrap_or_default()))
    }

    /// Height of the subtree rooted here (a leaf is 1).
    pub fn depth(&self) -> usize {
        1 + self.children().map(|child| child.depth()).max().unwrap_or(0)
    }
}

impl std::fmt::Debug for LayerView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayerView")
            .field("id", &self.id)
            .field("rect", &self.layer.rect)
            .field("clip", &self.layer.clip)
            .field("children", &self.layer.child_count)
            .field("commands", &self.layer.command_count())
            .finish()
    }
}

impl UiRenderer {
    /// Root layer of the frame, `None` before the first `begin`.
    pub fn root(&self) -> Option<LayerView<'_>> {
        self.layer(self.root?)
    }

    /// Resolves a layer handle of the current frame.
    pub fn layer(&self, id: LayerId) -> Option<LayerView<'_>> {
        let layer = self.layers.get(id)?;
        Some(LayerView { ui: self, id, layer })
    }

    pub fn stats(&self) -> FrameStats {
        FrameStats {
            layers: self.layers.len(),
            images: self.images.len(),
            panels: self.panels.len(),
            rects: self.rects.len(),
            texts: self.texts.len(),
            max_depth: self.root().map_or(0, |root| root.depth()),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::coords::{Rect, Vec2, Viewport};
    use crate::paint::Color;
    use crate::ui::error::UiError;
    use crate::ui::records::{FontId, TextureId};

    use super::*;

    fn unit() -> Rect {
        Rect::new(0.0, 0.0, 1.0, 1.0)
    }

    /// Plays a bracket script: `(` opens a layer, `)` closes it.
    fn build(script: &str) -> Result<UiRenderer, UiError> {
        let mut ui = UiRenderer::new();
        ui.begin(Viewport::new(32, 32));
        for c in script.chars() {
            match c {
                '(' => ui.begin_layer(unit(), false)?,
                ')' => ui.end_layer()?,
                _ => {}
            }
        }
        ui.end()?;
        Ok(ui)
    }

    fn max_nesting(script: &str) -> usize {
        let mut depth = 0usize;
        let mut max = 0;
        for c in script.chars() {
            match c {
                '(' => {
                    depth += 1;
                    max = max.max(depth);
                }
                ')' => depth -= 1,
                _ => {}
            }
        }
        max
    }

    // ── tree shape ────────────────────────────────────────────────────────

    #[test]
    fn depth_matches_nesting() {
        for script in ["", "()", "()()", "(())", "(()(()))()", "((((()))))", "(()())(((())))"] {
            let ui = build(script).unwrap();
            let root = ui.root().unwrap();
            assert_eq!(root.depth(), 1 + max_nesting(script), "script {script:?}");
            assert_eq!(ui.stats().max_depth, root.depth());
        }
    }

    #[test]
    fn child_counts_match_direct_begins() {
        let ui = build("(()()())(())").unwrap();
        let root = ui.root().unwrap();
        assert_eq!(root.child_count(), 2);

        let counts: Vec<usize> = root.children().map(|c| c.child_count()).collect();
        // Last-closed sibling first.
        assert_eq!(counts, vec![1, 3]);
        for child in root.children() {
            assert_eq!(child.children().count(), child.child_count());
        }
    }

    #[test]
    fn unbalanced_scripts_are_rejected() {
        assert!(matches!(build(")"), Err(UiError::LayerStackUnderflow)));
        assert!(matches!(build("(()"), Err(UiError::UnclosedLayers { open: 1 })));
        assert!(matches!(build("())"), Err(UiError::LayerStackUnderflow)));
    }

    // ── record order ──────────────────────────────────────────────────────

    #[test]
    fn sibling_views_are_reverse_of_creation() {
        let mut ui = UiRenderer::new();
        ui.begin(Viewport::new(100, 100));
        for x in [10.0, 20.0, 30.0] {
            ui.begin_layer(Rect::new(x, 0.0, 5.0, 5.0), true).unwrap();
            ui.end_layer().unwrap();
        }
        ui.end().unwrap();

        let xs: Vec<f32> = ui.root().unwrap().children().map(|c| c.rect().origin.x).collect();
        assert_eq!(xs, vec![30.0, 20.0, 10.0]);
        assert!(ui.root().unwrap().children().all(|c| c.clip()));
    }

    #[test]
    fn same_kind_records_are_newest_first() {
        let mut ui = UiRenderer::new();
        ui.begin(Viewport::new(100, 100));
        for i in 0..3 {
            ui.image(TextureId(i), unit()).unwrap();
            ui.text(FontId(0), &format!("line {i}"), Vec2::zero(), Color::white()).unwrap();
            ui.rect(unit(), Color::new(i as f32, 0.0, 0.0, 1.0), i % 2 == 0).unwrap();
            ui.panel(unit(), Color::white(), i as f32, 1.0).unwrap();
        }
        ui.end().unwrap();

        let root = ui.root().unwrap();
        assert_eq!(root.images().map(|c| c.texture.0).collect::<Vec<_>>(), vec![2, 1, 0]);
        assert_eq!(root.texts().map(|(_, s)| s).collect::<Vec<_>>(), vec!["line 2", "line 1", "line 0"]);
        assert_eq!(root.rects().map(|c| c.outline).collect::<Vec<_>>(), vec![true, false, true]);
        assert_eq!(root.panels().map(|c| c.bevel).collect::<Vec<_>>(), vec![2.0, 1.0, 0.0]);
    }

    // ── frames ────────────────────────────────────────────────────────────

    #[test]
    fn stats_count_every_record() {
        let mut ui = UiRenderer::new();
        ui.begin(Viewport::new(100, 100));
        ui.begin_layer(unit(), true).unwrap();
        ui.image(TextureId(1), unit()).unwrap();
        ui.image(TextureId(2), unit()).unwrap();
        ui.rect(unit(), Color::white(), false).unwrap();
        ui.end_layer().unwrap();
        ui.text(FontId(0), "x", Vec2::zero(), Color::white()).unwrap();
        ui.end().unwrap();

        assert_eq!(
            ui.stats(),
            FrameStats { layers: 2, images: 2, panels: 0, rects: 1, texts: 1, max_depth: 2 }
        );
    }

    #[test]
    fn old_layers_are_unreachable_after_begin() {
        let mut ui = build("(()())").unwrap();
        let old: Vec<LayerId> = ui.root().unwrap().children().map(|c| c.id()).collect();
        let old_root = ui.root().unwrap().id();

        ui.begin(Viewport::new(8, 8));
        assert!(ui.layer(old_root).is_none());
        assert!(old.iter().all(|&id| ui.layer(id).is_none()));

        let root = ui.root().unwrap();
        assert_eq!(root.child_count(), 0);
        assert_eq!(root.rect(), Rect::new(0.0, 0.0, 8.0, 8.0));
        assert_eq!(ui.stats().layers, 1);
    }

    #[test]
    fn root_is_absent_before_first_frame() {
        let ui = UiRenderer::new();
        assert!(ui.root().is_none());
        assert_eq!(ui.stats(), FrameStats::default());
    }
}
