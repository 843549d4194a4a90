use crate::coords::Rect;

use super::arena::{Arena, Handle};
use super::list::CmdList;
use super::records::{ImageCmd, PanelCmd, RectCmd, TextCmd};

/// Handle of a layer within the current frame.
pub type LayerId = Handle<Layer>;

/// Node of the per-frame layer tree.
///
/// Children form a singly-linked sibling chain starting at `first_child`.
/// A child is linked in when it is closed, so siblings are ordered newest
/// first, like the command lists.
#[derive(Debug)]
pub struct Layer {
    pub(crate) parent: Option<LayerId>,
    pub(crate) next_sibling: Option<LayerId>,
    pub(crate) first_child: Option<LayerId>,
    pub(crate) child_count: u32,

    pub(crate) rect: Rect,
    pub(crate) clip: bool,

    pub(crate) images: CmdList<ImageCmd>,
    pub(crate) panels: CmdList<PanelCmd>,
    pub(crate) rects: CmdList<RectCmd>,
    pub(crate) texts: CmdList<TextCmd>,
}

impl Layer {
    pub(crate) fn new(parent: Option<LayerId>, rect: Rect, clip: bool) -> Self {
        Self {
            parent,
            next_sibling: None,
            first_child: None,
            child_count: 0,
            rect,
            clip,
            images: CmdList::new(),
            panels: CmdList::new(),
            rects: CmdList::new(),
            texts: CmdList::new(),
        }
    }

    /// Number of records across all four lists.
    pub(crate) fn command_count(&self) -> usize {
        self.images.len() + self.panels.len() + self.rects.len() + self.texts.len()
    }
}

/// Walks a sibling chain.
pub(crate) struct Children<'a> {
    layers: &'a Arena<Layer>,
    cursor: Option<LayerId>,
}

impl<'a> Children<'a> {
    pub(crate) fn new(layers: &'a Arena<Layer>, first: Option<LayerId>) -> Self {
        Self { layers, cursor: first }
    }
}

impl<'a> Iterator for Children<'a> {
    type Item = (LayerId, &'a Layer);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        let layer = self.layers.get(id)?;
        self.cursor = layer.next_sibling;
        Some((id, layer))
    }
}
