use crate::coords::Rect;

use super::error::UiError;

/// Stack of effective clip rectangles.
///
/// The top is always the current visible region, already intersected with
/// every enclosing clip.
#[derive(Debug, Default, Clone)]
pub struct ClipStack {
    stack: Vec<Rect>,
}

impl ClipStack {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes `rect` combined with the current clip and returns the effective region.
    ///
    /// Disjoint regions collapse to a zero-area rect so everything inside is hidden.
    pub fn push_combined(&mut self, rect: Rect) -> Rect {
        let effective = match self.stack.last() {
            None => rect.normalized(),
            Some(&parent) => parent.intersect(rect).unwrap_or(Rect::empty()),
        };
        self.stack.push(effective);
        effective
    }

    /// Pops the most recent region and returns it.
    pub fn pop(&mut self) -> Result<Rect, UiError> {
        self.stack.pop().ok_or(UiError::ClipStackUnderflow)
    }

    /// Active clip region, `None` when drawing is unclipped.
    #[inline]
    pub fn current(&self) -> Option<Rect> {
        self.stack.last().copied()
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.stack.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_push_is_taken_as_is() {
        let mut clips = ClipStack::new();
        assert_eq!(clips.push_combined(Rect::new(0.0, 0.0, 640.0, 480.0)), Rect::new(0.0, 0.0, 640.0, 480.0));
        assert_eq!(clips.depth(), 1);
    }

    #[test]
    fn nested_push_intersects_with_parent() {
        let mut clips = ClipStack::new();
        clips.push_combined(Rect::new(0.0, 0.0, 100.0, 100.0));
        let inner = clips.push_combined(Rect::new(50.0, -20.0, 100.0, 100.0));
        assert_eq!(inner, Rect::new(50.0, 0.0, 50.0, 80.0));
    }

    #[test]
    fn child_cannot_escape_parent() {
        let mut clips = ClipStack::new();
        clips.push_combined(Rect::new(10.0, 10.0, 20.0, 20.0));
        let inner = clips.push_combined(Rect::new(0.0, 0.0, 1000.0, 1000.0));
        assert_eq!(inner, Rect::new(10.0, 10.0, 20.0, 20.0));
    }

    #[test]
    fn disjoint_push_hides_everything() {
        let mut clips = ClipStack::new();
        clips.push_combined(Rect::new(0.0, 0.0, 10.0, 10.0));
        clips.push_combined(Rect::new(20.0, 20.0, 10.0, 10.0));
        // Later pushes stay hidden too.
        let grandchild = clips.push_combined(Rect::new(0.0, 0.0, 100.0, 100.0));
        assert!(grandchild.is_empty());
    }

    #[test]
    fn pop_restores_previous_region() {
        let mut clips = ClipStack::new();
        let outer = clips.push_combined(Rect::new(0.0, 0.0, 100.0, 100.0));
        clips.push_combined(Rect::new(10.0, 10.0, 10.0, 10.0));
        clips.pop().unwrap();
        assert_eq!(clips.current(), Some(outer));
        clips.pop().unwrap();
        assert_eq!(clips.current(), None);
    }

    #[test]
    fn pop_on_empty_stack_is_an_error() {
        let mut clips = ClipStack::new();
        assert!(matches!(clips.pop(), Err(UiError::ClipStackUnderflow)));
    }
}
