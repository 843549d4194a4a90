use super::Rect;

/// Size of the current render target in whole pixels.
///
/// The UI renderer sizes its implicit root layer from this value at the start
/// of every frame.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// The full render target as a rectangle anchored at the origin.
    #[inline]
    pub fn to_rect(self) -> Rect {
        Rect::new(0.0, 0.0, self.width as f32, self.height as f32)
    }
}
