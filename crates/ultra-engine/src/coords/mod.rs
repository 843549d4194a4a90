//! Geometry types shared by the UI renderer and its backends.
//!
//! Canonical space:
//! - Pixels of the render target
//! - Origin top-left
//! - +X right, +Y down

mod rect;
mod vec2;
mod viewport;

pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
