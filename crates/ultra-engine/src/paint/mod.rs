//! Color model used by draw records.

mod color;

pub use color::Color;
