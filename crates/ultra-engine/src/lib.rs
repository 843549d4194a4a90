//! Ultra engine crate.
//!
//! Hosts the frame-scoped UI draw tree ([`ui::UiRenderer`]) together with the
//! geometry, color and logging pieces it is built on. Rendering backends plug
//! in through [`ui::UiBackend`].

pub mod coords;
pub mod logging;
pub mod paint;
pub mod ui;
