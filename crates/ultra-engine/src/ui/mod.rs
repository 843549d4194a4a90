//! Frame-scoped UI draw tree.
//!
//! Responsibilities:
//! - record layers and draw commands per frame into bulk-reset arenas
//! - enforce balanced begin/end brackets
//! - walk the finished tree in nested-clip order and feed a [`UiBackend`]
//!
//! Backends own clipping, blending and shader resources; [`RecordingBackend`]
//! is the in-process implementation used by tests and tools.

mod arena;
mod backend;
mod cache;
mod clip;
mod config;
mod draw;
mod error;
mod layer;
mod list;
mod recorder;
mod records;
mod renderer;
mod view;

pub use arena::{Arena, Handle, StrArena, StrSpan};
pub use backend::{BlendMode, ShaderId, ShaderProgram, UiBackend};
pub use cache::ResourceCache;
pub use clip::ClipStack;
pub use config::UiRendererConfig;
pub use error::UiError;
pub use layer::{Layer, LayerId};
pub use list::{CmdList, ListIter, Node, Pool};
pub use recorder::{DrawItem, DrawOp, RecordingBackend, Uniform};
pub use records::{FontId, ImageCmd, PanelCmd, RectCmd, TextCmd, TextureId};
pub use renderer::{FramePhase, UiRenderer};
pub use view::{FrameStats, LayerView};
