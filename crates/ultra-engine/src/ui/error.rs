use thiserror::Error;

/// Contract violations reported by [`UiRenderer`](super::UiRenderer) and
/// the clip/blend stacks of a backend.
#[derive(Debug, Error)]
pub enum UiError {
    /// A build or draw call happened outside `begin`/`end`.
    #[error("no UI frame has been started")]
    FrameNotStarted,

    /// `draw` was called before the frame was closed with `end`.
    #[error("UI frame is still being built")]
    FrameInProgress,

    /// A command was emitted while no layer is open.
    #[error("no active layer to record into")]
    NoActiveLayer,

    /// `end_layer` was called without a matching `begin_layer`.
    #[error("layer stack underflow: end_layer without matching begin_layer")]
    LayerStackUnderflow,

    /// `begin_layer` nested deeper than the configured limit.
    #[error("layer stack overflow: nesting exceeds {limit} layers")]
    LayerStackOverflow { limit: usize },

    /// `end` was called while layers opened with `begin_layer` are still open.
    #[error("{open} layer(s) still open at end of frame")]
    UnclosedLayers { open: usize },

    #[error("clip stack underflow: pop without matching push")]
    ClipStackUnderflow,

    #[error("blend mode stack underflow: pop without matching push")]
    BlendStackUnderflow,

    /// The backend could not provide a shader program.
    #[error("failed to load shader program {program}")]
    ShaderLoad {
        program: String,
        #[source]
        source: anyhow::Error,
    },
}
