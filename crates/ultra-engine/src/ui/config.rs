use super::backend::{BlendMode, ShaderProgram};

/// Tuning knobs for [`UiRenderer`](super::UiRenderer).
///
/// The defaults reproduce the stock look: alpha blending, 1 px outlines and
/// a 64 px bleed around panels for the bevel/glow shader.
#[derive(Debug, Clone)]
pub struct UiRendererConfig {
    /// Extra space drawn around each panel so the shader can render its soft edge.
    pub panel_padding: f32,

    /// Stroke width of outlined rects.
    pub border_thickness: f32,

    /// Blend mode pushed around the whole draw pass.
    pub blend_mode: BlendMode,

    /// Program used for panels. Resolved through the backend's resource cache.
    pub panel_shader: ShaderProgram,

    /// Maximum nesting of `begin_layer`, root included.
    pub max_layer_depth: usize,

    /// Records reserved up front in every arena.
    pub initial_capacity: usize,
}

impl Default for UiRendererConfig {
    fn default() -> Self {
        Self {
            panel_padding: 64.0,
            border_thickness: 1.0,
            blend_mode: BlendMode::Alpha,
            panel_shader: ShaderProgram::new("vertex/ui", "fragment/ui/panel"),
            max_layer_depth: 256,
            initial_capacity: 64,
        }
    }
}
