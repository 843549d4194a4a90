//! Draw pass: walks the finished layer tree and feeds a [`UiBackend`].
//!
//! Per layer the order is fixed:
//! clip push → panels → images → rects → text → children → clip pop.
//! Within one kind, records are drawn newest-first.

use super::backend::UiBackend;
use super::error::UiError;
use super::layer::{Children, Layer};
use super::renderer::{FramePhase, UiRenderer};

impl UiRenderer {
    /// Issues the finished frame to `backend`.
    ///
    /// The configured blend mode is pushed around the whole pass and popped
    /// even if drawing fails. May be called several times per frame.
    pub fn draw<B: UiBackend + ?Sized>(&self, backend: &mut B) -> Result<(), UiError> {
        match self.phase() {
            FramePhase::Idle => return Err(UiError::FrameNotStarted),
            FramePhase::Building => return Err(UiError::FrameInProgress),
            FramePhase::Finished => {}
        }
        let root = self.root.and_then(|id| self.layers.get(id)).ok_or(UiError::FrameNotStarted)?;

        backend.push_blend_mode(self.config.blend_mode);
        let drawn = self.draw_layer(root, backend);
        let popped = backend.pop_blend_mode();

        log::trace!("ui frame {} drawn", self.frame_index());
        drawn.and(popped)
    }

    /// Draws one layer inside its clip. The clip is popped even when the
    /// contents fail, so a failed frame leaves the backend clip stack as it
    /// found it.
    fn draw_layer<B: UiBackend + ?Sized>(&self, layer: &Layer, backend: &mut B) -> Result<(), UiError> {
        if !layer.clip {
            return self.draw_contents(layer, backend);
        }

        backend.push_clip_combined(layer.rect);
        let drawn = self.draw_contents(layer, backend);
        let popped = backend.pop_clip();
        drawn.and(popped)
    }

    fn draw_contents<B: UiBackend + ?Sized>(&self, layer: &Layer, backend: &mut B) -> Result<(), UiError> {
        if !layer.panels.is_empty() {
            let program = &self.config.panel_shader;
            let shader = backend.shader(program).map_err(|source| UiError::ShaderLoad {
                program: program.to_string(),
                source,
            })?;
            let pad = self.config.panel_padding;

            // One bind for every panel of the layer.
            backend.shader_start(shader);
            backend.set_float("padding", pad);
            for panel in layer.panels.iter(&self.panels) {
                let area = panel.rect.inflate(pad);
                backend.set_float("innerAlpha", panel.inner_alpha);
                backend.set_float("bevel", panel.bevel);
                backend.set_float2("size", area.size.to_array());
                backend.set_float4("color", panel.color.to_array());
                backend.draw_rect(area);
            }
            backend.shader_stop(shader);
        }

        for image in layer.images.iter(&self.images) {
            backend.draw_textured_quad(image.texture, image.rect);
        }

        for rect in layer.rects.iter(&self.rects) {
            backend.set_color(rect.color);
            if rect.outline {
                backend.draw_border(self.config.border_thickness, rect.rect);
            } else {
                backend.draw_rect(rect.rect);
            }
        }

        for text in layer.texts.iter(&self.texts) {
            let Some(content) = self.strings.get(text.text) else { continue };
            backend.draw_text(text.font, content, text.origin, text.color);
        }

        for (_, child) in Children::new(&self.layers, layer.first_child) {
            self.draw_layer(child, backend)?;
        }
        Ok(())
    }
}
