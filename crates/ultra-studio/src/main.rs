use anyhow::{Context, Result};

use ultra_engine::coords::{Rect, Vec2, Viewport};
use ultra_engine::logging::{init_logging, LoggingConfig};
use ultra_engine::paint::Color;
use ultra_engine::ui::{
    DrawOp, FontId, RecordingBackend, TextureId, UiBackend, UiError, UiRenderer,
};

const FRAMES: u64 = 3;
const DEFAULT_RESOLUTION: &str = "1280x1024";

const BODY_FONT: FontId = FontId(1);
const LOGO: TextureId = TextureId(1);

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let resolution = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_RESOLUTION.to_owned());
    let viewport = parse_resolution(&resolution)
        .with_context(|| format!("invalid resolution {resolution:?}, expected WIDTHxHEIGHT"))?;

    let mut ui = UiRenderer::new();
    let mut backend = RecordingBackend::new(viewport);

    for frame in 0..FRAMES {
        backend.clear();

        ui.begin(backend.viewport());
        build_hud(&mut ui, frame).context("failed to build HUD")?;
        ui.end().context("failed to close frame")?;
        ui.draw(&mut backend).context("failed to draw frame")?;

        let visible = backend.visible_ops().count();
        log::info!(
            "frame {}: {:?}, {} ops, {} visible",
            ui.frame_index(),
            ui.stats(),
            backend.ops().len(),
            visible
        );
    }

    for item in backend.ops() {
        if matches!(item.op, DrawOp::Uniform { .. }) {
            continue;
        }
        log::debug!("{:?} clip={:?}", item.op, item.clip);
    }
    log::info!("shader programs loaded: {}", backend.shader_loads());

    Ok(())
}

/// Parses `"1280x1024"` into a viewport.
fn parse_resolution(s: &str) -> Result<Viewport> {
    let (w, h) = s.split_once(['x', 'X']).context("missing 'x' separator")?;
    let width: u32 = w.trim().parse().context("bad width")?;
    let height: u32 = h.trim().parse().context("bad height")?;
    anyhow::ensure!(width > 0 && height > 0, "resolution must be non-zero");
    Ok(Viewport::new(width, height))
}

/// Status window with a header, a scrolling log and a tooltip.
fn build_hud(ui: &mut UiRenderer, frame: u64) -> Result<(), UiError> {
    let panel_bg = Color::from_u8(0x1a, 0x1a, 0x2a, 0xf0);
    let accent = Color::from_u8(0x4a, 0x9e, 0xff, 0xff);

    let window = Rect::new(40.0, 40.0, 360.0, 240.0);
    ui.begin_layer(window, true)?;
    ui.panel(window, panel_bg, 6.0, 0.85)?;
    ui.image(LOGO, Rect::new(52.0, 52.0, 24.0, 24.0))?;
    ui.text(BODY_FONT, "ULTRA STATUS", Vec2::new(84.0, 56.0), Color::white())?;
    ui.rect(Rect::new(48.0, 84.0, 344.0, 1.0), accent, false)?;

    // Scroll area: content taller than the viewport, clipped.
    let log_area = Rect::new(48.0, 92.0, 344.0, 140.0);
    ui.begin_layer(log_area, true)?;
    ui.rect(log_area, accent.with_alpha(0.5), true)?;
    let scroll = (frame as f32) * 18.0;
    for line in 0..12u32 {
        let y = log_area.origin.y + 6.0 + line as f32 * 18.0 - scroll;
        ui.text(BODY_FONT, &format!("[{line:02}] subsystem nominal"), Vec2::new(56.0, y), Color::white())?;
    }
    ui.end_layer()?;

    // Tooltip hanging off the window edge; the window clip cuts it.
    let tooltip = Rect::new(330.0, 250.0, 120.0, 40.0);
    ui.begin_layer(tooltip, false)?;
    ui.panel(tooltip, accent, 3.0, 1.0)?;
    ui.text(BODY_FONT, "F1: help", Vec2::new(340.0, 262.0), Color::white())?;
    ui.end_layer()?;

    ui.end_layer()
}
