use crate::core::{TransportIntent, WidgetConfig};
use crate::error::{SvgViewError, SvgViewResult};
use crate::render::Color;

/// Button diameter in frame pixels.
pub const BUTTON_DIAMETER_PX: f64 = 32.0;
const BUTTON_GAP_PX: f64 = 8.0;
const BUTTON_INSET_PX: f64 = 10.0;

/// Icon drawn inside a control button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlGlyph {
    Play,
    Pause,
    Restart,
}

/// Which affordance a button drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlButtonKind {
    Toggle,
    Restart,
}

/// Draw/hit command for one circular overlay button in frame pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlButton {
    pub kind: ControlButtonKind,
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
    pub fill: Color,
    pub glyph: ControlGlyph,
    pub opacity: f64,
    pub hit_testable: bool,
}

impl ControlButton {
    pub fn validate(&self) -> SvgViewResult<()> {
        if !self.center_x.is_finite() || !self.center_y.is_finite() {
            return Err(SvgViewError::InvalidData(
                "button center must be finite".to_owned(),
            ));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(SvgViewError::InvalidData(
                "button radius must be finite and > 0".to_owned(),
            ));
        }
        if !self.opacity.is_finite() || !(0.0..=1.0).contains(&self.opacity) {
            return Err(SvgViewError::InvalidData(
                "button opacity must be finite and in [0, 1]".to_owned(),
            ));
        }
        self.fill.validate()
    }
}

/// Deterministic description of the hover overlay the embedder draws above
/// the mounted SVG: the toggle button first, then restart, anchored to the
/// top-right corner of the frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayFrame {
    pub buttons: [ControlButton; 2],
}

impl OverlayFrame {
    pub fn validate(&self) -> SvgViewResult<()> {
        for button in &self.buttons {
            button.validate()?;
        }
        Ok(())
    }
}

/// Builds the overlay for the current intent and hover state.
///
/// The toggle button always reflects *requested* intent: pause glyph and
/// pause color while playing, play glyph and play color while paused. The
/// buttons fade out and stop accepting hits when the pointer leaves the
/// frame.
#[must_use]
pub fn build_overlay_frame(
    config: &WidgetConfig,
    intent: TransportIntent,
    hovering: bool,
) -> OverlayFrame {
    let radius = BUTTON_DIAMETER_PX / 2.0;
    let center_y = BUTTON_INSET_PX + radius;
    let restart_x = f64::from(config.width) - BUTTON_INSET_PX - radius;
    let toggle_x = restart_x - BUTTON_DIAMETER_PX - BUTTON_GAP_PX;

    let opacity = if hovering { 1.0 } else { 0.0 };
    let (toggle_glyph, toggle_fill) = if intent.is_playing() {
        (ControlGlyph::Pause, config.pause_color)
    } else {
        (ControlGlyph::Play, config.play_color)
    };

    OverlayFrame {
        buttons: [
            ControlButton {
                kind: ControlButtonKind::Toggle,
                center_x: toggle_x,
                center_y,
                radius,
                fill: toggle_fill,
                glyph: toggle_glyph,
                opacity,
                hit_testable: hovering,
            },
            ControlButton {
                kind: ControlButtonKind::Restart,
                center_x: restart_x,
                center_y,
                radius,
                fill: config.restart_color,
                glyph: ControlGlyph::Restart,
                opacity,
                hit_testable: hovering,
            },
        ],
    }
}
