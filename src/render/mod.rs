mod color;
mod overlay;

pub use color::{Color, DEFAULT_PAUSE_COLOR, DEFAULT_PLAY_COLOR, DEFAULT_RESTART_COLOR};
pub use overlay::{
    BUTTON_DIAMETER_PX, ControlButton, ControlButtonKind, ControlGlyph, OverlayFrame,
    build_overlay_frame,
};
