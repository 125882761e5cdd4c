use crate::error::{SvgViewError, SvgViewResult};
use crate::render::{Color, DEFAULT_PAUSE_COLOR, DEFAULT_PLAY_COLOR, DEFAULT_RESTART_COLOR};

/// Vertical padding added to the configured content height when asking the
/// host to size the embedding area.
pub const FRAME_PADDING_PX: u32 = 20;

/// Host-owned widget configuration, immutable per render cycle.
///
/// Colors fall back to fixed defaults when the host leaves them out of the
/// payload; dimensions default to 400×300.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetConfig {
    pub svg_markup: String,
    pub width: u32,
    pub height: u32,
    pub play_color: Color,
    pub pause_color: Color,
    pub restart_color: Color,
}

impl WidgetConfig {
    pub const DEFAULT_WIDTH: u32 = 400;
    pub const DEFAULT_HEIGHT: u32 = 300;

    #[must_use]
    pub fn new(svg_markup: impl Into<String>) -> Self {
        Self {
            svg_markup: svg_markup.into(),
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
            play_color: DEFAULT_PLAY_COLOR,
            pause_color: DEFAULT_PAUSE_COLOR,
            restart_color: DEFAULT_RESTART_COLOR,
        }
    }

    #[must_use]
    pub fn with_frame_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_button_colors(mut self, play: Color, pause: Color, restart: Color) -> Self {
        self.play_color = play;
        self.pause_color = pause;
        self.restart_color = restart;
        self
    }

    pub fn validate(&self) -> SvgViewResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(SvgViewError::InvalidFrameSize {
                width: self.width,
                height: self.height,
            });
        }
        for color in [self.play_color, self.pause_color, self.restart_color] {
            color.validate()?;
        }
        Ok(())
    }

    /// Display height the host should reserve for the embedding area.
    #[must_use]
    pub const fn frame_height_request(&self) -> u32 {
        self.height + FRAME_PADDING_PX
    }
}
