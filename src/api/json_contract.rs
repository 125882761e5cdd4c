use serde::{Deserialize, Serialize};

use crate::core::{HostNotification, WidgetConfig};
use crate::error::{SvgViewError, SvgViewResult};
use crate::render::Color;

pub const WIDGET_PAYLOAD_JSON_SCHEMA_V1: u32 = 1;

fn default_width() -> u32 {
    WidgetConfig::DEFAULT_WIDTH
}

fn default_height() -> u32 {
    WidgetConfig::DEFAULT_HEIGHT
}

/// Raw host payload as delivered over the embedding message channel, one
/// per render cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetPayloadV1 {
    pub svg_content: String,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default)]
    pub play_color: Option<String>,
    #[serde(default)]
    pub pause_color: Option<String>,
    #[serde(default)]
    pub restart_color: Option<String>,
}

impl WidgetPayloadV1 {
    pub fn from_json_str(input: &str) -> SvgViewResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            SvgViewError::InvalidPayload(format!("failed to parse widget payload: {e}"))
        })
    }

    /// Resolves the payload into an engine configuration, parsing color
    /// strings and applying defaults for absent fields.
    pub fn into_config(self) -> SvgViewResult<WidgetConfig> {
        let mut config =
            WidgetConfig::new(self.svg_content).with_frame_size(self.width, self.height);
        if let Some(raw) = self.play_color {
            config.play_color = Color::parse_css(&raw)?;
        }
        if let Some(raw) = self.pause_color {
            config.pause_color = Color::parse_css(&raw)?;
        }
        if let Some(raw) = self.restart_color {
            config.restart_color = Color::parse_css(&raw)?;
        }
        Ok(config)
    }
}

impl WidgetConfig {
    /// Parses one host payload straight into a validated configuration.
    pub fn from_payload_json(input: &str) -> SvgViewResult<Self> {
        let config = WidgetPayloadV1::from_json_str(input)?.into_config()?;
        config.validate()?;
        Ok(config)
    }
}

impl HostNotification {
    /// Wire form consumed by the embedding host, e.g.
    /// `{"is_playing":false,"action":"pause"}`.
    pub fn to_json(&self) -> SvgViewResult<String> {
        serde_json::to_string(self).map_err(|e| {
            SvgViewError::InvalidPayload(format!("failed to serialize notification: {e}"))
        })
    }
}
