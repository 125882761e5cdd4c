use svgview_rs::api::WidgetPayloadV1;
use svgview_rs::core::{HostNotification, TransportAction, WidgetConfig};
use svgview_rs::error::SvgViewError;
use svgview_rs::render::{
    Color, DEFAULT_PAUSE_COLOR, DEFAULT_PLAY_COLOR, DEFAULT_RESTART_COLOR,
};

#[test]
fn minimal_payload_uses_defaults() {
    let config = WidgetConfig::from_payload_json(r#"{ "svg_content": "<svg></svg>" }"#)
        .expect("parse payload");

    assert_eq!(config.svg_markup, "<svg></svg>");
    assert_eq!(config.width, 400);
    assert_eq!(config.height, 300);
    assert_eq!(config.play_color, DEFAULT_PLAY_COLOR);
    assert_eq!(config.pause_color, DEFAULT_PAUSE_COLOR);
    assert_eq!(config.restart_color, DEFAULT_RESTART_COLOR);
}

#[test]
fn explicit_fields_override_defaults() {
    let json = r##"{
  "svg_content": "<svg></svg>",
  "width": 250,
  "height": 200,
  "play_color": "#ff6b6b",
  "pause_color": "rgba(138, 43, 226, 0.8)",
  "restart_color": "#45b7d1"
}"##;
    let config = WidgetConfig::from_payload_json(json).expect("parse payload");

    assert_eq!(config.width, 250);
    assert_eq!(config.height, 200);
    assert_eq!(config.play_color, Color::parse_css("#ff6b6b").expect("hex"));
    assert_eq!(
        config.pause_color,
        Color::from_rgba8(138, 43, 226, 0.8)
    );
    assert_eq!(config.frame_height_request(), 220);
}

#[test]
fn missing_content_is_rejected() {
    let result = WidgetPayloadV1::from_json_str(r#"{ "width": 250 }"#);
    assert!(matches!(result, Err(SvgViewError::InvalidPayload(_))));
}

#[test]
fn malformed_color_is_rejected() {
    let json = r#"{ "svg_content": "<svg></svg>", "play_color": "sort-of-green" }"#;
    let result = WidgetConfig::from_payload_json(json);
    assert!(matches!(result, Err(SvgViewError::InvalidData(_))));
}

#[test]
fn notifications_serialize_to_the_wire_contract() {
    let cases = [
        (
            HostNotification::new(true, TransportAction::StateChange),
            r#"{"is_playing":true,"action":"state_change"}"#,
        ),
        (
            HostNotification::new(false, TransportAction::Pause),
            r#"{"is_playing":false,"action":"pause"}"#,
        ),
        (
            HostNotification::new(true, TransportAction::Play),
            r#"{"is_playing":true,"action":"play"}"#,
        ),
        (
            HostNotification::new(true, TransportAction::Restart),
            r#"{"is_playing":true,"action":"restart"}"#,
        ),
    ];
    for (notification, expected) in cases {
        assert_eq!(notification.to_json().expect("serialize"), expected);
    }
}
