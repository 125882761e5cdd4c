use approx::assert_relative_eq;
use svgview_rs::api::{RecordingHostPort, WidgetShell};
use svgview_rs::core::WidgetConfig;
use svgview_rs::render::{
    BUTTON_DIAMETER_PX, Color, ControlButtonKind, ControlGlyph, DEFAULT_PAUSE_COLOR,
    DEFAULT_PLAY_COLOR, DEFAULT_RESTART_COLOR,
};
use svgview_rs::runtime::HeadlessRuntime;

const LOOPING_CIRCLE: &str = r#"<svg viewBox="0 0 200 200">
    <circle cx="100" cy="100" r="30">
        <animate attributeName="r" values="30;60;30" dur="3s" repeatCount="indefinite"/>
    </circle>
</svg>"#;

fn default_shell() -> WidgetShell<HeadlessRuntime, RecordingHostPort> {
    WidgetShell::new(
        HeadlessRuntime::new(),
        RecordingHostPort::default(),
        WidgetConfig::new(LOOPING_CIRCLE),
    )
    .expect("shell init")
}

#[test]
fn toggle_button_always_reflects_requested_intent() {
    let mut shell = default_shell();

    let overlay = shell.overlay_frame();
    overlay.validate().expect("valid overlay");
    let toggle = overlay.buttons[0];
    assert_eq!(toggle.kind, ControlButtonKind::Toggle);
    assert_eq!(toggle.glyph, ControlGlyph::Pause);
    assert_eq!(toggle.fill, DEFAULT_PAUSE_COLOR);

    // Immediately after the state-changing action the affordance is in
    // sync, whatever the native engine did underneath.
    shell.toggle();
    let toggle = shell.overlay_frame().buttons[0];
    assert_eq!(toggle.glyph, ControlGlyph::Play);
    assert_eq!(toggle.fill, DEFAULT_PLAY_COLOR);

    let restart = shell.overlay_frame().buttons[1];
    assert_eq!(restart.kind, ControlButtonKind::Restart);
    assert_eq!(restart.glyph, ControlGlyph::Restart);
    assert_eq!(restart.fill, DEFAULT_RESTART_COLOR);
}

#[test]
fn buttons_fade_in_and_accept_hits_only_while_hovering() {
    let mut shell = default_shell();

    for button in shell.overlay_frame().buttons {
        assert_relative_eq!(button.opacity, 0.0);
        assert!(!button.hit_testable);
    }

    shell.pointer_enter();
    for button in shell.overlay_frame().buttons {
        assert_relative_eq!(button.opacity, 1.0);
        assert!(button.hit_testable);
    }

    shell.pointer_leave();
    for button in shell.overlay_frame().buttons {
        assert_relative_eq!(button.opacity, 0.0);
        assert!(!button.hit_testable);
    }
}

#[test]
fn buttons_anchor_to_the_top_right_corner() {
    let shell = default_shell();
    let overlay = shell.overlay_frame();
    let [toggle, restart] = overlay.buttons;
    let radius = BUTTON_DIAMETER_PX / 2.0;

    assert_relative_eq!(restart.center_x, 400.0 - 10.0 - radius);
    assert_relative_eq!(toggle.center_x, restart.center_x - BUTTON_DIAMETER_PX - 8.0);
    assert_relative_eq!(toggle.center_y, 10.0 + radius);
    assert_relative_eq!(restart.center_y, toggle.center_y);
    assert_relative_eq!(toggle.radius, radius);
}

#[test]
fn configured_colors_flow_into_the_overlay() {
    let config = WidgetConfig::new(LOOPING_CIRCLE).with_button_colors(
        Color::parse_css("rgba(255,20,147,0.8)").expect("play"),
        Color::parse_css("rgba(138,43,226,0.8)").expect("pause"),
        Color::parse_css("rgba(255,105,180,0.8)").expect("restart"),
    );
    let mut shell = WidgetShell::new(HeadlessRuntime::new(), RecordingHostPort::default(), config)
        .expect("shell init");

    assert_eq!(
        shell.overlay_frame().buttons[0].fill,
        Color::parse_css("rgba(138,43,226,0.8)").expect("pause")
    );
    shell.toggle();
    assert_eq!(
        shell.overlay_frame().buttons[0].fill,
        Color::parse_css("rgba(255,20,147,0.8)").expect("play")
    );
    assert_eq!(
        shell.overlay_frame().buttons[1].fill,
        Color::parse_css("rgba(255,105,180,0.8)").expect("restart")
    );
}
