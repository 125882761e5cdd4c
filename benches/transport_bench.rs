use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use svgview_rs::api::{RecordingHostPort, WidgetShell, locate_animations};
use svgview_rs::core::WidgetConfig;
use svgview_rs::runtime::{CapabilityProfile, DocumentRuntime, HeadlessRuntime};

fn markup_with_animations(count: usize) -> String {
    let mut markup = String::from(r#"<svg viewBox="0 0 1000 1000">"#);
    for index in 0..count {
        markup.push_str(&format!(
            r#"<circle cx="{index}" cy="10" r="5"><animate attributeName="r" values="5;10;5" dur="2s" repeatCount="indefinite"/></circle>"#
        ));
    }
    markup.push_str("</svg>");
    markup
}

fn bench_locate_100_animations(c: &mut Criterion) {
    let mut runtime = HeadlessRuntime::new();
    let root = runtime.mount(&markup_with_animations(100));

    c.bench_function("locate_100_animations", |b| {
        b.iter(|| {
            let nodes = locate_animations(&runtime, Some(black_box(root)));
            black_box(nodes.len())
        })
    });
}

fn bench_toggle_cycle_per_node_fallback(c: &mut Criterion) {
    let capabilities = CapabilityProfile::full().with_group_pause(false);
    let mut shell = WidgetShell::new(
        HeadlessRuntime::with_capabilities(capabilities),
        RecordingHostPort::default(),
        WidgetConfig::new(markup_with_animations(100)),
    )
    .expect("shell init");

    c.bench_function("toggle_cycle_per_node_fallback", |b| {
        b.iter(|| {
            shell.runtime_mut().clear_journal();
            shell.toggle();
            shell.advance(250);
            shell.toggle();
            black_box(shell.intent())
        })
    });
}

criterion_group!(
    benches,
    bench_locate_100_animations,
    bench_toggle_cycle_per_node_fallback
);
criterion_main!(benches);
