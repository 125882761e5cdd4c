//! svgview-rs: SVG animation transport-control widget core.
//!
//! This crate owns the logic that reconciles a simple play/pause/restart
//! user intent with the inconsistent native SVG animation timing API,
//! using layered fallback strategies when a given control primitive is
//! unsupported or silently no-ops. The embedding host supplies the
//! document runtime and the outbound message channel through trait seams,
//! so the whole engine runs headless in tests.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod runtime;
pub mod telemetry;

pub use api::{HostPort, RecordingHostPort, WidgetShell};
pub use crate::core::WidgetConfig;
pub use error::{SvgViewError, SvgViewResult};
