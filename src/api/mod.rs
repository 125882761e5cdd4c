//! Widget-facing API layer: the shell, its transport controllers, and the
//! host contracts.

mod host_port;
mod json_contract;
mod locator;
mod restart_sequencer;
mod shell;
mod transport_controller;

pub use host_port::{HostPort, RecordingHostPort};
pub use json_contract::{WIDGET_PAYLOAD_JSON_SCHEMA_V1, WidgetPayloadV1};
pub use locator::{AnimationNodes, LocatedAnimation, locate_animations};
pub use restart_sequencer::{RESTART_STEP_DELAY_MS, RestartPhase};
pub use shell::WidgetShell;
pub use transport_controller::{PAUSE_CUE_MS, PAUSE_CUE_OPACITY};
