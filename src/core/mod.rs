pub mod config;
pub mod timer;
pub mod transport;

pub use config::{FRAME_PADDING_PX, WidgetConfig};
pub use timer::{MountGeneration, ScheduledStep, TimerQueue};
pub use transport::{HostNotification, TransportAction, TransportIntent};
