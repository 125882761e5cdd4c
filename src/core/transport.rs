use serde::{Deserialize, Serialize};

/// User-requested logical playback state.
///
/// Intent is independent of whether the underlying native timing engine can
/// fully honor the request; the shell keeps it in sync with the rendered
/// control affordances even when a primitive silently no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransportIntent {
    Playing,
    Paused,
}

impl TransportIntent {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Playing => Self::Paused,
            Self::Paused => Self::Playing,
        }
    }

    #[must_use]
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }
}

/// Action tag reported to the host with every notification.
///
/// `StateChange` marks intent syncs without direct user action (content
/// mounts); the other three mark the corresponding user-triggered
/// transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportAction {
    StateChange,
    Play,
    Pause,
    Restart,
}

/// Outbound payload emitted to the host on every state-affecting event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostNotification {
    pub is_playing: bool,
    pub action: TransportAction,
}

impl HostNotification {
    #[must_use]
    pub const fn new(is_playing: bool, action: TransportAction) -> Self {
        Self { is_playing, action }
    }
}
