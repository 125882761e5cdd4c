use serde::{Deserialize, Serialize};

/// Which native timing primitives a mounted root exposes.
///
/// Resolved once per mount so the transport tiers dispatch on a fixed
/// record instead of re-probing the runtime object on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityProfile {
    /// Root-level pause/resume pair over the whole timeline.
    pub group_pause: bool,
    /// Root-level seek over the whole timeline.
    pub timeline_seek: bool,
    /// Per-element begin/end pair.
    pub node_begin_end: bool,
}

impl CapabilityProfile {
    #[must_use]
    pub const fn full() -> Self {
        Self {
            group_pause: true,
            timeline_seek: true,
            node_begin_end: true,
        }
    }

    #[must_use]
    pub const fn none() -> Self {
        Self {
            group_pause: false,
            timeline_seek: false,
            node_begin_end: false,
        }
    }

    #[must_use]
    pub const fn with_group_pause(mut self, supported: bool) -> Self {
        self.group_pause = supported;
        self
    }

    #[must_use]
    pub const fn with_timeline_seek(mut self, supported: bool) -> Self {
        self.timeline_seek = supported;
        self
    }

    #[must_use]
    pub const fn with_node_begin_end(mut self, supported: bool) -> Self {
        self.node_begin_end = supported;
        self
    }
}

impl Default for CapabilityProfile {
    fn default() -> Self {
        Self::full()
    }
}
