//! Seam between the transport engine and a concrete SVG document runtime.
//!
//! A runtime is whatever actually owns the rendered SVG subtree: a browser
//! DOM behind a message bridge, an embedded renderer, or the in-process
//! headless harness. The engine only ever touches animations through
//! `DocumentRuntime`, and every timing primitive reports failure as a
//! `ControlError` value the tiered fallbacks consume; nothing here panics
//! or surfaces to the host.

mod capability;
mod headless;

pub use capability::CapabilityProfile;
pub use headless::{HeadlessRuntime, RuntimeOp};

use thiserror::Error;

/// Opaque identity of one mounted root `<svg>` element.
///
/// Re-acquired on every content change and never persisted across swaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RootId(u64);

impl RootId {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Opaque identity of one element under a mounted root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u64);

impl NodeId {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Why a control primitive did not take effect.
///
/// None of these are fatal: the transport tiers consume them to decide
/// whether the next fallback runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ControlError {
    /// The runtime lacks this primitive entirely.
    #[error("primitive not supported by this runtime")]
    Unsupported,
    /// The primitive was rejected in the current animation state, such as
    /// beginning an animation that is already running.
    #[error("primitive rejected in the current animation state")]
    InvalidOperation,
    /// The handle refers to a superseded mount.
    #[error("handle refers to a superseded mount")]
    StaleHandle,
}

pub type ControlResult<T = ()> = Result<T, ControlError>;

/// SMIL element names the locator recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationElementKind {
    Animate,
    AnimateTransform,
    AnimateMotion,
}

impl AnimationElementKind {
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "animate" => Some(Self::Animate),
            "animateTransform" => Some(Self::AnimateTransform),
            "animateMotion" => Some(Self::AnimateMotion),
            _ => None,
        }
    }
}

/// One descendant element surfaced by the runtime's document traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementDescriptor {
    pub node: NodeId,
    pub tag: String,
}

/// Contract implemented by any SVG document runtime.
pub trait DocumentRuntime {
    /// Replaces the mounted subtree with `markup` and returns the new root.
    ///
    /// Handles issued for the previous subtree become stale; operations on
    /// them must report `ControlError::StaleHandle` rather than acting.
    fn mount(&mut self, markup: &str) -> RootId;

    /// Timing capabilities of the engine behind `root`.
    fn capabilities(&self, root: RootId) -> CapabilityProfile;

    /// Every descendant element of `root` in document order.
    fn descendants(&self, root: RootId) -> Vec<ElementDescriptor>;

    /// Pauses the whole timeline under `root`.
    fn pause_all(&mut self, root: RootId) -> ControlResult;

    /// Resumes the whole timeline under `root`.
    fn resume_all(&mut self, root: RootId) -> ControlResult;

    /// Seeks the whole timeline under `root` back to time zero.
    fn seek_to_start(&mut self, root: RootId) -> ControlResult;

    /// Begins one animation element now.
    fn begin_node(&mut self, node: NodeId) -> ControlResult;

    /// Ends one animation element now.
    fn end_node(&mut self, node: NodeId) -> ControlResult;

    /// Replaces `node` with a structural clone of itself, resetting the
    /// native animation timers, and returns the clone's handle.
    fn replace_with_clone(&mut self, node: NodeId) -> ControlResult<NodeId>;

    /// Sets the root's rendered opacity; used by the transient pause cue.
    fn set_root_opacity(&mut self, root: RootId, opacity: f64) -> ControlResult;

    /// Forces a running play-state style hint and full visibility on the
    /// root; cosmetic recovery when no timing primitive is available.
    fn force_running_style(&mut self, root: RootId) -> ControlResult;

    /// Strips any lingering paused style hint from every element in the
    /// subtree so style-level pausing cannot mask a restarted timeline.
    fn clear_play_state_hints(&mut self, root: RootId) -> ControlResult;
}

#[cfg(test)]
mod tests {
    use super::AnimationElementKind;

    #[test]
    fn recognizes_the_three_smil_tags() {
        assert_eq!(
            AnimationElementKind::from_tag("animate"),
            Some(AnimationElementKind::Animate)
        );
        assert_eq!(
            AnimationElementKind::from_tag("animateTransform"),
            Some(AnimationElementKind::AnimateTransform)
        );
        assert_eq!(
            AnimationElementKind::from_tag("animateMotion"),
            Some(AnimationElementKind::AnimateMotion)
        );
        assert_eq!(AnimationElementKind::from_tag("circle"), None);
        assert_eq!(AnimationElementKind::from_tag("set"), None);
    }
}
