use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::core::{
    HostNotification, MountGeneration, TimerQueue, TransportAction, TransportIntent, WidgetConfig,
};
use crate::error::SvgViewResult;
use crate::interaction::HoverState;
use crate::render::{OverlayFrame, build_overlay_frame};
use crate::runtime::{CapabilityProfile, DocumentRuntime, NodeId, RootId};

use super::host_port::HostPort;
use super::locator::{AnimationNodes, LocatedAnimation, locate_animations};
use super::restart_sequencer::RestartPhase;

/// Timer-sequenced follow-up fired from the shell's cooperative clock.
///
/// Each queue entry carries the mount generation it was scheduled under;
/// entries from superseded mounts are dropped when they come due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DeferredStep {
    /// Restore full opacity once the transient pause cue elapses.
    RestoreOpacity,
    /// Begin a node whose end was accepted, after the native engine had
    /// time to register the end.
    BeginAfterEnd(NodeId),
    /// Begin the clone that replaced a node whose begin was rejected.
    BeginClone { original: NodeId, clone: NodeId },
}

/// Lifecycle orchestrator and single source of truth for transport intent
/// and hover state.
///
/// Generic over the document runtime and the host port so the whole engine
/// runs headless in tests; the embedding host supplies the real ones.
pub struct WidgetShell<R: DocumentRuntime, H: HostPort> {
    pub(crate) runtime: R,
    pub(crate) host: H,
    pub(crate) config: WidgetConfig,
    pub(crate) intent: TransportIntent,
    pub(crate) hover: HoverState,
    pub(crate) root: Option<RootId>,
    pub(crate) capabilities: CapabilityProfile,
    pub(crate) nodes: AnimationNodes,
    pub(crate) restart_phases: IndexMap<NodeId, RestartPhase>,
    pub(crate) generation: MountGeneration,
    pub(crate) timers: TimerQueue<DeferredStep>,
}

impl<R: DocumentRuntime, H: HostPort> WidgetShell<R, H> {
    /// Mounts `config.svg_markup` and reports the initial state to the host.
    ///
    /// Emits exactly one `state_change` notification and one frame-height
    /// request; initial intent is always `Playing`.
    pub fn new(runtime: R, host: H, config: WidgetConfig) -> SvgViewResult<Self> {
        config.validate()?;
        let mut shell = Self {
            runtime,
            host,
            config,
            intent: TransportIntent::Playing,
            hover: HoverState::default(),
            root: None,
            capabilities: CapabilityProfile::none(),
            nodes: AnimationNodes::new(),
            restart_phases: IndexMap::new(),
            generation: MountGeneration::default(),
            timers: TimerQueue::new(),
        };
        shell.mount_current_markup();
        let height = shell.config.frame_height_request();
        shell.host.request_frame_height(height);
        Ok(shell)
    }

    /// Applies a new host configuration.
    ///
    /// Content changes remount and re-apply the *current* intent; intent
    /// is never reset by unrelated re-renders. Height changes re-negotiate
    /// the embedding area with the host.
    pub fn apply_config(&mut self, config: WidgetConfig) -> SvgViewResult<()> {
        config.validate()?;
        let markup_changed = config.svg_markup != self.config.svg_markup;
        let height_changed = config.height != self.config.height;
        self.config = config;

        if markup_changed {
            self.mount_current_markup();
        }
        if height_changed {
            let height = self.config.frame_height_request();
            self.host.request_frame_height(height);
        }
        Ok(())
    }

    /// Flips play/pause intent and drives the runtime toward it.
    pub fn toggle(&mut self) {
        self.intent = self.intent.toggled();
        let action = if self.intent.is_playing() {
            TransportAction::Play
        } else {
            TransportAction::Pause
        };
        debug!(is_playing = self.intent.is_playing(), "transport toggled");
        self.emit(action);
        let intent = self.intent;
        self.apply_intent(intent);
    }

    /// Forces intent to `Playing` and replays every animation from its
    /// start, best effort.
    pub fn restart(&mut self) {
        self.intent = TransportIntent::Playing;
        debug!("transport restart requested");
        self.emit(TransportAction::Restart);
        self.run_restart_sequence();
    }

    pub fn pointer_enter(&mut self) {
        self.hover.on_pointer_enter();
    }

    pub fn pointer_leave(&mut self) {
        self.hover.on_pointer_leave();
    }

    /// Advances the cooperative clock and fires every step that came due.
    ///
    /// Steps scheduled under a superseded mount are dropped here, never
    /// executed against stale handles.
    pub fn advance(&mut self, elapsed_ms: u64) {
        for entry in self.timers.advance(elapsed_ms) {
            if entry.generation != self.generation {
                trace!(
                    due_at_ms = entry.due_at_ms,
                    scheduled_generation = entry.generation.raw(),
                    "dropping timer step from superseded mount"
                );
                continue;
            }
            match entry.step {
                DeferredStep::RestoreOpacity => self.restore_opacity(),
                DeferredStep::BeginAfterEnd(node) => self.begin_after_end(node),
                DeferredStep::BeginClone { original, clone } => {
                    self.begin_clone(original, clone);
                }
            }
        }
    }

    #[must_use]
    pub fn intent(&self) -> TransportIntent {
        self.intent
    }

    #[must_use]
    pub fn is_hovering(&self) -> bool {
        self.hover.is_hovering()
    }

    #[must_use]
    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    #[must_use]
    pub fn capabilities(&self) -> CapabilityProfile {
        self.capabilities
    }

    #[must_use]
    pub fn animation_nodes(&self) -> &[LocatedAnimation] {
        &self.nodes
    }

    #[must_use]
    pub fn mount_generation(&self) -> MountGeneration {
        self.generation
    }

    /// Per-node progress of the most recent restart sequence, in document
    /// order.
    #[must_use]
    pub fn restart_phases(&self) -> &IndexMap<NodeId, RestartPhase> {
        &self.restart_phases
    }

    #[must_use]
    pub fn pending_timer_steps(&self) -> usize {
        self.timers.pending_len()
    }

    /// Control-overlay description for the current intent and hover state.
    #[must_use]
    pub fn overlay_frame(&self) -> OverlayFrame {
        build_overlay_frame(&self.config, self.intent, self.hover.is_hovering())
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    #[must_use]
    pub fn runtime(&self) -> &R {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut R {
        &mut self.runtime
    }

    #[must_use]
    pub fn into_parts(self) -> (R, H) {
        (self.runtime, self.host)
    }

    fn mount_current_markup(&mut self) {
        self.generation = self.generation.next();
        let root = self.runtime.mount(&self.config.svg_markup);
        self.root = Some(root);
        self.capabilities = self.runtime.capabilities(root);
        self.nodes = locate_animations(&self.runtime, self.root);
        self.restart_phases.clear();
        debug!(
            generation = self.generation.raw(),
            nodes = self.nodes.len(),
            group_pause = self.capabilities.group_pause,
            timeline_seek = self.capabilities.timeline_seek,
            node_begin_end = self.capabilities.node_begin_end,
            "mounted svg content"
        );

        let intent = self.intent;
        self.apply_intent(intent);
        self.emit(TransportAction::StateChange);
    }

    fn restore_opacity(&mut self) {
        if let Some(root) = self.root
            && let Err(err) = self.runtime.set_root_opacity(root, 1.0)
        {
            trace!(error = %err, "opacity restore dropped");
        }
    }

    pub(crate) fn emit(&mut self, action: TransportAction) {
        self.host
            .notify(HostNotification::new(self.intent.is_playing(), action));
    }
}
