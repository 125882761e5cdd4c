use tracing::{debug, trace};

use crate::runtime::{ControlError, DocumentRuntime, NodeId};

use super::host_port::HostPort;
use super::shell::{DeferredStep, WidgetShell};

/// Delay between a node's end and its re-begin, long enough for the native
/// engine to register the end.
pub const RESTART_STEP_DELAY_MS: u64 = 10;

/// Per-node progress through the end→begin→clone retry ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestartPhase {
    /// End accepted; begin scheduled after the registration delay.
    EndRequested,
    /// Begin rejected after a successful end; the node was replaced by a
    /// structural clone awaiting its own begin.
    CloneScheduled,
    /// The node (or its clone) accepted a begin.
    Restarted,
    /// Every tier failed for this node.
    GaveUp,
}

impl<R: DocumentRuntime, H: HostPort> WidgetShell<R, H> {
    /// Forces every located animation back to its start, best effort.
    ///
    /// Tier order: resume the root unconditionally (a restart must never
    /// leave the runtime paused), seek the whole timeline to zero when the
    /// runtime can, otherwise end/begin each node individually, and
    /// finally strip style-level pause hints so they cannot mask the
    /// restarted timeline.
    pub(crate) fn run_restart_sequence(&mut self) {
        let Some(root) = self.root else {
            return;
        };
        self.restart_phases.clear();

        if self.capabilities.group_pause
            && let Err(err) = self.runtime.resume_all(root)
        {
            debug!(error = %err, "pre-restart resume rejected");
        }

        if self.capabilities.timeline_seek {
            match self.runtime.seek_to_start(root) {
                Ok(()) => {
                    // Seek restarts every animation in lockstep; no
                    // per-node work needed.
                    debug!("restarted via timeline seek");
                    return;
                }
                Err(err) => {
                    debug!(error = %err, "timeline seek rejected, restarting per node");
                }
            }
        }

        if self.capabilities.node_begin_end {
            let nodes = self.nodes.clone();
            for located in nodes {
                self.restart_node(located.node);
            }
        }

        if let Err(err) = self.runtime.clear_play_state_hints(root) {
            trace!(error = %err, "pause-hint cleanup dropped");
        }
    }

    fn restart_node(&mut self, node: NodeId) {
        match self.runtime.end_node(node) {
            Ok(()) => {
                self.restart_phases.insert(node, RestartPhase::EndRequested);
                self.timers.schedule(
                    RESTART_STEP_DELAY_MS,
                    self.generation,
                    DeferredStep::BeginAfterEnd(node),
                );
            }
            Err(err) => {
                trace!(node = node.raw(), error = %err, "end rejected, attempting direct begin");
                let phase = match self.runtime.begin_node(node) {
                    Ok(()) => RestartPhase::Restarted,
                    Err(err) => {
                        trace!(node = node.raw(), error = %err, "direct begin rejected");
                        RestartPhase::GaveUp
                    }
                };
                self.restart_phases.insert(node, phase);
            }
        }
    }

    /// Fired from the timer queue once the native engine registered the
    /// end of `node`.
    pub(crate) fn begin_after_end(&mut self, node: NodeId) {
        match self.runtime.begin_node(node) {
            Ok(()) => {
                self.restart_phases.insert(node, RestartPhase::Restarted);
            }
            Err(ControlError::StaleHandle) => {
                trace!(node = node.raw(), "begin step dropped for stale node");
            }
            Err(err) => {
                trace!(node = node.raw(), error = %err, "begin rejected, cloning node");
                match self.runtime.replace_with_clone(node) {
                    Ok(clone) => {
                        self.adopt_clone(node, clone);
                        self.restart_phases
                            .insert(node, RestartPhase::CloneScheduled);
                        self.timers.schedule(
                            RESTART_STEP_DELAY_MS,
                            self.generation,
                            DeferredStep::BeginClone {
                                original: node,
                                clone,
                            },
                        );
                    }
                    Err(err) => {
                        trace!(node = node.raw(), error = %err, "clone replacement rejected");
                        self.restart_phases.insert(node, RestartPhase::GaveUp);
                    }
                }
            }
        }
    }

    /// Fired from the timer queue once the clone replacing `original` is in
    /// place.
    pub(crate) fn begin_clone(&mut self, original: NodeId, clone: NodeId) {
        let phase = match self.runtime.begin_node(clone) {
            Ok(()) => RestartPhase::Restarted,
            Err(err) => {
                trace!(node = clone.raw(), error = %err, "clone begin rejected");
                RestartPhase::GaveUp
            }
        };
        self.restart_phases.insert(original, phase);
    }

    /// Swaps the live handle for a node that was replaced by its clone so
    /// later transport passes address the element actually in the tree.
    fn adopt_clone(&mut self, original: NodeId, clone: NodeId) {
        for located in &mut self.nodes {
            if located.node == original {
                located.node = clone;
            }
        }
    }
}
