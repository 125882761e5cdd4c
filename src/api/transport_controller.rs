use tracing::{debug, trace};

use crate::core::TransportIntent;
use crate::runtime::DocumentRuntime;

use super::host_port::HostPort;
use super::shell::{DeferredStep, WidgetShell};

/// How long the transient pause cue dims the document.
pub const PAUSE_CUE_MS: u64 = 200;
/// Root opacity while the pause cue is active.
pub const PAUSE_CUE_OPACITY: f64 = 0.5;

impl<R: DocumentRuntime, H: HostPort> WidgetShell<R, H> {
    /// Drives the mounted subtree toward `intent` through the tiered
    /// fallbacks. Never fails; an unsupported or rejected primitive only
    /// selects the next tier.
    pub(crate) fn apply_intent(&mut self, intent: TransportIntent) {
        match intent {
            TransportIntent::Playing => self.apply_playing(),
            TransportIntent::Paused => self.apply_paused(),
        }
    }

    fn apply_playing(&mut self) {
        let Some(root) = self.root else {
            return;
        };

        if self.capabilities.group_pause {
            match self.runtime.resume_all(root) {
                Ok(()) => {
                    debug!("resumed animations via root primitive");
                    return;
                }
                Err(err) => {
                    debug!(error = %err, "root resume rejected, trying per-node begin");
                }
            }
        }

        if self.capabilities.node_begin_end && !self.nodes.is_empty() {
            for located in &self.nodes {
                if let Err(err) = self.runtime.begin_node(located.node) {
                    // Already-running animations reject a re-begin; that is
                    // the desired end state.
                    trace!(node = located.node.raw(), error = %err, "begin rejected");
                }
            }
            return;
        }

        // No timing primitive left: clear pause styling so at least
        // style-level state reads as running.
        if let Err(err) = self.runtime.force_running_style(root) {
            trace!(error = %err, "running-style recovery dropped");
        }
    }

    fn apply_paused(&mut self) {
        let Some(root) = self.root else {
            return;
        };

        if self.capabilities.group_pause {
            match self.runtime.pause_all(root) {
                Ok(()) => {
                    debug!("paused animations via root primitive");
                    return;
                }
                Err(err) => {
                    debug!(error = %err, "root pause rejected, trying per-node end");
                }
            }
        }

        if self.capabilities.node_begin_end {
            for located in &self.nodes {
                if let Err(err) = self.runtime.end_node(located.node) {
                    trace!(node = located.node.raw(), error = %err, "end rejected");
                }
            }
        }

        // No authoritative pause took effect. Ending animations is not a
        // pause, so communicate "pause requested, animations will resume
        // from the beginning" with a transient dim instead of failing
        // silently.
        debug!("no authoritative pause primitive, applying transient cue");
        if let Err(err) = self.runtime.set_root_opacity(root, PAUSE_CUE_OPACITY) {
            trace!(error = %err, "pause cue dropped");
            return;
        }
        self.timers
            .schedule(PAUSE_CUE_MS, self.generation, DeferredStep::RestoreOpacity);
    }
}
