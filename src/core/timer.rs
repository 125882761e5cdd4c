use serde::{Deserialize, Serialize};

/// Identity of one mounted subtree.
///
/// Every scheduled timer step carries the generation it was created under;
/// a step whose generation no longer matches the current mount is a guarded
/// no-op instead of an action against stale node handles.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct MountGeneration(u64);

impl MountGeneration {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }

    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// One fire-and-forget step waiting on the cooperative clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledStep<S> {
    pub due_at_ms: u64,
    pub generation: MountGeneration,
    pub step: S,
}

/// Deterministic delay queue driven by the host clock.
///
/// There is no background thread; the embedder advances elapsed wall time
/// through the shell and due steps fire synchronously, in due-time order
/// (insertion order for ties).
#[derive(Debug)]
pub struct TimerQueue<S> {
    now_ms: u64,
    pending: Vec<ScheduledStep<S>>,
}

impl<S> TimerQueue<S> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            now_ms: 0,
            pending: Vec::new(),
        }
    }

    #[must_use]
    pub const fn now_ms(&self) -> u64 {
        self.now_ms
    }

    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn schedule(&mut self, delay_ms: u64, generation: MountGeneration, step: S) {
        self.pending.push(ScheduledStep {
            due_at_ms: self.now_ms.saturating_add(delay_ms),
            generation,
            step,
        });
    }

    /// Moves the clock forward and drains every step that became due.
    pub fn advance(&mut self, elapsed_ms: u64) -> Vec<ScheduledStep<S>> {
        self.now_ms = self.now_ms.saturating_add(elapsed_ms);
        let now = self.now_ms;

        let mut due = Vec::new();
        let mut index = 0;
        while index < self.pending.len() {
            if self.pending[index].due_at_ms <= now {
                due.push(self.pending.remove(index));
            } else {
                index += 1;
            }
        }
        due.sort_by_key(|entry| entry.due_at_ms);
        due
    }
}

impl<S> Default for TimerQueue<S> {
    fn default() -> Self {
        Self::new()
    }
}
