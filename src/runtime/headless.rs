use std::collections::{HashMap, HashSet};

use super::{
    AnimationElementKind, CapabilityProfile, ControlError, ControlResult, DocumentRuntime,
    ElementDescriptor, NodeId, RootId,
};

/// Journal entry for one primitive invocation against the headless runtime.
///
/// Stale and capability-gated calls are not journaled; calls rejected for
/// animation-state reasons are, so tests can observe which tier ran.
#[derive(Debug, Clone, PartialEq)]
pub enum RuntimeOp {
    Mount,
    PauseAll,
    ResumeAll,
    SeekToStart,
    BeginNode(NodeId),
    EndNode(NodeId),
    ReplaceWithClone { old: NodeId, new: NodeId },
    SetRootOpacity(f64),
    ForceRunningStyle,
    ClearPlayStateHints,
}

/// Simulated document runtime for tests and headless embedding.
///
/// Mirrors the observable behavior of a native SMIL timing engine closely
/// enough to exercise every fallback tier: capability gating, rejection of
/// begin on an already-running animation, stale handles after a remount,
/// and clone-replacement resetting an element's timers.
#[derive(Debug)]
pub struct HeadlessRuntime {
    capabilities: CapabilityProfile,
    next_id: u64,
    root: Option<RootId>,
    elements: Vec<ElementDescriptor>,
    live: HashSet<NodeId>,
    running: HashMap<NodeId, bool>,
    fail_begin: HashSet<NodeId>,
    paused: bool,
    root_opacity: f64,
    running_style_forced: bool,
    hint_clear_count: usize,
    journal: Vec<RuntimeOp>,
}

impl HeadlessRuntime {
    #[must_use]
    pub fn new() -> Self {
        Self::with_capabilities(CapabilityProfile::full())
    }

    #[must_use]
    pub fn with_capabilities(capabilities: CapabilityProfile) -> Self {
        Self {
            capabilities,
            next_id: 0,
            root: None,
            elements: Vec::new(),
            live: HashSet::new(),
            running: HashMap::new(),
            fail_begin: HashSet::new(),
            paused: false,
            root_opacity: 1.0,
            running_style_forced: false,
            hint_clear_count: 0,
            journal: Vec::new(),
        }
    }

    /// Scripts `begin_node` on `node` to be rejected, forcing callers into
    /// their clone-replacement fallback.
    pub fn set_fail_begin(&mut self, node: NodeId, fail: bool) {
        if fail {
            self.fail_begin.insert(node);
        } else {
            self.fail_begin.remove(&node);
        }
    }

    #[must_use]
    pub fn journal(&self) -> &[RuntimeOp] {
        &self.journal
    }

    pub fn clear_journal(&mut self) {
        self.journal.clear();
    }

    #[must_use]
    pub fn root_opacity(&self) -> f64 {
        self.root_opacity
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// `None` when the handle is stale.
    #[must_use]
    pub fn is_node_running(&self, node: NodeId) -> Option<bool> {
        self.running.get(&node).copied()
    }

    #[must_use]
    pub fn running_style_forced(&self) -> bool {
        self.running_style_forced
    }

    #[must_use]
    pub fn hint_clear_count(&self) -> usize {
        self.hint_clear_count
    }

    #[must_use]
    pub fn current_root(&self) -> Option<RootId> {
        self.root
    }

    fn ensure_root(&self, root: RootId) -> ControlResult {
        if self.root == Some(root) {
            Ok(())
        } else {
            Err(ControlError::StaleHandle)
        }
    }

    fn ensure_live(&self, node: NodeId) -> ControlResult {
        if self.live.contains(&node) {
            Ok(())
        } else {
            Err(ControlError::StaleHandle)
        }
    }

    fn alloc_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

impl Default for HeadlessRuntime {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentRuntime for HeadlessRuntime {
    fn mount(&mut self, markup: &str) -> RootId {
        let root = RootId::new(self.alloc_id());
        self.root = Some(root);
        self.elements.clear();
        self.live.clear();
        self.running.clear();
        self.paused = false;
        self.root_opacity = 1.0;
        self.running_style_forced = false;

        for tag in scan_tags(markup) {
            let node = NodeId::new(self.alloc_id());
            if AnimationElementKind::from_tag(&tag).is_some() {
                // SMIL animations auto-start on document load.
                self.running.insert(node, true);
            }
            self.live.insert(node);
            self.elements.push(ElementDescriptor { node, tag });
        }
        self.journal.push(RuntimeOp::Mount);
        root
    }

    fn capabilities(&self, _root: RootId) -> CapabilityProfile {
        self.capabilities
    }

    fn descendants(&self, root: RootId) -> Vec<ElementDescriptor> {
        if self.root == Some(root) {
            self.elements.clone()
        } else {
            Vec::new()
        }
    }

    fn pause_all(&mut self, root: RootId) -> ControlResult {
        self.ensure_root(root)?;
        if !self.capabilities.group_pause {
            return Err(ControlError::Unsupported);
        }
        self.journal.push(RuntimeOp::PauseAll);
        self.paused = true;
        Ok(())
    }

    fn resume_all(&mut self, root: RootId) -> ControlResult {
        self.ensure_root(root)?;
        if !self.capabilities.group_pause {
            return Err(ControlError::Unsupported);
        }
        self.journal.push(RuntimeOp::ResumeAll);
        self.paused = false;
        Ok(())
    }

    fn seek_to_start(&mut self, root: RootId) -> ControlResult {
        self.ensure_root(root)?;
        if !self.capabilities.timeline_seek {
            return Err(ControlError::Unsupported);
        }
        self.journal.push(RuntimeOp::SeekToStart);
        for running in self.running.values_mut() {
            *running = true;
        }
        Ok(())
    }

    fn begin_node(&mut self, node: NodeId) -> ControlResult {
        self.ensure_live(node)?;
        if !self.capabilities.node_begin_end {
            return Err(ControlError::Unsupported);
        }
        self.journal.push(RuntimeOp::BeginNode(node));
        if self.fail_begin.contains(&node) {
            return Err(ControlError::InvalidOperation);
        }
        if self.running.get(&node).copied().unwrap_or(false) {
            // Native engines raise when re-beginning a running animation.
            return Err(ControlError::InvalidOperation);
        }
        self.running.insert(node, true);
        Ok(())
    }

    fn end_node(&mut self, node: NodeId) -> ControlResult {
        self.ensure_live(node)?;
        if !self.capabilities.node_begin_end {
            return Err(ControlError::Unsupported);
        }
        self.journal.push(RuntimeOp::EndNode(node));
        if !self.running.get(&node).copied().unwrap_or(false) {
            // No active interval to end.
            return Err(ControlError::InvalidOperation);
        }
        self.running.insert(node, false);
        Ok(())
    }

    fn replace_with_clone(&mut self, node: NodeId) -> ControlResult<NodeId> {
        self.ensure_live(node)?;
        let index = self
            .elements
            .iter()
            .position(|element| element.node == node)
            .ok_or(ControlError::StaleHandle)?;

        let clone = NodeId::new(self.alloc_id());
        let tag = self.elements[index].tag.clone();
        self.elements[index] = ElementDescriptor { node: clone, tag };
        self.live.remove(&node);
        self.running.remove(&node);
        self.fail_begin.remove(&node);
        self.live.insert(clone);
        // A fresh clone has not begun yet.
        self.running.insert(clone, false);
        self.journal.push(RuntimeOp::ReplaceWithClone { old: node, new: clone });
        Ok(clone)
    }

    fn set_root_opacity(&mut self, root: RootId, opacity: f64) -> ControlResult {
        self.ensure_root(root)?;
        self.journal.push(RuntimeOp::SetRootOpacity(opacity));
        self.root_opacity = opacity;
        Ok(())
    }

    fn force_running_style(&mut self, root: RootId) -> ControlResult {
        self.ensure_root(root)?;
        self.journal.push(RuntimeOp::ForceRunningStyle);
        self.running_style_forced = true;
        Ok(())
    }

    fn clear_play_state_hints(&mut self, root: RootId) -> ControlResult {
        self.ensure_root(root)?;
        self.journal.push(RuntimeOp::ClearPlayStateHints);
        self.hint_clear_count += 1;
        Ok(())
    }
}

/// Naive document-order tag scan.
///
/// The headless harness only needs tag names in order; it deliberately does
/// no markup validation (malformed content yields whatever tags it can
/// read, matching a lenient renderer).
fn scan_tags(markup: &str) -> Vec<String> {
    let mut tags = Vec::new();
    for (index, _) in markup.match_indices('<') {
        let rest = &markup[index + 1..];
        if rest.starts_with('/') || rest.starts_with('!') || rest.starts_with('?') {
            continue;
        }
        let tag: String = rest
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric())
            .collect();
        if !tag.is_empty() {
            tags.push(tag);
        }
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::{DocumentRuntime, HeadlessRuntime, scan_tags};
    use crate::runtime::{CapabilityProfile, ControlError};

    const LOOPING_CIRCLE: &str = r#"<svg viewBox="0 0 200 200">
        <circle cx="100" cy="100" r="30">
            <animate attributeName="r" values="30;60;30" dur="3s" repeatCount="indefinite"/>
        </circle>
    </svg>"#;

    #[test]
    fn scan_reads_tags_in_document_order() {
        let tags = scan_tags(LOOPING_CIRCLE);
        assert_eq!(tags, vec!["svg", "circle", "animate"]);
    }

    #[test]
    fn scan_skips_closing_tags_and_comments() {
        let tags = scan_tags("<svg><!-- note --><g></g></svg>");
        assert_eq!(tags, vec!["svg", "g"]);
    }

    #[test]
    fn handles_from_a_previous_mount_are_stale() {
        let mut runtime = HeadlessRuntime::new();
        let first_root = runtime.mount(LOOPING_CIRCLE);
        let node = runtime.descendants(first_root)[2].node;

        let second_root = runtime.mount(LOOPING_CIRCLE);
        assert_ne!(first_root, second_root);
        assert_eq!(runtime.begin_node(node), Err(ControlError::StaleHandle));
        assert_eq!(runtime.pause_all(first_root), Err(ControlError::StaleHandle));
        assert!(runtime.pause_all(second_root).is_ok());
    }

    #[test]
    fn capability_gating_reports_unsupported() {
        let mut runtime = HeadlessRuntime::with_capabilities(CapabilityProfile::none());
        let root = runtime.mount(LOOPING_CIRCLE);
        assert_eq!(runtime.pause_all(root), Err(ControlError::Unsupported));
        assert_eq!(runtime.resume_all(root), Err(ControlError::Unsupported));
        assert_eq!(runtime.seek_to_start(root), Err(ControlError::Unsupported));

        // Style hints stay available; they are not timing primitives.
        assert!(runtime.set_root_opacity(root, 0.5).is_ok());
        assert!(runtime.force_running_style(root).is_ok());
    }

    #[test]
    fn begin_rejects_running_animation_and_clone_resets_it() {
        let mut runtime = HeadlessRuntime::new();
        let root = runtime.mount(LOOPING_CIRCLE);
        let node = runtime.descendants(root)[2].node;

        assert_eq!(runtime.begin_node(node), Err(ControlError::InvalidOperation));
        assert!(runtime.end_node(node).is_ok());
        assert!(runtime.begin_node(node).is_ok());

        let clone = runtime.replace_with_clone(node).expect("clone");
        assert_eq!(runtime.is_node_running(node), None);
        assert_eq!(runtime.is_node_running(clone), Some(false));
        assert!(runtime.begin_node(clone).is_ok());
    }
}
