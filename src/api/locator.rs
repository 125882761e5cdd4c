use smallvec::SmallVec;

use crate::runtime::{AnimationElementKind, DocumentRuntime, NodeId, RootId};

/// One discovered SMIL animation element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocatedAnimation {
    pub node: NodeId,
    pub kind: AnimationElementKind,
}

/// Animation handle set for one mount, in document order.
pub type AnimationNodes = SmallVec<[LocatedAnimation; 8]>;

/// Scans the mounted subtree for `animate`, `animateTransform` and
/// `animateMotion` elements.
///
/// Returns an empty set when the root is absent or owns no animation
/// elements. The result must be re-acquired after every markup
/// replacement because node identities change with the subtree; nothing
/// here is cached.
#[must_use]
pub fn locate_animations<R: DocumentRuntime>(runtime: &R, root: Option<RootId>) -> AnimationNodes {
    let Some(root) = root else {
        return AnimationNodes::new();
    };

    runtime
        .descendants(root)
        .into_iter()
        .filter_map(|element| {
            AnimationElementKind::from_tag(&element.tag).map(|kind| LocatedAnimation {
                node: element.node,
                kind,
            })
        })
        .collect()
}
