use easel::video::guard::Bindings;
use inlinable_string::InlinableString;
use smallvec::SmallVec;

use crate::element::Element;
use crate::NodeId;

use super::transform::Transform;

/// `Node` is an entity of the scene graph. It owns a local `Transform`, the `Element`
/// drawn at its place, and its children.
///
/// `NodeId` are used to record the tree relationships. The parent link is only used
/// when composing transforms upwards, it never owns anything.
#[derive(Debug)]
pub struct Node {
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: SmallVec<[NodeId; 4]>,

    pub name: InlinableString,
    pub transform: Transform,
    /// The texture and shader bound while drawing this node and its subtree. Empty
    /// bindings are inherited from the parent.
    pub bindings: Bindings,
    pub element: Element,
}

impl Node {
    pub(crate) fn new(parent: Option<NodeId>, element: Element) -> Self {
        Node {
            parent,
            children: SmallVec::new(),
            name: InlinableString::default(),
            transform: Transform::default(),
            bindings: Bindings::default(),
            element,
        }
    }

    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Gets the children in insertion order.
    #[inline]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}
