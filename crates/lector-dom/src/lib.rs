//! Lector DOM — arena document tree.
//!
//! Nodes are addressed by stable `NodeId` handles into an arena. Parent and
//! sibling relations are ids, never owned references, so the host can mutate
//! the tree out of band without invalidating handles held by callers. No
//! query result is cached; every accessor re-reads the current links.

mod node;
mod tag;
mod tree;

pub use node::{Attribute, ElementData, InputType, Node, NodeData};
pub use tag::Tag;
pub use tree::{Ancestors, Children, DomTree};

/// Node identifier (index into the arena).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Sentinel for "no node".
    pub(crate) const NONE: NodeId = NodeId(u32::MAX);

    /// The document root.
    pub const ROOT: NodeId = NodeId(0);

    pub(crate) fn valid(self) -> Option<NodeId> {
        (self != Self::NONE).then_some(self)
    }
}
