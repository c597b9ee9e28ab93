//! Arena document tree.

use tracing::trace;

use crate::{ElementData, Node, NodeData, NodeId, Tag};

/// Arena-based document tree. Index 0 is the synthetic document root.
#[derive(Debug)]
pub struct DomTree {
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a tree containing only the document root.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(NodeData::Document)],
        }
    }

    /// The document root.
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by id.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0 as usize)
    }

    /// Get a mutable node by id.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0 as usize)
    }

    /// Number of nodes in the arena, including detached ones.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Allocate a new element node, initially detached.
    pub fn create_element(&mut self, tag: Tag) -> NodeId {
        self.push(Node::new(NodeData::Element(ElementData::new(tag))))
    }

    /// Allocate a new text node, initially detached.
    pub fn create_text(&mut self, content: &str) -> NodeId {
        self.push(Node::new(NodeData::Text(content.to_string())))
    }

    /// Allocate a new comment node, initially detached.
    pub fn create_comment(&mut self, content: &str) -> NodeId {
        self.push(Node::new(NodeData::Comment(content.to_string())))
    }

    /// Append `child` as the last child of `parent`. Detaches the child from
    /// any previous position first. Invalid ids are ignored.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if parent == child || self.get(parent).is_none() || self.get(child).is_none() {
            return;
        }
        self.detach(child);
        let old_last = self.nodes[parent.0 as usize].last_child;
        {
            let node = &mut self.nodes[child.0 as usize];
            node.parent = parent;
            node.prev_sibling = old_last;
        }
        if let Some(last) = old_last.valid() {
            self.nodes[last.0 as usize].next_sibling = child;
        } else {
            self.nodes[parent.0 as usize].first_child = child;
        }
        self.nodes[parent.0 as usize].last_child = child;
    }

    /// Unlink a node from its parent and siblings. The node and its subtree
    /// stay in the arena but are no longer attached to the document.
    pub fn detach(&mut self, id: NodeId) {
        let Some(node) = self.get(id) else { return };
        let (parent, prev, next) = (node.parent, node.prev_sibling, node.next_sibling);
        if parent == NodeId::NONE {
            return;
        }
        trace!(node = id.0, "detaching node");
        if let Some(prev) = prev.valid() {
            self.nodes[prev.0 as usize].next_sibling = next;
        } else if let Some(parent) = parent.valid() {
            self.nodes[parent.0 as usize].first_child = next;
        }
        if let Some(next) = next.valid() {
            self.nodes[next.0 as usize].prev_sibling = prev;
        } else if let Some(parent) = parent.valid() {
            self.nodes[parent.0 as usize].last_child = prev;
        }
        let node = &mut self.nodes[id.0 as usize];
        node.parent = NodeId::NONE;
        node.prev_sibling = NodeId::NONE;
        node.next_sibling = NodeId::NONE;
    }

    /// Parent of a node, if attached.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent.valid())
    }

    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.first_child.valid())
    }

    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.last_child.valid())
    }

    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.next_sibling.valid())
    }

    pub fn prev_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.prev_sibling.valid())
    }

    /// Iterate the children of a node in document order.
    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            tree: self,
            next: self.first_child(id),
        }
    }

    /// Iterate from a node up through its parents, starting with the node
    /// itself.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: self.get(id).map(|_| id),
        }
    }

    /// Whether the node is reachable from the document root.
    pub fn is_attached(&self, id: NodeId) -> bool {
        self.ancestors(id).any(|a| a == self.root())
    }

    /// Tag of an element node.
    pub fn tag(&self, id: NodeId) -> Option<Tag> {
        self.get(id).and_then(|n| n.as_element()).map(|e| e.tag)
    }

    /// Attribute value on an element node.
    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.get(id).and_then(|n| n.as_element()).and_then(|e| e.attr(name))
    }

    /// Whether the attribute is present on an element node.
    pub fn has_attr(&self, id: NodeId, name: &str) -> bool {
        self.get(id)
            .and_then(|n| n.as_element())
            .is_some_and(|e| e.has_attr(name))
    }

    /// Set an attribute on an element node. Ignored for non-elements.
    pub fn set_attr(&mut self, id: NodeId, name: &str, value: &str) {
        if let Some(elt) = self.get_mut(id).and_then(|n| n.as_element_mut()) {
            elt.set_attr(name, value);
        }
    }

    /// Remove an attribute from an element node. Ignored for non-elements.
    pub fn remove_attr(&mut self, id: NodeId, name: &str) {
        if let Some(elt) = self.get_mut(id).and_then(|n| n.as_element_mut()) {
            elt.remove_attr(name);
        }
    }

    /// Literal content of a text node.
    pub fn text(&self, id: NodeId) -> Option<&str> {
        self.get(id).and_then(|n| n.as_text())
    }

    pub fn is_element(&self, id: NodeId) -> bool {
        self.get(id).is_some_and(|n| n.is_element())
    }

    pub fn is_text(&self, id: NodeId) -> bool {
        self.get(id).is_some_and(|n| n.is_text())
    }

    pub fn is_comment(&self, id: NodeId) -> bool {
        self.get(id)
            .is_some_and(|n| matches!(n.data, NodeData::Comment(_)))
    }

    /// Concatenated text of all descendant text nodes, in document order.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        if let Some(text) = self.text(id) {
            out.push_str(text);
        }
        let mut child = self.first_child(id);
        while let Some(c) = child {
            self.collect_text(c, out);
            child = self.next_sibling(c);
        }
    }

    /// Iterate the ids of every node in the arena, attached or not.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(|i| NodeId(i as u32))
    }

    /// Find the attached element with the given `id` attribute. Scans the
    /// live tree on every call; results are never cached.
    pub fn element_by_id(&self, target: &str) -> Option<NodeId> {
        for (idx, node) in self.nodes.iter().enumerate() {
            if let Some(elt) = node.as_element() {
                if elt.id() == Some(target) {
                    let id = NodeId(idx as u32);
                    if self.is_attached(id) {
                        return Some(id);
                    }
                }
            }
        }
        None
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the children of a node.
pub struct Children<'a> {
    tree: &'a DomTree,
    next: Option<NodeId>,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.tree.next_sibling(current);
        Some(current)
    }
}

/// Iterator from a node up to the root, starting with the node itself.
pub struct Ancestors<'a> {
    tree: &'a DomTree,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.tree.parent(current);
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_links_siblings() {
        let mut tree = DomTree::new();
        let div = tree.create_element(Tag::Div);
        let a = tree.create_element(Tag::P);
        let b = tree.create_element(Tag::P);
        tree.append_child(tree.root(), div);
        tree.append_child(div, a);
        tree.append_child(div, b);

        assert_eq!(tree.first_child(div), Some(a));
        assert_eq!(tree.last_child(div), Some(b));
        assert_eq!(tree.next_sibling(a), Some(b));
        assert_eq!(tree.prev_sibling(b), Some(a));
        assert_eq!(tree.parent(a), Some(div));
    }

    #[test]
    fn detach_unlinks_but_keeps_arena_slot() {
        let mut tree = DomTree::new();
        let div = tree.create_element(Tag::Div);
        let a = tree.create_element(Tag::P);
        let b = tree.create_element(Tag::P);
        let c = tree.create_element(Tag::P);
        tree.append_child(tree.root(), div);
        tree.append_child(div, a);
        tree.append_child(div, b);
        tree.append_child(div, c);

        tree.detach(b);
        assert_eq!(tree.next_sibling(a), Some(c));
        assert_eq!(tree.prev_sibling(c), Some(a));
        assert!(!tree.is_attached(b));
        assert!(tree.get(b).is_some());
    }

    #[test]
    fn element_by_id_skips_detached() {
        let mut tree = DomTree::new();
        let div = tree.create_element(Tag::Div);
        tree.set_attr(div, "id", "target");
        assert_eq!(tree.element_by_id("target"), None);
        tree.append_child(tree.root(), div);
        assert_eq!(tree.element_by_id("target"), Some(div));
    }

    #[test]
    fn text_content_concatenates_descendants() {
        let mut tree = DomTree::new();
        let p = tree.create_element(Tag::P);
        let em = tree.create_element(Tag::Span);
        let t1 = tree.create_text("Hello ");
        let t2 = tree.create_text("world");
        tree.append_child(tree.root(), p);
        tree.append_child(p, t1);
        tree.append_child(p, em);
        tree.append_child(em, t2);
        assert_eq!(tree.text_content(p), "Hello world");
    }
}
