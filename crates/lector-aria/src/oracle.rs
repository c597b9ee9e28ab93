//! Role oracle boundary.

use lector_dom::{DomTree, NodeId};

use crate::{AriaRole, AriaStateMsg, TriState};

/// Read-only oracle for role-layer facts about a node. The navigation core
/// treats these answers as higher precedence than tag-based defaults.
///
/// Most predicates have default implementations in terms of [`Self::role`];
/// implementations only need to override the relation- and attribute-backed
/// queries.
pub trait RoleOracle {
    /// Declared role of the node, if any.
    fn role(&self, tree: &DomTree, node: NodeId) -> Option<AriaRole>;

    /// Whether the node or an ancestor is explicitly forced visible,
    /// overriding CSS invisibility.
    fn is_forced_visible(&self, tree: &DomTree, node: NodeId) -> bool;

    /// Whether the node is hidden from assistive technology.
    fn is_hidden(&self, tree: &DomTree, node: NodeId) -> bool;

    /// The declared active descendant of a composite control.
    fn active_descendant(&self, tree: &DomTree, node: NodeId) -> Option<NodeId>;

    /// State classifications for the node. `primary` marks the node the
    /// caller is focused on, where extra detail such as set position is
    /// wanted; for ancestors the answer stays brief.
    fn state_msgs(&self, tree: &DomTree, node: NodeId, primary: bool) -> Vec<AriaStateMsg>;

    /// Explicitly declared set size for a set item, if any.
    fn declared_set_size(&self, tree: &DomTree, node: NodeId) -> Option<u32>;

    fn is_control_widget(&self, tree: &DomTree, node: NodeId) -> bool {
        self.role(tree, node).is_some_and(AriaRole::is_widget)
    }

    fn is_composite_control(&self, tree: &DomTree, node: NodeId) -> bool {
        self.role(tree, node).is_some_and(AriaRole::is_composite)
    }

    fn is_landmark(&self, tree: &DomTree, node: NodeId) -> bool {
        self.role(tree, node).is_some_and(AriaRole::is_landmark)
    }

    fn is_leaf_element(&self, tree: &DomTree, node: NodeId) -> bool {
        self.role(tree, node).is_some_and(AriaRole::is_leaf)
    }

    fn is_grid(&self, tree: &DomTree, node: NodeId) -> bool {
        self.role(tree, node).is_some_and(AriaRole::is_grid)
    }

    fn is_math(&self, tree: &DomTree, node: NodeId) -> bool {
        self.role(tree, node) == Some(AriaRole::Math)
    }
}

/// Default oracle derived from `role` and `aria-*` attributes on the live
/// tree. Stateless: every answer re-reads current attributes.
#[derive(Debug, Default, Clone, Copy)]
pub struct AttrRoleOracle;

impl AttrRoleOracle {
    pub fn new() -> Self {
        Self
    }

    /// Nearest ancestor-or-self with an explicit `aria-hidden` attribute.
    fn nearest_hidden_attr<'t>(&self, tree: &'t DomTree, node: NodeId) -> Option<&'t str> {
        tree.ancestors(node)
            .find_map(|a| tree.attr(a, "aria-hidden"))
    }
}

impl RoleOracle for AttrRoleOracle {
    fn role(&self, tree: &DomTree, node: NodeId) -> Option<AriaRole> {
        tree.attr(node, "role").and_then(AriaRole::parse)
    }

    fn is_forced_visible(&self, tree: &DomTree, node: NodeId) -> bool {
        tree.ancestors(node)
            .any(|a| tree.attr(a, "aria-hidden") == Some("false"))
    }

    fn is_hidden(&self, tree: &DomTree, node: NodeId) -> bool {
        self.nearest_hidden_attr(tree, node) == Some("true")
    }

    fn active_descendant(&self, tree: &DomTree, node: NodeId) -> Option<NodeId> {
        let id = tree.attr(node, "aria-activedescendant")?;
        let target = tree.element_by_id(id)?;
        (target != node).then_some(target)
    }

    fn state_msgs(&self, tree: &DomTree, node: NodeId, primary: bool) -> Vec<AriaStateMsg> {
        let mut msgs = Vec::new();
        if let Some(v) = tree.attr(node, "aria-checked").and_then(TriState::parse) {
            msgs.push(AriaStateMsg::Checked(v));
        }
        if let Some(v) = tree.attr(node, "aria-selected") {
            msgs.push(AriaStateMsg::Selected(v == "true"));
        }
        if let Some(v) = tree.attr(node, "aria-expanded") {
            msgs.push(AriaStateMsg::Expanded(v == "true"));
        }
        if let Some(v) = tree.attr(node, "aria-pressed").and_then(TriState::parse) {
            msgs.push(AriaStateMsg::Pressed(v));
        }
        if tree.attr(node, "aria-required") == Some("true") {
            msgs.push(AriaStateMsg::Required);
        }
        if tree.attr(node, "aria-invalid") == Some("true") {
            msgs.push(AriaStateMsg::Invalid);
        }
        if tree.attr(node, "aria-haspopup") == Some("true") {
            msgs.push(AriaStateMsg::HasPopup);
        }
        if primary {
            let declared = |attr: &str| tree.attr(node, attr)?.parse::<u32>().ok();
            if let (Some(index), Some(total)) =
                (declared("aria-posinset"), declared("aria-setsize"))
            {
                msgs.push(AriaStateMsg::SetPosition { index, total });
            }
        }
        msgs
    }

    fn declared_set_size(&self, tree: &DomTree, node: NodeId) -> Option<u32> {
        tree.attr(node, "aria-setsize")?.parse().ok()
    }
}
