//! Visibility oracle.
//!
//! Perceivability is not view-port intersection: off-screen nodes count as
//! visible because pages use them to talk to assistive technology. What
//! matters is CSS invisibility and the role layer's forced-visible override.
//!
//! `visibility:hidden` differs from `display:none` and `opacity:0` in that a
//! descendant can override it with `visibility:visible`. Ancestor checks
//! therefore run in "strict" mode (display/opacity only) while self checks
//! also consult the visibility property.

use lector_dom::NodeId;
use lector_style::{ComputedStyle, Display, Visibility};

use crate::{Reader, VisibilityOptions};

/// Whether a computed style hides the node. In strict mode only the traits
/// that propagate irrevocably to descendants (display, opacity) count.
pub fn is_invisible_style(style: &ComputedStyle, strict: bool) -> bool {
    if style.display == Display::None {
        return true;
    }
    if style.opacity == 0.0 {
        return true;
    }
    if !strict && matches!(style.visibility, Visibility::Hidden | Visibility::Collapse) {
        return true;
    }
    false
}

impl Reader<'_> {
    /// Whether the node is perceivable, checking ancestors and descendants.
    pub fn is_visible(&self, node: NodeId) -> bool {
        self.is_visible_with(node, VisibilityOptions::default())
    }

    /// Whether the node is perceivable. Callers that already know the
    /// context can skip the ancestor or descendant checks.
    pub fn is_visible_with(&self, node: NodeId, options: VisibilityOptions) -> bool {
        // A forced-visible override from the role layer beats CSS.
        if self.roles.is_forced_visible(self.tree, node) {
            return true;
        }
        if options.check_ancestors && self.has_invisible_ancestor(node) {
            return false;
        }
        self.has_visible_node_subtree(node, options.check_descendants)
    }

    /// Whether any strict-invisible ancestor hides this node irrevocably.
    fn has_invisible_ancestor(&self, node: NodeId) -> bool {
        self.tree
            .ancestors(node)
            .skip(1)
            .filter(|&a| self.tree.is_element(a))
            .any(|a| is_invisible_style(&self.style(a), true))
    }

    /// Whether the subtree rooted at `root` contains a visible node.
    fn has_visible_node_subtree(&self, root: NodeId, recursive: bool) -> bool {
        if !self.tree.is_element(root) {
            // Text and comments take their parent's visibility.
            let Some(parent) = self.tree.parent(root) else {
                return false;
            };
            return !is_invisible_style(&self.style(parent), false);
        }

        let root_style = self.style(root);
        if !is_invisible_style(&root_style, false) {
            return true;
        }
        // Strict invisibility cannot be overridden further down.
        if !recursive || is_invisible_style(&root_style, true) {
            return false;
        }
        self.tree
            .children(root)
            .any(|child| self.has_visible_node_subtree(child, recursive))
    }
}
