//! Link utilities.

use lector_aria::AriaRole;
use lector_dom::NodeId;

use crate::{Msg, Reader};

impl Reader<'_> {
    /// Whether the node links to a fragment of the current document.
    pub fn is_internal_link(&self, node: NodeId) -> bool {
        if !self.tree.is_element(node) {
            return false;
        }
        let Some(href) = self.tree.attr(node, "href") else {
            return false;
        };
        let Some(hash) = href.find('#') else {
            return false;
        };
        let path = &href[..hash];
        path.is_empty() || path == self.document_path
    }

    /// Announceable destination of a link: the href, an internal-link
    /// marker, or an unknown-target marker for script-driven link roles.
    pub fn link_url(&self, node: NodeId) -> String {
        if let Some(href) = self.tree.attr(node, "href") {
            return if self.is_internal_link(node) {
                self.msgs.format(Msg::InternalLink)
            } else {
                href.to_string()
            };
        }
        if self.roles.role(self.tree, node) == Some(AriaRole::Link) {
            return self.msgs.format(Msg::UnknownLink);
        }
        String::new()
    }
}
