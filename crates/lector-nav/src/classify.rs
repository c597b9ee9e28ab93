//! Capability classifier.
//!
//! Structural facts about a node, combining role-layer hints with tag-based
//! defaults. All predicates are pure functions of current tree and style
//! state.

use lector_dom::{InputType, NodeId, Tag};

use crate::{Reader, VisibilityOptions};

impl Reader<'_> {
    /// Whether the node should be announced as disabled: its own disabled
    /// flag, or a disabled `<fieldset>` ancestor.
    pub fn is_disabled(&self, node: NodeId) -> bool {
        if self.tree.has_attr(node, "disabled") {
            return true;
        }
        self.tree
            .ancestors(node)
            .skip(1)
            .any(|a| self.tree.tag(a) == Some(Tag::Fieldset) && self.tree.has_attr(a, "disabled"))
    }

    /// Whether the node can take focus. Includes nodes with an explicit
    /// `tabindex="-1"`: they are out of the tab order but should still be
    /// focused when the cursor reaches them.
    pub fn is_focusable(&self, node: NodeId) -> bool {
        if !self.tree.is_element(node) {
            return false;
        }
        // An anchor with neither href nor tabindex reports a spurious tab
        // index in some engines; never treat it as focusable.
        if self.tree.tag(node) == Some(Tag::A)
            && !self.tree.has_attr(node, "href")
            && !self.tree.has_attr(node, "tabindex")
        {
            return false;
        }

        let explicit = self.tree.attr(node, "tabindex");
        let tab_index = explicit
            .and_then(|v| v.trim().parse::<i32>().ok())
            .unwrap_or_else(|| self.default_tab_index(node));
        if tab_index >= 0 {
            return true;
        }
        explicit == Some("-1")
    }

    fn default_tab_index(&self, node: NodeId) -> i32 {
        match self.tree.tag(node) {
            Some(Tag::Button | Tag::Select | Tag::Textarea) => 0,
            Some(Tag::Input) => {
                if self.input_type(node) == Some(InputType::Hidden) {
                    -1
                } else {
                    0
                }
            }
            Some(Tag::A) => {
                if self.tree.has_attr(node, "href") {
                    0
                } else {
                    -1
                }
            }
            _ => -1,
        }
    }

    /// Whether the node is a control. Controls are not necessarily
    /// leaf-level; composite controls may manage focusable children.
    pub fn is_control(&self, node: NodeId) -> bool {
        if self.roles.is_control_widget(self.tree, node) && self.is_focusable(node) {
            return true;
        }
        match self.tree.tag(node) {
            Some(Tag::Button | Tag::Textarea | Tag::Select) => true,
            Some(Tag::Input) => self.input_type(node) != Some(InputType::Hidden),
            _ => self.is_content_editable(node),
        }
    }

    /// A leaf-level control: a control that is not a composite control
    /// managing focus through a focusable descendant. Composite controls
    /// driven purely by active-descendant state are leaves.
    pub fn is_leaf_level_control(&self, node: NodeId) -> bool {
        if !self.is_control(node) {
            return false;
        }
        !(self.roles.is_composite_control(self.tree, node)
            && self.find_focusable_descendant(node).is_some())
    }

    /// First focusable descendant, if any.
    pub fn find_focusable_descendant(&self, node: NodeId) -> Option<NodeId> {
        self.find_node(node, |n| self.is_focusable(n))
    }

    /// Number of focusable descendants, not counting the node itself.
    pub fn count_focusable_descendants(&self, node: NodeId) -> usize {
        self.count_nodes(node, |n| self.is_focusable(n))
    }

    /// Whether the node is a unit of navigation that the cursor lands on
    /// whole, rather than descending into it.
    pub fn is_leaf_node(&self, node: NodeId) -> bool {
        if !self.tree.is_element(node) {
            return self.tree.first_child(node).is_none();
        }

        if !self.is_visible_with(
            node,
            VisibilityOptions {
                check_ancestors: false,
                check_descendants: true,
            },
        ) {
            return true;
        }
        if self.roles.is_hidden(self.tree, node) {
            return true;
        }
        if self.roles.is_leaf_element(self.tree, node) {
            return true;
        }
        if let Some(tag) = self.tree.tag(node) {
            if tag.is_embedded_object() {
                return true;
            }
            // A hyperlink is atomic unless it wraps a heading.
            if tag == Tag::A && self.tree.has_attr(node, "href") {
                return self.find_node(node, |n| self.is_heading(n)).is_none();
            }
        }
        if self.is_leaf_level_control(node) {
            return true;
        }
        self.tree.first_child(node).is_none()
    }

    /// Whether the node is an HTML5 sectioning/semantic element.
    pub fn is_semantic_elt(&self, node: NodeId) -> bool {
        self.tree.tag(node).is_some_and(Tag::is_semantic)
    }

    /// Heading by tag or by declared role.
    pub fn is_heading(&self, node: NodeId) -> bool {
        self.tree.tag(node).is_some_and(Tag::is_heading)
            || self.roles.role(self.tree, node) == Some(lector_aria::AriaRole::Heading)
    }

    /// Whether the node is an `<input>` holding editable text.
    pub fn is_input_type_text(&self, node: NodeId) -> bool {
        self.tree.tag(node) == Some(Tag::Input)
            && self
                .input_type(node)
                .is_some_and(InputType::is_editable_text)
    }

    pub(crate) fn input_type(&self, node: NodeId) -> Option<InputType> {
        self.tree
            .get(node)
            .and_then(|n| n.as_element())
            .filter(|e| e.tag == Tag::Input)
            .map(|e| e.input_type())
    }

    /// Whether the node is editable content.
    pub fn is_content_editable(&self, node: NodeId) -> bool {
        match self.tree.attr(node, "contenteditable") {
            Some("false") => false,
            Some(_) => true,
            None => false,
        }
    }

    /// Whether the node is part of a math expression: a math tag, a
    /// math-role node, or a rendered-math span.
    pub fn is_math(&self, node: NodeId) -> bool {
        self.tree.tag(node) == Some(Tag::Math)
            || self.roles.is_math(self.tree, node)
            || self.is_rendered_math(node)
    }

    /// Rendered math: a span classed "math" inside a span classed with the
    /// renderer marker.
    fn is_rendered_math(&self, node: NodeId) -> bool {
        let span_with_class = |n: NodeId, class: &str| {
            self.tree.tag(n) == Some(Tag::Span)
                && self.tree.attr(n, "class").is_some_and(|c| {
                    c.split_whitespace().any(|x| x.eq_ignore_ascii_case(class))
                })
        };
        span_with_class(node, "math")
            && self
                .tree
                .ancestors(node)
                .any(|a| span_with_class(a, "mathjax"))
    }

    /// Nearest enclosing math node, if the node is inside an expression.
    pub fn containing_math(&self, node: NodeId) -> Option<NodeId> {
        self.tree.ancestors(node).find(|&a| self.is_math(a))
    }

    /// Given a node inside a composite control, the surrounding control.
    pub fn surrounding_control(&self, node: NodeId) -> Option<NodeId> {
        if self.is_control(node) || !self.tree.has_attr(node, "role") {
            return None;
        }
        self.tree
            .ancestors(node)
            .skip(1)
            .find(|&a| self.roles.is_composite_control(self.tree, a))
    }

    fn is_native_control_tag(&self, node: NodeId) -> bool {
        matches!(
            self.tree.tag(node),
            Some(Tag::Button | Tag::Input | Tag::Select | Tag::Textarea)
        )
    }

    /// Whether the node carries content worth landing the cursor on.
    ///
    /// Controls always count, even empty ones. Text covered elsewhere does
    /// not: label text is spoken with its associated control, legend text
    /// with its fieldset.
    pub fn has_content(&self, node: NodeId) -> bool {
        if self.tree.is_comment(node) {
            return false;
        }
        for tag in [
            Tag::Head,
            Tag::Script,
            Tag::Noscript,
            Tag::Noembed,
            Tag::Style,
        ] {
            if self.is_descendant_of_tag(node, tag) {
                return false;
            }
        }
        if !self.is_visible(node) {
            return false;
        }
        if self.roles.is_hidden(self.tree, node) {
            return false;
        }
        if self.is_control(node) {
            return true;
        }
        // Media widgets always count so their controls stay reachable.
        if self.is_descendant_of_tag(node, Tag::Video)
            || self.is_descendant_of_tag(node, Tag::Audio)
        {
            return true;
        }
        if self.tree.tag(node) == Some(Tag::Iframe) {
            return self
                .tree
                .attr(node, "src")
                .is_some_and(|src| !src.is_empty() && !src.starts_with("javascript:"));
        }

        if let Some(label) = self
            .tree
            .ancestors(node)
            .skip(1)
            .find(|&a| self.tree.tag(a) == Some(Tag::Label))
        {
            let embedded = self.find_node(label, |n| self.is_native_control_tag(n));
            if let Some(for_id) = self.tree.attr(label, "for") {
                let target = self.tree.element_by_id(for_id);
                if target.is_some_and(|t| self.is_control(t)) && embedded.is_none() {
                    return false;
                }
            } else if embedded.is_some() {
                return false;
            }
        }

        if let Some(legend) = self
            .tree
            .ancestors(node)
            .skip(1)
            .find(|&a| self.tree.tag(a) == Some(Tag::Legend))
        {
            let fieldset = self
                .tree
                .ancestors(legend)
                .skip(1)
                .find(|&a| self.tree.tag(a) == Some(Tag::Fieldset));
            if let Some(fieldset) = fieldset {
                if self
                    .find_node(fieldset, |n| self.is_native_control_tag(n))
                    .is_none()
                {
                    return false;
                }
            }
        }

        if self.tree.tag(node) == Some(Tag::A)
            && self.tree.attr(node, "href").is_some_and(|h| !h.is_empty())
        {
            return true;
        }
        if self.tree.tag(node) == Some(Tag::Table) {
            return true;
        }

        let text = format!("{} {}", self.value(node), self.name(node));
        if text.trim().is_empty() && self.state_msgs(node, true).is_empty() {
            return false;
        }
        true
    }
}
