//! Accessible-name resolution.
//!
//! Precedence: referenced labels, then author-supplied attributes, then
//! native labeling mechanisms, then text content. Cross-references can form
//! cycles (a label naming an element inside itself), so resolution threads a
//! visited set and a re-entered node contributes an empty string.

use std::collections::HashSet;

use lector_dom::{InputType, NodeId, Tag};

use crate::{collapse_whitespace, Msg, Reader, VisibilityOptions};

impl Reader<'_> {
    /// Accessible name of the node.
    pub fn name(&self, node: NodeId) -> String {
        self.name_with(node, true, true)
    }

    /// Accessible name with explicit recursion and control-inclusion
    /// behavior. `recursive = false` stops before descending into children;
    /// `include_controls = false` skips embedded controls when flattening
    /// child text, for use when naming the control's own label.
    pub fn name_with(&self, node: NodeId, recursive: bool, include_controls: bool) -> String {
        let mut resolving = HashSet::new();
        collapse_whitespace(&self.resolve_name(node, recursive, include_controls, &mut resolving))
    }

    /// Name of the node built only from its children.
    pub fn name_from_children(&self, node: NodeId, include_controls: bool) -> String {
        let mut resolving = HashSet::new();
        collapse_whitespace(&self.children_name(node, include_controls, &mut resolving))
    }

    fn resolve_name(
        &self,
        node: NodeId,
        recursive: bool,
        include_controls: bool,
        resolving: &mut HashSet<NodeId>,
    ) -> String {
        if !resolving.insert(node) {
            // Already on the resolution path: break the cycle.
            return String::new();
        }
        let result = self.resolve_name_steps(node, recursive, include_controls, resolving);
        resolving.remove(&node);
        result
    }

    fn resolve_name_steps(
        &self,
        node: NodeId,
        recursive: bool,
        include_controls: bool,
        resolving: &mut HashSet<NodeId>,
    ) -> String {
        if let Some(text) = self.tree.text(node) {
            return text.to_string();
        }
        if !self.tree.is_element(node) {
            return String::new();
        }

        let mut label = self.base_label(node, recursive, include_controls, resolving);

        if label.is_empty() && self.is_control(node) {
            label = self.nearest_ancestor_label(node, resolving);
        }
        if label.is_empty() && self.tree.tag(node) == Some(Tag::Input) {
            label = self.input_name(node);
        }

        if self.is_input_type_text(node) {
            if let Some(hint) = self.tree.attr(node, "placeholder") {
                let value = self.tree.attr(node, "value").unwrap_or("");
                return if !label.is_empty() {
                    if !value.is_empty() {
                        label
                    } else {
                        self.msgs.format(Msg::WithHint {
                            label,
                            hint: hint.to_string(),
                        })
                    }
                } else {
                    hint.to_string()
                };
            }
        }

        if !label.is_empty() {
            return label;
        }
        if !recursive {
            return String::new();
        }
        // A composite control's children are its options, not its name.
        if self.roles.is_composite_control(self.tree, node) {
            return String::new();
        }

        let named_by_children = matches!(self.tree.tag(node), Some(Tag::A | Tag::Button))
            || self.roles.is_control_widget(self.tree, node)
            || !self.is_leaf_node(node);
        if named_by_children {
            return self.children_name(node, include_controls, resolving);
        }
        String::new()
    }

    /// Label from explicit attributes and native label elements, before any
    /// fallback to child text.
    fn base_label(
        &self,
        node: NodeId,
        recursive: bool,
        include_controls: bool,
        resolving: &mut HashSet<NodeId>,
    ) -> String {
        let mut label = String::new();

        if let Some(ids) = self.tree.attr(node, "aria-labelledby") {
            for id in ids.split_whitespace() {
                if let Some(target) = self.tree.element_by_id(id) {
                    label.push(' ');
                    label.push_str(&self.resolve_name(target, true, include_controls, resolving));
                }
            }
        } else if let Some(aria_label) = self.tree.attr(node, "aria-label") {
            label = aria_label.to_string();
        } else if self.tree.tag(node) == Some(Tag::Img) {
            label = self.image_title(node);
        } else if let Some(title) = self.tree.attr(node, "title") {
            label = title.to_string();
        } else if self.tree.tag(node) == Some(Tag::Fieldset) {
            // A fieldset is named by its legends.
            let mut legend = self.find_node(node, |n| self.tree.tag(n) == Some(Tag::Legend));
            let mut parts = String::new();
            while let Some(l) = legend {
                parts.push(' ');
                parts.push_str(&self.resolve_name(l, true, include_controls, resolving));
                legend = self.directed_find_next_node(
                    l,
                    node,
                    false,
                    &|n| self.tree.tag(n) == Some(Tag::Legend),
                    false,
                    false,
                );
            }
            label = parts;
        }

        if label.trim().is_empty() {
            if let Some(id) = self.tree.attr(node, "id") {
                if let Some(l) = self.label_for(id) {
                    label = self.resolve_name(l, recursive, include_controls, resolving);
                }
            }
        }
        collapse_whitespace(&label)
    }

    /// Label element targeting the given id, if any.
    fn label_for(&self, id: &str) -> Option<NodeId> {
        self.tree.node_ids().find(|&n| {
            self.tree.tag(n) == Some(Tag::Label)
                && self.tree.attr(n, "for") == Some(id)
                && self.tree.is_attached(n)
        })
    }

    /// Label element enclosing the control, when it labels implicitly.
    fn nearest_ancestor_label(&self, node: NodeId, resolving: &mut HashSet<NodeId>) -> String {
        let Some(label) = self
            .tree
            .ancestors(node)
            .find(|&a| self.tree.tag(a) == Some(Tag::Label))
        else {
            return String::new();
        };
        // A "for" attribute makes the association explicit; an enclosing
        // label pointing elsewhere does not name this control.
        if self.tree.has_attr(label, "for") {
            return String::new();
        }
        self.resolve_name(label, true, false, resolving)
    }

    /// Name of an `<input>` from its type-specific defaults.
    fn input_name(&self, node: NodeId) -> String {
        let value = || self.tree.attr(node, "value").map(str::to_string);
        match self.input_type(node) {
            Some(InputType::Image) => self.image_title(node),
            Some(InputType::Submit) => {
                value().unwrap_or_else(|| self.msgs.format(Msg::SubmitDefault))
            }
            Some(InputType::Reset) => {
                value().unwrap_or_else(|| self.msgs.format(Msg::ResetDefault))
            }
            Some(InputType::Button) => value().unwrap_or_default(),
            _ => String::new(),
        }
    }

    /// Title of an image: alt text, then title, then a name derived from a
    /// short filename in the source URL.
    pub(crate) fn image_title(&self, node: NodeId) -> String {
        if let Some(alt) = self.tree.attr(node, "alt") {
            return alt.to_string();
        }
        if let Some(title) = self.tree.attr(node, "title") {
            return title.to_string();
        }
        if let Some(src) = self.tree.attr(node, "src") {
            if !src.starts_with("data") {
                let start = src.rfind('/').map_or(0, |i| i + 1);
                if let Some(dot) = src.rfind('.') {
                    if dot > start {
                        let filename = &src[start..dot];
                        // Long filenames are auto-generated noise, not names.
                        if (1..=16).contains(&filename.len()) {
                            return self.msgs.format(Msg::NamedImage {
                                filename: filename.to_string(),
                            });
                        }
                    }
                }
            }
        }
        self.msgs.format(Msg::Image)
    }

    /// Flattened name from visible children, joined without separators
    /// between adjacent spans and with spaces elsewhere.
    fn children_name(
        &self,
        node: NodeId,
        include_controls: bool,
        resolving: &mut HashSet<NodeId>,
    ) -> String {
        let children: Vec<NodeId> = self.tree.children(node).collect();
        let mut name = String::new();
        for (i, &child) in children.iter().enumerate() {
            let prev_child = if i > 0 { children[i - 1] } else { child };
            if !include_controls && self.is_control(child) {
                continue;
            }
            let visible = self.is_visible_with(
                child,
                VisibilityOptions {
                    check_ancestors: false,
                    check_descendants: true,
                },
            );
            if visible && !self.roles.is_hidden(self.tree, child) {
                let is_span = |n: NodeId| self.tree.tag(n) == Some(Tag::Span);
                if !(is_span(prev_child) || is_span(child) || is_span(node)) {
                    name.push(' ');
                }
                name.push_str(&self.resolve_name(child, true, include_controls, resolving));
            }
        }
        name
    }

    /// Infer a label for a bare control from neighboring leaf content.
    ///
    /// Only runs when the author has not opted out with an explicitly empty
    /// aria label. Candidates are the nearest content-bearing non-control
    /// leaves on either side; the one separated from the control by fewer
    /// tree levels wins.
    pub fn control_label_heuristics(&self, node: NodeId) -> String {
        let opted_out = |attr: &str| self.tree.attr(node, attr) == Some("");
        if opted_out("aria-label") || opted_out("aria-title") {
            return String::new();
        }

        let neighbor = |reverse: bool| {
            let mut cur = self.directed_next_leaf_node(node, reverse);
            while let Some(n) = cur {
                if self.has_content(n) && !self.is_control(n) {
                    return Some(n);
                }
                cur = self.directed_next_leaf_node(n, reverse);
            }
            None
        };
        let prev = neighbor(true);
        let next = neighbor(false);

        let guess = match (prev, next) {
            (Some(p), Some(n)) => {
                let climb = |candidate: NodeId| {
                    let mut steps = 0usize;
                    let mut parent = self.tree.parent(node);
                    while let Some(a) = parent {
                        if self.is_descendant_of_node(candidate, a) {
                            break;
                        }
                        steps += 1;
                        parent = self.tree.parent(a);
                    }
                    steps
                };
                if climb(n) < climb(p) { n } else { p }
            }
            (Some(p), None) => p,
            (None, Some(n)) => n,
            (None, None) => return String::new(),
        };
        collapse_whitespace(&format!("{} {}", self.value(guess), self.name(guess)))
    }
}
