//! State and value extraction.
//!
//! Values are the user-editable or selected content of a control; state is
//! the list of announceable conditions (checked, expanded, disabled, list
//! position). Composite controls delegate both to their active descendant.

use lector_dom::{InputType, NodeId, Tag};

use crate::{collapse_whitespace, Msg, Reader};

impl Reader<'_> {
    /// Current value of the node, as announceable text.
    pub fn value(&self, node: NodeId) -> String {
        if let Some(active) = self.roles.active_descendant(self.tree, node) {
            return collapse_whitespace(&format!(
                "{} {}",
                self.value(active),
                self.name(active)
            ));
        }
        match self.tree.tag(node) {
            Some(Tag::Select) => self.select_value(node),
            Some(Tag::Textarea) => self.tree.text_content(node),
            Some(Tag::Input) => self.input_value(node),
            _ => {
                if self.is_content_editable(node) {
                    self.name_from_children(node, true)
                } else {
                    String::new()
                }
            }
        }
    }

    fn select_value(&self, node: NodeId) -> String {
        let options = self.select_options(node);
        let selected: Vec<NodeId> = options
            .iter()
            .copied()
            .filter(|&o| self.tree.has_attr(o, "selected"))
            .collect();
        match selected.as_slice() {
            [] => String::new(),
            [only] => self.option_text(*only),
            [first, .., last] => self.msgs.format(Msg::SelectionRange {
                start: self.option_text(*first),
                end: self.option_text(*last),
            }),
        }
    }

    /// Options of a select, including those nested one level inside
    /// optgroups.
    fn select_options(&self, node: NodeId) -> Vec<NodeId> {
        let mut options = Vec::new();
        for child in self.tree.children(node) {
            match self.tree.tag(child) {
                Some(Tag::OptionElt) => options.push(child),
                Some(Tag::Optgroup) => {
                    options.extend(
                        self.tree
                            .children(child)
                            .filter(|&o| self.tree.tag(o) == Some(Tag::OptionElt)),
                    );
                }
                _ => {}
            }
        }
        options
    }

    fn option_text(&self, option: NodeId) -> String {
        collapse_whitespace(&self.tree.text_content(option))
    }

    fn input_value(&self, node: NodeId) -> String {
        let value = self.tree.attr(node, "value").unwrap_or("");
        match self.input_type(node) {
            Some(
                InputType::Hidden
                | InputType::Image
                | InputType::Submit
                | InputType::Reset
                | InputType::Button
                | InputType::Checkbox
                | InputType::Radio,
            ) => String::new(),
            Some(InputType::Password) => {
                // Never leak the value; speak one token per character.
                let token = self.msgs.format(Msg::PasswordToken);
                value.chars().map(|_| token.as_str()).collect()
            }
            _ => value.to_string(),
        }
    }

    /// Announceable state messages for the node. `primary` marks the node
    /// the cursor landed on, where the role layer may add extra detail such
    /// as set position; ancestors get the briefer form.
    pub fn state_msgs(&self, node: NodeId, primary: bool) -> Vec<Msg> {
        if let Some(active) = self.roles.active_descendant(self.tree, node) {
            return self.state_msgs(active, primary);
        }
        let mut msgs: Vec<Msg> = self
            .roles
            .state_msgs(self.tree, node, primary)
            .into_iter()
            .map(Msg::from)
            .collect();

        match self.tree.tag(node) {
            Some(Tag::Input) => match self.input_type(node) {
                Some(InputType::Checkbox) => {
                    msgs.push(if self.tree.has_attr(node, "checked") {
                        Msg::CheckboxChecked
                    } else {
                        Msg::CheckboxUnchecked
                    });
                }
                Some(InputType::Radio) => {
                    msgs.push(if self.tree.has_attr(node, "checked") {
                        Msg::RadioSelected
                    } else {
                        Msg::RadioUnselected
                    });
                }
                _ => {}
            },
            Some(Tag::Select) => {
                let options = self.select_options(node);
                let selected: Vec<usize> = options
                    .iter()
                    .enumerate()
                    .filter(|&(_, &o)| self.tree.has_attr(o, "selected"))
                    .map(|(i, _)| i)
                    .collect();
                if selected.len() <= 1 {
                    let index = selected.first().map_or_else(
                        || u32::from(!options.is_empty()),
                        |&i| i as u32 + 1,
                    );
                    msgs.push(Msg::ListPosition {
                        index,
                        total: options.len() as u32,
                    });
                } else {
                    msgs.push(Msg::SelectedCount {
                        count: selected.len() as u32,
                    });
                }
            }
            Some(Tag::Ul | Tag::Ol) => {
                msgs.push(Msg::ListItems {
                    count: self.list_length(node),
                });
            }
            _ => {
                if self.tree.attr(node, "role") == Some("list") {
                    msgs.push(Msg::ListItems {
                        count: self.list_length(node),
                    });
                }
            }
        }

        if self.is_disabled(node) {
            msgs.push(Msg::Disabled);
        }
        msgs
    }

    /// Item count of a list. An author-declared set size on any item wins
    /// over counting.
    pub fn list_length(&self, list: NodeId) -> u32 {
        let mut count = 0;
        for child in self.tree.children(list) {
            let is_item = self.tree.tag(child) == Some(Tag::Li)
                || self.tree.attr(child, "role") == Some("listitem");
            if !is_item {
                continue;
            }
            if let Some(declared) = self.roles.declared_set_size(self.tree, child) {
                return declared;
            }
            count += 1;
        }
        count
    }

    /// Rendered state messages joined into one string.
    pub fn state_text(&self, node: NodeId, primary: bool) -> String {
        let parts: Vec<String> = self
            .state_msgs(node, primary)
            .into_iter()
            .map(|m| self.msgs.format(m))
            .collect();
        parts.join(" ")
    }

    /// Full announcement text for a control: value, name, and state of the
    /// control the node belongs to.
    pub fn control_value_and_state_string(&self, node: NodeId) -> String {
        if let Some(control) = self.surrounding_control(node) {
            return collapse_whitespace(&format!(
                "{} {} {}",
                self.value(control),
                self.name(control),
                self.state_text(control, true)
            ));
        }
        collapse_whitespace(&format!(
            "{} {}",
            self.value(node),
            self.state_text(node, true)
        ))
    }
}
