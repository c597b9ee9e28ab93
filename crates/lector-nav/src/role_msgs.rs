//! Role announcement.
//!
//! Produces a message identifier for what kind of thing a node is. Declared
//! roles win over native tags; verbosity controls how many structural tags
//! get announced at all.

use lector_aria::AriaRole;
use lector_dom::{InputType, NodeId, Tag};

use crate::Reader;

/// How much structural detail role announcements include.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Announce structural tags (headings, lists, sections) as well as
    /// interactive ones.
    Verbose,
    /// Announce only interactive and replaced elements.
    Brief,
}

impl Reader<'_> {
    /// Message identifier for the node's role, or `None` when the role is
    /// not announced.
    pub fn role_msg(&self, node: NodeId, verbosity: Verbosity) -> Option<&'static str> {
        if let Some(role) = self.roles.role(self.tree, node) {
            if let Some(id) = aria_role_id(role) {
                return Some(id);
            }
        }

        let tag = self.tree.tag(node);
        if tag == Some(Tag::Input) {
            return self.input_type(node).map(input_type_id);
        }
        if tag == Some(Tag::A) {
            if self.is_internal_link(node) {
                return Some("internal_link");
            }
            // A named anchor is a target, not a link.
            if self.tree.has_attr(node, "name") {
                return None;
            }
        }
        if self.is_content_editable(node) {
            return Some("input_type_text");
        }
        if self.is_math(node) {
            return Some("math_expr");
        }
        if tag == Some(Tag::Table) && self.is_layout_table(node) {
            return None;
        }

        match verbosity {
            Verbosity::Verbose => {
                if let Some(id) = tag.and_then(verbose_tag_id) {
                    return Some(id);
                }
                if tag == Some(Tag::Img) && self.tree.has_attr(node, "longdesc") {
                    return Some("image_with_long_desc");
                }
                if self.tree.has_attr(node, "onclick") {
                    return Some("clickable");
                }
                None
            }
            Verbosity::Brief => tag.and_then(brief_tag_id),
        }
    }

    /// Rendered role text for the node, or empty when nothing is announced.
    pub fn role_text(&self, node: NodeId, verbosity: Verbosity) -> String {
        self.role_msg(node, verbosity)
            .map(|id| self.msgs.role(id))
            .unwrap_or_default()
    }
}

fn aria_role_id(role: AriaRole) -> Option<&'static str> {
    Some(match role {
        AriaRole::Button => "aria_role_button",
        AriaRole::Checkbox => "aria_role_checkbox",
        AriaRole::Combobox => "aria_role_combobox",
        AriaRole::Grid => "aria_role_grid",
        AriaRole::Heading => "aria_role_heading",
        AriaRole::Img => "aria_role_img",
        AriaRole::Link => "aria_role_link",
        AriaRole::List => "aria_role_list",
        AriaRole::Listbox => "aria_role_listbox",
        AriaRole::ListItem => "aria_role_listitem",
        AriaRole::Math => "aria_role_math",
        AriaRole::Menu => "aria_role_menu",
        AriaRole::MenuBar => "aria_role_menubar",
        AriaRole::MenuItem => "aria_role_menuitem",
        AriaRole::ProgressBar => "aria_role_progressbar",
        AriaRole::Radio => "aria_role_radio",
        AriaRole::RadioGroup => "aria_role_radiogroup",
        AriaRole::Slider => "aria_role_slider",
        AriaRole::SpinButton => "aria_role_spinbutton",
        AriaRole::Tab => "aria_role_tab",
        AriaRole::TabList => "aria_role_tablist",
        AriaRole::Table => "aria_role_table",
        AriaRole::TextBox => "aria_role_textbox",
        AriaRole::Tree => "aria_role_tree",
        AriaRole::TreeItem => "aria_role_treeitem",
        _ => return None,
    })
}

fn input_type_id(input_type: InputType) -> &'static str {
    match input_type {
        InputType::Button => "input_type_button",
        InputType::Checkbox => "input_type_checkbox",
        InputType::Color => "input_type_color",
        InputType::Date => "input_type_date",
        InputType::Datetime => "input_type_datetime",
        InputType::DatetimeLocal => "input_type_datetime_local",
        InputType::Email => "input_type_email",
        InputType::File => "input_type_file",
        InputType::Hidden => "input_type_text",
        InputType::Image => "input_type_image",
        InputType::Month => "input_type_month",
        InputType::Number => "input_type_number",
        InputType::Password => "input_type_password",
        InputType::Radio => "input_type_radio",
        InputType::Range => "input_type_range",
        InputType::Reset => "input_type_reset",
        InputType::Search => "input_type_search",
        InputType::Submit => "input_type_submit",
        InputType::Tel => "input_type_tel",
        InputType::Text => "input_type_text",
        InputType::Url => "input_type_url",
        InputType::Week => "input_type_week",
    }
}

fn verbose_tag_id(tag: Tag) -> Option<&'static str> {
    Some(match tag {
        Tag::A => "tag_link",
        Tag::Article => "tag_article",
        Tag::Aside => "tag_aside",
        Tag::Audio => "tag_audio",
        Tag::Button => "tag_button",
        Tag::Footer => "tag_footer",
        Tag::H1 => "tag_h1",
        Tag::H2 => "tag_h2",
        Tag::H3 => "tag_h3",
        Tag::H4 => "tag_h4",
        Tag::H5 => "tag_h5",
        Tag::H6 => "tag_h6",
        Tag::Header => "tag_header",
        Tag::Hgroup => "tag_hgroup",
        Tag::Li => "tag_li",
        Tag::Mark => "tag_mark",
        Tag::Nav => "tag_nav",
        Tag::Ol => "tag_ol",
        Tag::Section => "tag_section",
        Tag::Select => "tag_select",
        Tag::Table => "tag_table",
        Tag::Textarea => "tag_textarea",
        Tag::Time => "tag_time",
        Tag::Ul => "tag_ul",
        Tag::Video => "tag_video",
        _ => return None,
    })
}

fn brief_tag_id(tag: Tag) -> Option<&'static str> {
    Some(match tag {
        Tag::Audio => "tag_audio",
        Tag::Button => "tag_button",
        Tag::Select => "tag_select",
        Tag::Table => "tag_table",
        Tag::Textarea => "tag_textarea",
        Tag::Video => "tag_video",
        _ => return None,
    })
}
