//! Localization boundary.
//!
//! The core produces message identifiers with parameters; a [`MessageSet`]
//! turns them into locale prose. Only the pieces that end up embedded in
//! computed names and values are rendered inside the core — everything else
//! is handed to the output pipeline as identifiers.

use lector_aria::{AriaStateMsg, TriState};

/// A message identifier plus its parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Default label of a submit button with no value.
    SubmitDefault,
    /// Default label of a reset button with no value.
    ResetDefault,
    /// Label plus placeholder hint for an empty text input.
    WithHint { label: String, hint: String },
    /// Image title derived from a short filename.
    NamedImage { filename: String },
    /// Image with no derivable title.
    Image,
    /// Token substituted for each character of a password value.
    PasswordToken,
    /// Multi-select summary from first to last selected option.
    SelectionRange { start: String, end: String },
    /// Position in a single-select list.
    ListPosition { index: u32, total: u32 },
    /// Number of options selected in a multi-select list.
    SelectedCount { count: u32 },
    /// Item count of a list element.
    ListItems { count: u32 },
    /// Checkbox checked state.
    CheckboxChecked,
    CheckboxUnchecked,
    /// Radio button selected state.
    RadioSelected,
    RadioUnselected,
    /// State reported by the role layer.
    Aria(AriaStateMsg),
    /// Control is disabled.
    Disabled,
    /// Link target within the current document.
    InternalLink,
    /// Link-role node with no resolvable target.
    UnknownLink,
}

impl From<AriaStateMsg> for Msg {
    fn from(state: AriaStateMsg) -> Self {
        Self::Aria(state)
    }
}

/// Maps message identifiers to locale strings.
pub trait MessageSet {
    /// Render a parameterized message.
    fn format(&self, msg: Msg) -> String;

    /// Render a role message identifier (e.g. `tag_button`).
    fn role(&self, id: &str) -> String;
}

/// Built-in English message set.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnglishMessages;

impl EnglishMessages {
    pub fn new() -> Self {
        Self
    }
}

impl MessageSet for EnglishMessages {
    fn format(&self, msg: Msg) -> String {
        match msg {
            Msg::SubmitDefault => "Submit".to_string(),
            Msg::ResetDefault => "Reset".to_string(),
            Msg::WithHint { label, hint } => format!("{label} with hint {hint}"),
            Msg::NamedImage { filename } => format!("{filename} Image"),
            Msg::Image => "Image".to_string(),
            Msg::PasswordToken => "dot ".to_string(),
            Msg::SelectionRange { start, end } => format!("from {start} to {end}"),
            Msg::ListPosition { index, total } => format!("{index} of {total}"),
            Msg::SelectedCount { count } => format!("{count} selected"),
            Msg::ListItems { count } => format!("List with {count} items"),
            Msg::CheckboxChecked => "Checked".to_string(),
            Msg::CheckboxUnchecked => "Not checked".to_string(),
            Msg::RadioSelected => "Selected".to_string(),
            Msg::RadioUnselected => "Not selected".to_string(),
            Msg::Aria(state) => match state {
                AriaStateMsg::Checked(TriState::True) => "Checked".to_string(),
                AriaStateMsg::Checked(TriState::False) => "Not checked".to_string(),
                AriaStateMsg::Checked(TriState::Mixed) => "Partially checked".to_string(),
                AriaStateMsg::Selected(true) => "Selected".to_string(),
                AriaStateMsg::Selected(false) => "Not selected".to_string(),
                AriaStateMsg::Expanded(true) => "Expanded".to_string(),
                AriaStateMsg::Expanded(false) => "Collapsed".to_string(),
                AriaStateMsg::Pressed(TriState::True) => "Pressed".to_string(),
                AriaStateMsg::Pressed(TriState::False) => "Not pressed".to_string(),
                AriaStateMsg::Pressed(TriState::Mixed) => "Partially pressed".to_string(),
                AriaStateMsg::Required => "Required".to_string(),
                AriaStateMsg::Invalid => "Invalid input".to_string(),
                AriaStateMsg::HasPopup => "Has pop up".to_string(),
                AriaStateMsg::SetPosition { index, total } => format!("{index} of {total}"),
            },
            Msg::Disabled => "Disabled".to_string(),
            Msg::InternalLink => "Internal link".to_string(),
            Msg::UnknownLink => "Unknown link".to_string(),
        }
    }

    fn role(&self, id: &str) -> String {
        match id {
            "tag_link" => "Link",
            "tag_article" => "Article",
            "tag_aside" => "Aside",
            "tag_audio" => "Audio",
            "tag_button" => "Button",
            "tag_footer" => "Footer",
            "tag_h1" => "Heading 1",
            "tag_h2" => "Heading 2",
            "tag_h3" => "Heading 3",
            "tag_h4" => "Heading 4",
            "tag_h5" => "Heading 5",
            "tag_h6" => "Heading 6",
            "tag_header" => "Header",
            "tag_hgroup" => "Heading group",
            "tag_li" => "List item",
            "tag_mark" => "Highlighted",
            "tag_nav" => "Navigation",
            "tag_ol" => "Ordered list",
            "tag_section" => "Section",
            "tag_select" => "List box",
            "tag_table" => "Table",
            "tag_textarea" => "Text area",
            "tag_time" => "Time",
            "tag_ul" => "List",
            "tag_video" => "Video",
            "input_type_button" => "Button",
            "input_type_checkbox" => "Check box",
            "input_type_color" => "Color picker",
            "input_type_datetime" => "Date time control",
            "input_type_datetime_local" => "Date time control",
            "input_type_date" => "Date control",
            "input_type_email" => "Edit text, email entry",
            "input_type_file" => "File selection",
            "input_type_image" => "Button",
            "input_type_month" => "Month control",
            "input_type_number" => "Edit text, number entry",
            "input_type_password" => "Password edit text",
            "input_type_radio" => "Radio button",
            "input_type_range" => "Slider",
            "input_type_reset" => "Reset",
            "input_type_search" => "Edit text, search entry",
            "input_type_submit" => "Button",
            "input_type_tel" => "Edit text, telephone entry",
            "input_type_text" => "Edit text",
            "input_type_url" => "Edit text, URL entry",
            "input_type_week" => "Week of the year control",
            "internal_link" => "Internal link",
            "clickable" => "Clickable",
            "math_expr" => "Math expression",
            "image_with_long_desc" => "Image with long description",
            "aria_role_button" => "Button",
            "aria_role_checkbox" => "Check box",
            "aria_role_combobox" => "Combo box",
            "aria_role_heading" => "Heading",
            "aria_role_img" => "Image",
            "aria_role_link" => "Link",
            "aria_role_list" => "List",
            "aria_role_listbox" => "List box",
            "aria_role_listitem" => "List item",
            "aria_role_math" => "Math",
            "aria_role_menu" => "Menu",
            "aria_role_menubar" => "Menu bar",
            "aria_role_menuitem" => "Menu item",
            "aria_role_progressbar" => "Progress bar",
            "aria_role_radio" => "Radio button",
            "aria_role_radiogroup" => "Radio button group",
            "aria_role_slider" => "Slider",
            "aria_role_spinbutton" => "Spin button",
            "aria_role_tab" => "Tab",
            "aria_role_tablist" => "Tab list",
            "aria_role_textbox" => "Text box",
            "aria_role_tree" => "Tree",
            "aria_role_treeitem" => "Tree item",
            "aria_role_grid" => "Grid",
            "aria_role_table" => "Table",
            _ => return id.to_string(),
        }
        .to_string()
    }
}
