//! Node representation.
//!
//! A node holds its tree links as `NodeId`s plus a tagged data variant.
//! The parent link is a back-reference only; a node never owns its parent
//! or siblings.

use crate::{NodeId, Tag};

/// A single node in the arena.
#[derive(Debug)]
pub struct Node {
    /// Parent node (NONE if detached or root).
    pub(crate) parent: NodeId,
    pub(crate) first_child: NodeId,
    pub(crate) last_child: NodeId,
    pub(crate) prev_sibling: NodeId,
    pub(crate) next_sibling: NodeId,
    /// Node-specific data.
    pub data: NodeData,
}

impl Node {
    pub(crate) fn new(data: NodeData) -> Self {
        Self {
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            prev_sibling: NodeId::NONE,
            next_sibling: NodeId::NONE,
            data,
        }
    }

    /// Check if this is an element.
    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element(_))
    }

    /// Check if this is a text node.
    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self.data, NodeData::Text(_))
    }

    /// Get element data if this is an element.
    #[inline]
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get mutable element data.
    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get text content if this is a text node.
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(t) => Some(t),
            _ => None,
        }
    }
}

/// Node-specific data.
#[derive(Debug)]
pub enum NodeData {
    /// Synthetic document root.
    Document,
    /// Element with a tag and attributes.
    Element(ElementData),
    /// Text content.
    Text(String),
    /// Comment.
    Comment(String),
}

/// Element-specific data.
#[derive(Debug)]
pub struct ElementData {
    /// Tag identity.
    pub tag: Tag,
    /// Attributes in document order.
    pub attrs: Vec<Attribute>,
}

impl ElementData {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
        }
    }

    /// Get an attribute value.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Whether the attribute is present, regardless of value.
    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.iter().any(|a| a.name == name)
    }

    /// Set an attribute, replacing any existing value.
    pub fn set_attr(&mut self, name: &str, value: &str) {
        for attr in &mut self.attrs {
            if attr.name == name {
                attr.value = value.to_string();
                return;
            }
        }
        self.attrs.push(Attribute {
            name: name.to_string(),
            value: value.to_string(),
        });
    }

    /// Remove an attribute.
    pub fn remove_attr(&mut self, name: &str) {
        self.attrs.retain(|a| a.name != name);
    }

    /// The `id` attribute.
    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    /// The input type for an `<input>` element; `Text` when absent or
    /// unrecognized, matching browser behavior.
    pub fn input_type(&self) -> InputType {
        InputType::from_attr(self.attr("type"))
    }
}

/// Attribute name/value pair.
#[derive(Debug, Clone)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

/// The `type` of an `<input>` element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    Button,
    Checkbox,
    Color,
    Date,
    Datetime,
    DatetimeLocal,
    Email,
    File,
    Hidden,
    Image,
    Month,
    Number,
    Password,
    Radio,
    Range,
    Reset,
    Search,
    Submit,
    Tel,
    Text,
    Url,
    Week,
}

impl InputType {
    /// Parse a `type` attribute value. Missing, empty, or unknown values
    /// default to `Text`.
    pub fn from_attr(value: Option<&str>) -> Self {
        match value.map(|v| v.to_ascii_lowercase()).as_deref() {
            Some("button") => Self::Button,
            Some("checkbox") => Self::Checkbox,
            Some("color") => Self::Color,
            Some("date") => Self::Date,
            Some("datetime") => Self::Datetime,
            Some("datetime-local") => Self::DatetimeLocal,
            Some("email") => Self::Email,
            Some("file") => Self::File,
            Some("hidden") => Self::Hidden,
            Some("image") => Self::Image,
            Some("month") => Self::Month,
            Some("number") => Self::Number,
            Some("password") => Self::Password,
            Some("radio") => Self::Radio,
            Some("range") => Self::Range,
            Some("reset") => Self::Reset,
            Some("search") => Self::Search,
            Some("submit") => Self::Submit,
            Some("tel") => Self::Tel,
            Some("url") => Self::Url,
            Some("week") => Self::Week,
            _ => Self::Text,
        }
    }

    /// Input types that hold free-form editable text.
    pub fn is_editable_text(self) -> bool {
        matches!(
            self,
            Self::Email
                | Self::Number
                | Self::Password
                | Self::Search
                | Self::Text
                | Self::Tel
                | Self::Url
        )
    }
}
