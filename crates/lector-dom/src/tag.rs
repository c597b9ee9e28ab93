//! Closed tag vocabulary.
//!
//! Element kinds are a closed enum rather than string comparisons so that the
//! classifier components can match exhaustively.

/// HTML tag identity of an element node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    A,
    Applet,
    Article,
    Aside,
    Audio,
    Body,
    Button,
    Caption,
    Colgroup,
    Div,
    Embed,
    Fieldset,
    Footer,
    Frame,
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    Head,
    Header,
    Hgroup,
    Html,
    Iframe,
    Img,
    Input,
    Label,
    Legend,
    Li,
    Mark,
    Math,
    Nav,
    Noembed,
    Noscript,
    Object,
    Ol,
    OptionElt,
    Optgroup,
    P,
    Script,
    Section,
    Select,
    Span,
    Style,
    Table,
    Tbody,
    Td,
    Textarea,
    Tfoot,
    Th,
    Thead,
    Time,
    Tr,
    Ul,
    Video,
    /// Any tag the vocabulary does not track.
    Unknown,
}

impl Tag {
    /// Parse a tag name, case-insensitively.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "a" => Self::A,
            "applet" => Self::Applet,
            "article" => Self::Article,
            "aside" => Self::Aside,
            "audio" => Self::Audio,
            "body" => Self::Body,
            "button" => Self::Button,
            "caption" => Self::Caption,
            "colgroup" => Self::Colgroup,
            "div" => Self::Div,
            "embed" => Self::Embed,
            "fieldset" => Self::Fieldset,
            "footer" => Self::Footer,
            "frame" => Self::Frame,
            "h1" => Self::H1,
            "h2" => Self::H2,
            "h3" => Self::H3,
            "h4" => Self::H4,
            "h5" => Self::H5,
            "h6" => Self::H6,
            "head" => Self::Head,
            "header" => Self::Header,
            "hgroup" => Self::Hgroup,
            "html" => Self::Html,
            "iframe" => Self::Iframe,
            "img" => Self::Img,
            "input" => Self::Input,
            "label" => Self::Label,
            "legend" => Self::Legend,
            "li" => Self::Li,
            "mark" => Self::Mark,
            "math" => Self::Math,
            "nav" => Self::Nav,
            "noembed" => Self::Noembed,
            "noscript" => Self::Noscript,
            "object" => Self::Object,
            "ol" => Self::Ol,
            "option" => Self::OptionElt,
            "optgroup" => Self::Optgroup,
            "p" => Self::P,
            "script" => Self::Script,
            "section" => Self::Section,
            "select" => Self::Select,
            "span" => Self::Span,
            "style" => Self::Style,
            "table" => Self::Table,
            "tbody" => Self::Tbody,
            "td" => Self::Td,
            "textarea" => Self::Textarea,
            "tfoot" => Self::Tfoot,
            "th" => Self::Th,
            "thead" => Self::Thead,
            "time" => Self::Time,
            "tr" => Self::Tr,
            "ul" => Self::Ul,
            "video" => Self::Video,
            _ => Self::Unknown,
        }
    }

    /// Heading tags h1 through h6.
    pub fn is_heading(self) -> bool {
        matches!(
            self,
            Self::H1 | Self::H2 | Self::H3 | Self::H4 | Self::H5 | Self::H6
        )
    }

    /// HTML5 sectioning and semantic tags.
    pub fn is_semantic(self) -> bool {
        matches!(
            self,
            Self::Section
                | Self::Nav
                | Self::Article
                | Self::Aside
                | Self::Hgroup
                | Self::Header
                | Self::Footer
                | Self::Time
                | Self::Mark
        )
    }

    /// Tags whose content is replaced by an external resource or plugin.
    pub fn is_embedded_object(self) -> bool {
        matches!(
            self,
            Self::Object | Self::Embed | Self::Video | Self::Audio | Self::Iframe | Self::Frame
        )
    }

    /// Row group containers inside a table.
    pub fn is_row_group(self) -> bool {
        matches!(self, Self::Thead | Self::Tbody | Self::Tfoot)
    }
}
