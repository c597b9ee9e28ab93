//! Lector style — computed style snapshots.
//!
//! The navigation core never computes style itself; it queries a
//! [`StyleProvider`] supplied by the rendering engine. Providers hand back
//! a snapshot by value on every call, so stale state cannot leak across
//! out-of-band document mutations.

use std::collections::HashMap;

use lector_dom::NodeId;

/// The `display` property, reduced to what visibility decisions need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    None,
    Inline,
    #[default]
    Block,
    InlineBlock,
    Flex,
    TableBox,
}

/// The `visibility` property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Visible,
    Hidden,
    Collapse,
}

/// The `border-style` property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderStyle {
    None,
    Hidden,
    Solid,
    Dashed,
    Dotted,
    Double,
}

/// Read-only computed style snapshot for one node.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputedStyle {
    pub display: Display,
    pub visibility: Visibility,
    /// 0.0 (transparent) through 1.0 (opaque).
    pub opacity: f32,
    pub border_style: Option<BorderStyle>,
    /// Used border width in px, when specified.
    pub border_width: Option<f32>,
    /// Whether a border color is explicitly set.
    pub border_color: Option<String>,
}

impl Default for ComputedStyle {
    fn default() -> Self {
        Self {
            display: Display::default(),
            visibility: Visibility::default(),
            opacity: 1.0,
            border_style: None,
            border_width: None,
            border_color: None,
        }
    }
}

impl ComputedStyle {
    /// A fully visible block style.
    pub fn visible() -> Self {
        Self::default()
    }

    pub fn display(mut self, display: Display) -> Self {
        self.display = display;
        self
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn border_style(mut self, style: BorderStyle) -> Self {
        self.border_style = Some(style);
        self
    }

    pub fn border_width(mut self, px: f32) -> Self {
        self.border_width = Some(px);
        self
    }

    pub fn border_color(mut self, color: &str) -> Self {
        self.border_color = Some(color.to_string());
        self
    }
}

/// Boundary to the rendering engine: per-node computed style, queried on
/// demand and never cached by the navigation core.
pub trait StyleProvider {
    /// Current computed style for the node. Nodes unknown to the provider
    /// report the default (visible) style, matching how text nodes and
    /// unstyled elements behave.
    fn computed_style(&self, node: NodeId) -> ComputedStyle;
}

/// Map-backed style provider. Hosts push resolved styles in; anything not
/// present reads as visible.
#[derive(Debug, Default)]
pub struct StyleSheet {
    styles: HashMap<NodeId, ComputedStyle>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the computed style for a node.
    pub fn set(&mut self, node: NodeId, style: ComputedStyle) {
        self.styles.insert(node, style);
    }

    /// Drop the style for a node, reverting it to the default.
    pub fn clear(&mut self, node: NodeId) {
        self.styles.remove(&node);
    }
}

impl StyleProvider for StyleSheet {
    fn computed_style(&self, node: NodeId) -> ComputedStyle {
        self.styles.get(&node).cloned().unwrap_or_default()
    }
}
