//! Lector navigation core.
//!
//! Computes what a non-visual user needs to know about a node — whether it
//! is perceivable, its accessible name, role, state, and value — and moves a
//! virtual cursor between leaf nodes of interest.
//!
//! All queries run against the live tree through injected capability
//! boundaries (style provider, role oracle, message set); nothing is cached
//! across calls, so out-of-band document mutation is always observed.

mod activate;
mod classify;
mod links;
mod msgs;
mod name;
mod role_msgs;
mod state;
mod table;
mod traverse;
mod visibility;

pub use activate::{Activation, ActivationHandler};
pub use msgs::{EnglishMessages, MessageSet, Msg};
pub use role_msgs::Verbosity;
pub use visibility::is_invisible_style;

use lector_aria::RoleOracle;
use lector_dom::{DomTree, NodeId};
use lector_style::{ComputedStyle, StyleProvider};

/// Navigation error.
#[derive(Debug, thiserror::Error)]
pub enum NavError {
    #[error("activation handler failed: {0}")]
    Activation(String),
}

/// Options for a visibility query.
#[derive(Debug, Clone, Copy)]
pub struct VisibilityOptions {
    /// Check the ancestor chain for invisibility that propagates down.
    pub check_ancestors: bool,
    /// Consider descendants of the node when looking for visible content.
    pub check_descendants: bool,
}

impl Default for VisibilityOptions {
    fn default() -> Self {
        Self {
            check_ancestors: true,
            check_descendants: true,
        }
    }
}

/// Hard ceiling on nodes visited by subtree searches; exceeding it reports
/// "not found" rather than continuing on a pathological tree.
#[derive(Debug, Clone, Copy)]
pub struct Limits {
    pub search_ceiling: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            search_ceiling: 10_000,
        }
    }
}

/// Empirical tuning constants for the layout-table heuristic. The values are
/// preserved from long-standing screen reader behavior; adjusting them
/// changes classification.
#[derive(Debug, Clone, Copy)]
pub struct TableConfig {
    /// Classify as layout once this many signals accumulate.
    pub points_threshold: u32,
    /// Row count at or below which a table looks layout-shaped.
    pub max_rows: usize,
    /// Document-position proxy: tables this early in the document look
    /// layout-shaped.
    pub max_previous_tags: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            points_threshold: 3,
            max_rows: 6,
            max_previous_tags: 12,
        }
    }
}

/// The navigation core's view of one document.
///
/// Borrows the live tree and its capability boundaries; holds no mutable
/// state of its own, so a `Reader` can be rebuilt or reused freely between
/// host mutations.
pub struct Reader<'a> {
    tree: &'a DomTree,
    styles: &'a dyn StyleProvider,
    roles: &'a dyn RoleOracle,
    msgs: &'a dyn MessageSet,
    /// Path of the containing document, for internal-link detection.
    document_path: &'a str,
    limits: Limits,
    table_config: TableConfig,
}

impl<'a> Reader<'a> {
    pub fn new(
        tree: &'a DomTree,
        styles: &'a dyn StyleProvider,
        roles: &'a dyn RoleOracle,
        msgs: &'a dyn MessageSet,
    ) -> Self {
        Self {
            tree,
            styles,
            roles,
            msgs,
            document_path: "",
            limits: Limits::default(),
            table_config: TableConfig::default(),
        }
    }

    pub fn with_document_path(mut self, path: &'a str) -> Self {
        self.document_path = path;
        self
    }

    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_table_config(mut self, config: TableConfig) -> Self {
        self.table_config = config;
        self
    }

    pub fn tree(&self) -> &DomTree {
        self.tree
    }

    pub(crate) fn style(&self, node: NodeId) -> ComputedStyle {
        self.styles.computed_style(node)
    }
}

/// Trim leading/trailing whitespace and collapse inner runs to one space.
pub fn collapse_whitespace(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_space = true;
    for c in s.chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push(' ');
            }
            in_space = true;
        } else {
            out.push(c);
            in_space = false;
        }
    }
    if out.ends_with(' ') {
        out.pop();
    }
    out
}
