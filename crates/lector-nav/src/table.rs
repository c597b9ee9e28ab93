//! Layout-table heuristic.
//!
//! Tables used for visual layout should be read as plain content, not
//! announced row by row. Some signals are decisive in either direction;
//! the rest accumulate points against the configured threshold.

use lector_dom::{NodeId, Tag};
use tracing::debug;

use crate::Reader;

impl Reader<'_> {
    /// Row elements of a table: direct `<tr>` children plus rows inside
    /// direct row-group children.
    pub fn table_rows(&self, table: NodeId) -> Vec<NodeId> {
        let mut rows = Vec::new();
        for child in self.tree.children(table) {
            match self.tree.tag(child) {
                Some(Tag::Tr) => rows.push(child),
                Some(t) if t.is_row_group() => {
                    rows.extend(
                        self.tree
                            .children(child)
                            .filter(|&r| self.tree.tag(r) == Some(Tag::Tr)),
                    );
                }
                _ => {}
            }
        }
        rows
    }

    /// Whether the table exists for visual layout rather than data.
    pub fn is_layout_table(&self, table: NodeId) -> bool {
        let rows = self.table_rows(table);

        if rows.len() == 1 {
            return true;
        }
        if let Some(&first) = rows.first() {
            let cells = self
                .tree
                .children(first)
                .filter(|&c| self.tree.is_element(c))
                .count();
            if cells == 1 {
                return true;
            }
        }

        // Authored semantics are decisive: a grid or landmark table is data.
        if self.roles.is_grid(self.tree, table) || self.roles.is_landmark(self.tree, table) {
            return false;
        }
        let has_child_tag = |tag: Tag| {
            self.tree
                .children(table)
                .any(|c| self.tree.tag(c) == Some(tag))
        };
        if has_child_tag(Tag::Caption) || self.tree.has_attr(table, "summary") {
            return false;
        }

        let cells: Vec<NodeId> = rows
            .iter()
            .flat_map(|&r| self.tree.children(r))
            .filter(|&c| matches!(self.tree.tag(c), Some(Tag::Td | Tag::Th)))
            .collect();
        let has_th = cells.iter().any(|&c| self.tree.tag(c) == Some(Tag::Th));
        let has_td = cells.iter().any(|&c| self.tree.tag(c) == Some(Tag::Td));
        if has_th && has_td {
            return false;
        }
        if has_child_tag(Tag::Colgroup) || has_child_tag(Tag::Thead) || has_child_tag(Tag::Tfoot) {
            return false;
        }

        // A cell holding an embedded document or plugin is layout scaffolding.
        let embeds_object = cells.iter().any(|&c| {
            self.tree.tag(c) == Some(Tag::Td)
                && self.tree.children(c).any(|g| {
                    matches!(
                        self.tree.tag(g),
                        Some(Tag::Embed | Tag::Object | Tag::Iframe | Tag::Applet)
                    )
                })
        });
        if embeds_object {
            return true;
        }

        let mut points = 0u32;
        if !self.has_border(table) {
            points += 1;
        }
        if rows.len() <= self.table_config.max_rows {
            points += 1;
        }
        if self.count_previous_tags(table) <= self.table_config.max_previous_tags {
            points += 1;
        }
        let nests_table = cells.iter().any(|&c| {
            self.tree.tag(c) == Some(Tag::Td)
                && self
                    .tree
                    .children(c)
                    .any(|g| self.tree.tag(g) == Some(Tag::Table))
        });
        if nests_table {
            points += 1;
        }

        let layout = points >= self.table_config.points_threshold;
        debug!(table = ?table, points, layout, "table classified");
        layout
    }

    /// Whether the table draws a visible border, from attributes first and
    /// computed style second.
    fn has_border(&self, table: NodeId) -> bool {
        if let Some(frame) = self.tree.attr(table, "frame") {
            return !frame.contains("void");
        }
        let border = self.tree.attr(table, "border").filter(|b| !b.is_empty());
        if let Some(border) = border {
            if border.len() == 1 {
                return border != "0";
            }
            // Strip a trailing unit; an unparsable width counts as a border.
            let digits: String = border
                .chars()
                .take_while(|c| c.is_ascii_digit() || *c == '.')
                .collect();
            return digits.parse::<f32>().map_or(true, |w| w != 0.0);
        }

        let style = self.style(table);
        if style.border_style == Some(lector_style::BorderStyle::None) {
            return false;
        }
        if let Some(width) = style.border_width {
            return width != 0.0;
        }
        style.border_color.is_some()
    }

    /// Document-position proxy: the ancestor chain down to the table plus
    /// element siblings before it.
    fn count_previous_tags(&self, table: NodeId) -> usize {
        let ancestors = self.ancestors_chain(table).len();
        let mut previous = 0;
        let mut sibling = self.tree.prev_sibling(table);
        while let Some(s) = sibling {
            if !self.tree.is_text(s) {
                previous += 1;
            }
            sibling = self.tree.prev_sibling(s);
        }
        ancestors + previous
    }

    /// Nearest enclosing table of `node`, if any. With `allow_captions`
    /// unset, a node inside a `<caption>` is not considered inside its
    /// table.
    pub fn containing_table(&self, node: NodeId, allow_captions: bool) -> Option<NodeId> {
        self.find_table_node_in_list(&self.ancestors_chain(node), allow_captions)
    }

    /// Table or grid node in a root-to-leaf node list, scanning from the
    /// deepest entry. A `<caption>` entry hides the table unless
    /// `allow_captions` is set, since captions render outside the table box.
    pub fn find_table_node_in_list(
        &self,
        nodes: &[NodeId],
        allow_captions: bool,
    ) -> Option<NodeId> {
        for &n in nodes.iter().rev() {
            if self.tree.is_text(n) {
                continue;
            }
            if !allow_captions && self.tree.tag(n) == Some(Tag::Caption) {
                return None;
            }
            if self.tree.tag(n) == Some(Tag::Table) || self.roles.is_grid(self.tree, n) {
                return Some(n);
            }
        }
        None
    }
}
