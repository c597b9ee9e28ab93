//! Directed leaf traversal and bounded subtree search.
//!
//! Every walk is direction-parameterized: `reverse = false` moves toward the
//! end of the document, `reverse = true` toward the start. Subtree searches
//! carry a node budget from [`crate::Limits`] so a pathological tree makes a
//! query fail closed instead of stalling the reader.

use lector_dom::{NodeId, Tag};
use tracing::trace;

use crate::Reader;

impl Reader<'_> {
    /// First child in walk order: last child when reversed.
    pub fn directed_first_child(&self, node: NodeId, reverse: bool) -> Option<NodeId> {
        if reverse {
            self.tree.last_child(node)
        } else {
            self.tree.first_child(node)
        }
    }

    /// Next sibling in walk order: previous sibling when reversed.
    pub fn directed_next_sibling(&self, node: NodeId, reverse: bool) -> Option<NodeId> {
        if reverse {
            self.tree.prev_sibling(node)
        } else {
            self.tree.next_sibling(node)
        }
    }

    /// Next leaf after `node` in walk order, under the caller's notion of
    /// leaf. `node` itself need not be a leaf.
    pub fn directed_next_leaf_like_node<F>(
        &self,
        node: NodeId,
        reverse: bool,
        is_leaf: F,
    ) -> Option<NodeId>
    where
        F: Fn(NodeId) -> bool,
    {
        let root = self.tree.root();
        let mut node = node;
        if node != root {
            loop {
                if let Some(sibling) = self.directed_next_sibling(node, reverse) {
                    node = sibling;
                    break;
                }
                node = self.tree.parent(node)?;
                if node == root {
                    return None;
                }
            }
        }
        // Descend to the nearest leaf under the subtree we moved into.
        while !is_leaf(node) {
            match self.directed_first_child(node, reverse) {
                Some(child) => node = child,
                None => break,
            }
        }
        if node == root { None } else { Some(node) }
    }

    /// Next navigation leaf after `node` in walk order.
    pub fn directed_next_leaf_node(&self, node: NodeId, reverse: bool) -> Option<NodeId> {
        self.directed_next_leaf_like_node(node, reverse, |n| self.is_leaf_node(n))
    }

    /// Previous navigation leaf before `node`.
    pub fn previous_leaf_node(&self, node: NodeId) -> Option<NodeId> {
        self.directed_next_leaf_node(node, true)
    }

    /// First leaf of the document that carries content.
    pub fn first_leaf_node(&self) -> Option<NodeId> {
        let mut node = self.tree.root();
        while let Some(child) = self.tree.first_child(node) {
            node = child;
        }
        let mut current = Some(node);
        while let Some(n) = current {
            if self.is_leaf_node(n) && self.has_content(n) {
                return Some(n);
            }
            current = self.directed_next_leaf_node(n, false);
        }
        None
    }

    /// First descendant of `node` (excluding `node`) matching `pred`, in
    /// document order. Bounded by the search ceiling.
    pub fn find_node<F>(&self, node: NodeId, pred: F) -> Option<NodeId>
    where
        F: Fn(NodeId) -> bool,
    {
        let mut budget = self.limits.search_ceiling;
        let found = self.find_node_bounded(node, &pred, false, &mut budget);
        if found.is_none() && budget == 0 {
            trace!(?node, "subtree search hit node ceiling");
        }
        found
    }

    fn find_node_bounded<F>(
        &self,
        node: NodeId,
        pred: &F,
        reverse: bool,
        budget: &mut usize,
    ) -> Option<NodeId>
    where
        F: Fn(NodeId) -> bool,
    {
        let mut child = self.directed_first_child(node, reverse);
        while let Some(c) = child {
            if *budget == 0 {
                return None;
            }
            *budget -= 1;
            if pred(c) {
                return Some(c);
            }
            if let Some(found) = self.find_node_bounded(c, pred, reverse, budget) {
                return Some(found);
            }
            child = self.directed_next_sibling(c, reverse);
        }
        None
    }

    /// Number of descendants of `node` matching `pred`, up to the search
    /// ceiling.
    pub fn count_nodes<F>(&self, node: NodeId, pred: F) -> usize
    where
        F: Fn(NodeId) -> bool,
    {
        let mut budget = self.limits.search_ceiling;
        self.count_nodes_bounded(node, &pred, &mut budget)
    }

    fn count_nodes_bounded<F>(&self, node: NodeId, pred: &F, budget: &mut usize) -> usize
    where
        F: Fn(NodeId) -> bool,
    {
        let mut count = 0;
        for child in self.tree.children(node) {
            if *budget == 0 {
                trace!(?node, "subtree count hit node ceiling");
                break;
            }
            *budget -= 1;
            if pred(child) {
                count += 1;
            }
            count += self.count_nodes_bounded(child, pred, budget);
        }
        count
    }

    /// First descendant matching `pred` in walk order.
    pub fn directed_find_first_node<F>(&self, node: NodeId, reverse: bool, pred: &F) -> Option<NodeId>
    where
        F: Fn(NodeId) -> bool,
    {
        let mut budget = self.limits.search_ceiling;
        self.find_node_bounded(node, pred, reverse, &mut budget)
    }

    /// Deepest node at or under `node` whose chain of matches ends there:
    /// repeatedly descends to the first matching descendant.
    pub fn directed_find_deepest_node<F>(
        &self,
        node: NodeId,
        reverse: bool,
        pred: &F,
    ) -> Option<NodeId>
    where
        F: Fn(NodeId) -> bool,
    {
        let mut current = node;
        loop {
            match self.directed_find_first_node(current, reverse, pred) {
                Some(next) => current = next,
                None => {
                    return if current == node {
                        pred(node).then_some(node)
                    } else {
                        Some(current)
                    };
                }
            }
        }
    }

    /// Next matching node after `node` within the subtree of `ancestor`.
    ///
    /// `above` permits landing on an ancestor of `node`; `deep` prefers the
    /// deepest match in each subtree over the shallowest.
    pub fn directed_find_next_node<F>(
        &self,
        node: NodeId,
        ancestor: NodeId,
        reverse: bool,
        pred: &F,
        above: bool,
        deep: bool,
    ) -> Option<NodeId>
    where
        F: Fn(NodeId) -> bool,
    {
        if !self.is_descendant_of_node(node, ancestor) || node == ancestor {
            return None;
        }
        let mut sibling = self.directed_next_sibling(node, reverse);
        while let Some(sib) = sibling {
            if !deep && pred(sib) {
                return Some(sib);
            }
            let found = if deep {
                self.directed_find_deepest_node(sib, reverse, pred)
            } else {
                self.directed_find_first_node(sib, reverse, pred)
            };
            if let Some(found) = found {
                return Some(found);
            }
            if deep && pred(sib) {
                return Some(sib);
            }
            sibling = self.directed_next_sibling(sib, reverse);
        }
        let parent = self.tree.parent(node)?;
        if above && pred(parent) {
            return Some(parent);
        }
        self.directed_find_next_node(parent, ancestor, reverse, pred, above, deep)
    }

    /// Whether `node` sits strictly inside the subtree of `ancestor`.
    pub fn is_descendant_of_node(&self, node: NodeId, ancestor: NodeId) -> bool {
        self.tree.ancestors(node).skip(1).any(|a| a == ancestor)
    }

    /// Whether any proper ancestor of `node` carries `tag`.
    pub fn is_descendant_of_tag(&self, node: NodeId, tag: Tag) -> bool {
        self.tree
            .ancestors(node)
            .skip(1)
            .any(|a| self.tree.tag(a) == Some(tag))
    }

    /// Ancestor chain from the top of the document down to `node` itself,
    /// with leading document nodes trimmed.
    pub fn ancestors_chain(&self, node: NodeId) -> Vec<NodeId> {
        let mut chain: Vec<NodeId> = self.tree.ancestors(node).collect();
        chain.reverse();
        let skip = chain
            .iter()
            .take_while(|&&n| !self.tree.is_element(n))
            .count();
        chain.split_off(skip)
    }

    /// Index of the first ancestor where the chains of `a` and `b` diverge.
    /// `None` means the chains are identical.
    pub fn ancestor_divergence(&self, a: NodeId, b: NodeId) -> Option<usize> {
        let chain_a = self.ancestors_chain(a);
        let chain_b = self.ancestors_chain(b);
        for (i, (x, y)) in chain_a.iter().zip(chain_b.iter()).enumerate() {
            if x != y {
                return Some(i);
            }
        }
        if chain_a.len() != chain_b.len() {
            return Some(chain_a.len().min(chain_b.len()));
        }
        None
    }

    /// Ancestors of `current` that were not ancestors of `previous`: the
    /// part of the chain the cursor newly entered.
    pub fn unique_ancestors(&self, previous: NodeId, current: NodeId) -> Vec<NodeId> {
        let chain = self.ancestors_chain(current);
        match self.ancestor_divergence(previous, current) {
            Some(i) if i < chain.len() => chain[i..].to_vec(),
            Some(_) | None => chain.last().map(|&n| vec![n]).unwrap_or_default(),
        }
    }
}
