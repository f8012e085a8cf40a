//! Compressed suffix tree
//!
//! [`SuffixTreeView`] is the read-only contract the suffix array builder
//! consumes: nodes addressed by [`NodeId`] in an arena, root at [`ROOT`], each
//! holding the label of its incoming edge and its child edges keyed by the
//! first byte of the child's label.
//!
//! [`SuffixTree`] is one provider of that view. It is built naively by
//! inserting suffixes one at a time and splitting edges where they diverge,
//! O(n²) in the worst case. Any other builder (Ukkonen, McCreight) can feed the
//! array builder by implementing the trait.

use super::types::{NodeId, ROOT, Sequence};
use crate::error::{IndexError, Result};
use std::ops::Range;

/// Read access to a compressed suffix tree.
///
/// A node with no children is a leaf. Children are expected in ascending
/// order of their discriminating byte; consumers that need lexicographic
/// order sort them if a provider does not guarantee it.
pub trait SuffixTreeView {
    /// Label on the edge entering `node` (empty for the root)
    fn label(&self, node: NodeId) -> &[u8];

    /// Child edges of `node` as `(first byte of child label, child)`
    fn children(&self, node: NodeId) -> &[(u8, NodeId)];

    fn is_leaf(&self, node: NodeId) -> bool {
        self.children(node).is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct TreeNode {
    /// Incoming edge label as a range into the text
    label: Range<usize>,
    /// Sorted by first byte
    children: Vec<(u8, NodeId)>,
}

/// Arena-backed compressed suffix tree over a sentinel-terminated text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixTree<'t> {
    text: &'t [u8],
    nodes: Vec<TreeNode>,
}

impl<'t> SuffixTree<'t> {
    /// Build the tree for every suffix of `sequence`.
    ///
    /// The sequence must end in a sentinel; without one a suffix may be a
    /// prefix of another and would end inside an edge instead of at a leaf.
    pub fn build(sequence: &'t Sequence) -> Result<Self> {
        if sequence.sentinel().is_none() {
            return Err(IndexError::InvalidSequence(
                "suffix tree construction requires a sentinel-terminated sequence".into(),
            ));
        }

        let mut tree = Self {
            text: sequence.as_bytes(),
            nodes: vec![TreeNode {
                label: 0..0,
                children: Vec::new(),
            }],
        };

        for start in 0..tree.text.len() {
            tree.insert_suffix(start);
        }

        Ok(tree)
    }

    fn insert_suffix(&mut self, start: usize) {
        let text = self.text;
        let n = text.len();
        let mut node = ROOT;
        let mut pos = start;

        loop {
            let byte = text[pos];
            let slot = self.nodes[node]
                .children
                .binary_search_by_key(&byte, |&(b, _)| b);

            let child = match slot {
                Ok(i) => self.nodes[node].children[i].1,
                Err(i) => {
                    let leaf = self.push_node(pos..n);
                    self.nodes[node].children.insert(i, (byte, leaf));
                    return;
                }
            };

            let label = self.nodes[child].label.clone();
            let common = text[label.clone()]
                .iter()
                .zip(&text[pos..])
                .take_while(|(a, b)| a == b)
                .count();

            if common == label.len() {
                node = child;
                pos += common;
                continue;
            }

            // Diverges inside the edge: split it at `common`.
            // The unique sentinel guarantees `pos + common < n` here.
            let split_at = label.start + common;
            let mid = self.push_node(label.start..split_at);
            self.nodes[child].label = split_at..label.end;
            self.nodes[mid].children.push((text[split_at], child));

            if let Ok(i) = slot {
                self.nodes[node].children[i].1 = mid;
            }

            let leaf = self.push_node(pos + common..n);
            let leaf_byte = text[pos + common];
            let at = self.nodes[mid]
                .children
                .partition_point(|&(b, _)| b < leaf_byte);
            self.nodes[mid].children.insert(at, (leaf_byte, leaf));
            return;
        }
    }

    fn push_node(&mut self, label: Range<usize>) -> NodeId {
        self.nodes.push(TreeNode {
            label,
            children: Vec::new(),
        });
        self.nodes.len() - 1
    }

    /// The text the tree indexes
    pub fn text(&self) -> &'t [u8] {
        self.text
    }

    /// Number of nodes, root included
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of leaves (the root never counts)
    pub fn leaf_count(&self) -> usize {
        self.nodes
            .iter()
            .skip(1)
            .filter(|n| n.children.is_empty())
            .count()
    }
}

impl SuffixTreeView for SuffixTree<'_> {
    fn label(&self, node: NodeId) -> &[u8] {
        &self.text[self.nodes[node].label.clone()]
    }

    fn children(&self, node: NodeId) -> &[(u8, NodeId)] {
        &self.nodes[node].children
    }
}
