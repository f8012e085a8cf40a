//! Suffix trie
//!
//! Stores every suffix of the text as an explicit root-to-node path, one edge
//! per byte. Construction is O(n²) in both time and space, so this structure
//! is a reference baseline rather than a production index; the suffix array
//! answers the same questions in O(n) space.
//!
//! Nodes live in a flat arena and refer to their children by [`NodeId`]. Every
//! node except the root has exactly one parent, so the arena is a tree with no
//! sharing, and dropping it never recurses.

use super::types::{NodeId, ROOT, Sequence};

/// One trie node: sorted child edges plus a suffix-end marker
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuffixTrieNode {
    /// Child edges ordered by byte
    children: Vec<(u8, NodeId)>,
    /// A suffix of the text ends exactly here
    terminal: bool,
}

impl SuffixTrieNode {
    #[inline]
    fn child(&self, byte: u8) -> Option<NodeId> {
        self.children
            .binary_search_by_key(&byte, |&(b, _)| b)
            .ok()
            .map(|i| self.children[i].1)
    }

    /// Child edges in ascending byte order
    pub fn children(&self) -> impl ExactSizeIterator<Item = (u8, NodeId)> + '_ {
        self.children.iter().copied()
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Explicit trie over all suffixes of a sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixTrie {
    nodes: Vec<SuffixTrieNode>,
}

impl SuffixTrie {
    /// Insert every suffix `text[i..]`, `i` in `0..len`, marking where each ends.
    ///
    /// An empty sequence yields a lone root with no children.
    pub fn build(sequence: &Sequence) -> Self {
        let text = sequence.as_bytes();
        let mut trie = Self {
            nodes: vec![SuffixTrieNode::default()],
        };

        for start in 0..text.len() {
            let end = text[start..]
                .iter()
                .fold(ROOT, |node, &byte| trie.get_or_add(node, byte));
            trie.nodes[end].terminal = true;
        }

        trie
    }

    fn get_or_add(&mut self, node: NodeId, byte: u8) -> NodeId {
        match self.nodes[node]
            .children
            .binary_search_by_key(&byte, |&(b, _)| b)
        {
            Ok(i) => self.nodes[node].children[i].1,
            Err(i) => {
                let child = self.nodes.len();
                self.nodes.push(SuffixTrieNode::default());
                self.nodes[node].children.insert(i, (byte, child));
                child
            }
        }
    }

    /// Length of the longest prefix of `pattern` spelled by a path from the root.
    ///
    /// Stops at the first byte with no matching edge. The result never exceeds
    /// `pattern.len()`, and equals it exactly when `pattern` occurs in the text.
    pub fn search(&self, pattern: &[u8]) -> usize {
        let mut node = ROOT;
        let mut matched = 0;

        for &byte in pattern {
            match self.nodes[node].child(byte) {
                Some(child) => {
                    node = child;
                    matched += 1;
                }
                None => break,
            }
        }

        matched
    }

    /// Whether `pattern` is a substring of the indexed text
    pub fn contains(&self, pattern: &[u8]) -> bool {
        self.search(pattern) == pattern.len()
    }

    pub fn root(&self) -> &SuffixTrieNode {
        &self.nodes[ROOT]
    }

    pub fn node(&self, id: NodeId) -> &SuffixTrieNode {
        &self.nodes[id]
    }

    /// Number of nodes, root included
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of nodes carrying a suffix-end marker
    pub fn suffix_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.terminal).count()
    }

    /// Length of the longest root-to-node path
    pub fn max_depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(ROOT, 0usize)];

        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            stack.extend(self.nodes[node].children().map(|(_, c)| (c, depth + 1)));
        }

        deepest
    }
}
