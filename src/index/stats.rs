//! Structure statistics reported by `--stats`

use crate::index::suffix_array::SuffixArray;
use crate::index::suffix_tree::SuffixTree;
use crate::index::trie::SuffixTrie;

/// Shape of a built suffix trie
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrieStats {
    pub text_len: usize,
    pub nodes: usize,
    pub terminals: usize,
    pub max_depth: usize,
}

impl TrieStats {
    pub fn collect(trie: &SuffixTrie, text_len: usize) -> Self {
        Self {
            text_len,
            nodes: trie.node_count(),
            terminals: trie.suffix_count(),
            max_depth: trie.max_depth(),
        }
    }
}

/// Sizes of a suffix array and the tree it was derived from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayStats {
    pub text_len: usize,
    pub suffixes: usize,
    pub tree_nodes: usize,
    pub tree_leaves: usize,
}

impl ArrayStats {
    pub fn collect(tree: &SuffixTree<'_>, array: &SuffixArray) -> Self {
        Self {
            text_len: tree.text().len(),
            suffixes: array.len(),
            tree_nodes: tree.node_count(),
            tree_leaves: tree.leaf_count(),
        }
    }
}

/// Either kind of statistics, for uniform printing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexStats {
    Trie(TrieStats),
    Array(ArrayStats),
}

impl IndexStats {
    /// Label/value rows in display order
    pub fn rows(&self) -> Vec<(&'static str, usize)> {
        match self {
            IndexStats::Trie(s) => vec![
                ("Text length", s.text_len),
                ("Trie nodes", s.nodes),
                ("Suffix ends", s.terminals),
                ("Max depth", s.max_depth),
            ],
            IndexStats::Array(s) => vec![
                ("Text length", s.text_len),
                ("Suffixes", s.suffixes),
                ("Tree nodes", s.tree_nodes),
                ("Tree leaves", s.tree_leaves),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::suffix_array::SuffixArrayBuilder;
    use crate::index::types::Sequence;

    #[test]
    fn test_trie_stats() {
        let seq = Sequence::raw("abab");
        let trie = SuffixTrie::build(&seq);
        let stats = TrieStats::collect(&trie, seq.len());

        // root, a, ab, aba, abab, b, ba, bab
        assert_eq!(stats.nodes, 8);
        assert_eq!(stats.terminals, 4);
        assert_eq!(stats.max_depth, 4);
    }

    #[test]
    fn test_array_stats() {
        let seq = Sequence::with_sentinel("banana", b'$').unwrap();
        let tree = SuffixTree::build(&seq).unwrap();
        let sa = SuffixArrayBuilder::from_tree(&tree, seq.len()).unwrap();
        let stats = ArrayStats::collect(&tree, &sa);

        assert_eq!(stats.text_len, 7);
        assert_eq!(stats.suffixes, 7);
        assert_eq!(stats.tree_leaves, 7);
        // root + 7 leaves + inner "a", "na", "ana"
        assert_eq!(stats.tree_nodes, 11);
        assert_eq!(IndexStats::Array(stats).rows().len(), 4);
    }
}
