pub mod stats;
pub mod suffix_array;
pub mod suffix_tree;
pub mod trie;
pub mod types;

pub use stats::{ArrayStats, IndexStats, TrieStats};
pub use suffix_array::{SuffixArray, SuffixArrayBuilder, SuffixArraySearcher};
pub use suffix_tree::{SuffixTree, SuffixTreeView};
pub use trie::{SuffixTrie, SuffixTrieNode};
pub use types::*;
