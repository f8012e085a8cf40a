//! # SUFX - Suffix Trie and Suffix Array Indexes
//!
//! SUFX builds exact-match indexes over a fixed reference sequence (typically
//! DNA text) and answers substring/prefix queries against it.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`index`] - Suffix trie, compressed suffix tree, suffix array builder and searcher
//! - [`query`] - Per-run index construction and query answering
//! - [`config`] - Persistent settings and the per-run configuration
//! - [`output`] - Result and statistics formatting
//! - [`utils`] - FASTA loading and progress display
//!
//! ## Quick Start
//!
//! ```
//! use sufx::index::{Sequence, SuffixArrayBuilder, SuffixArraySearcher, SuffixTree, SuffixTrie};
//!
//! // Suffix trie: longest prefix of the query found in the text
//! let trie = SuffixTrie::build(&Sequence::raw("abab"));
//! assert_eq!(trie.search(b"abc"), 2);
//!
//! // Suffix array, derived from a compressed suffix tree
//! let seq = Sequence::with_sentinel("banana", b'$').unwrap();
//! let tree = SuffixTree::build(&seq).unwrap();
//! let sa = SuffixArrayBuilder::from_tree(&tree, seq.len()).unwrap();
//! assert_eq!(sa.as_slice(), &[6, 5, 3, 1, 0, 4, 2]);
//!
//! let searcher = SuffixArraySearcher::new(&sa, &seq);
//! assert_eq!(searcher.search(b"ana"), 2);
//! assert_eq!(searcher.count(b"ana"), 2);
//! ```
//!
//! ## Performance
//!
//! Both the trie and the bundled suffix tree builder are O(n²) in the worst
//! case. The suffix array itself is O(n) space and answers queries in
//! O(m log n) byte comparisons.

pub mod config;
pub mod error;
pub mod index;
pub mod output;
pub mod query;
pub mod utils;

pub use error::IndexError;
