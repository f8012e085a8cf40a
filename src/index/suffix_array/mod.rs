//! Suffix array indexing module
//!
//! This module provides O(m log n) exact substring search using suffix arrays
//! derived from a compressed suffix tree.
//!
//! ## Architecture
//!
//! - `builder`: Derives suffix arrays from a [`SuffixTreeView`](crate::index::SuffixTreeView)
//! - `searcher`: Lower-bound binary search and verified lookups
//! - `types`: Core type definitions

pub mod builder;
pub mod searcher;
pub mod types;

// Re-exports for convenience
pub use builder::SuffixArrayBuilder;
pub use searcher::{SuffixArraySearcher, search};
pub use types::SuffixArray;
