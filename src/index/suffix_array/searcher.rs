//! Suffix array searcher
//!
//! Binary search over a suffix array with O(m log n) comparisons per query.

use super::types::SuffixArray;
use crate::index::types::{Offset, Sequence};
use std::ops::Range;

/// Leftmost index `i` with `text[array[i]..] >= query`, or `array.len()` if
/// every suffix compares less.
///
/// Suffixes and query are compared as whole strings, so this is a plain
/// insertion point: it does not say whether `query` actually occurs. Use
/// [`SuffixArraySearcher::locate`] for a verified lookup.
pub fn search(array: &[Offset], text: &[u8], query: &[u8]) -> usize {
    let mut lo = 0;
    let mut hi = array.len();

    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if &text[array[mid]..] < query {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }

    lo
}

/// Query interface over a built suffix array and its sequence
#[derive(Debug, Clone, Copy)]
pub struct SuffixArraySearcher<'a> {
    array: &'a [Offset],
    text: &'a [u8],
}

impl<'a> SuffixArraySearcher<'a> {
    pub fn new(array: &'a SuffixArray, sequence: &'a Sequence) -> Self {
        Self {
            array: array.as_slice(),
            text: sequence.as_bytes(),
        }
    }

    /// Lower-bound insertion index of `query`, see [`search`]
    pub fn search(&self, query: &[u8]) -> usize {
        search(self.array, self.text, query)
    }

    /// Index of the first suffix starting with `query`, if any
    pub fn locate(&self, query: &[u8]) -> Option<usize> {
        let i = self.search(query);
        (i < self.array.len() && self.text[self.array[i]..].starts_with(query)).then_some(i)
    }

    /// Range `[lo, hi)` of array indices whose suffixes start with `query`
    ///
    /// Empty (at the insertion point) when `query` does not occur. The empty
    /// query is a prefix of every suffix.
    pub fn range(&self, query: &[u8]) -> Range<usize> {
        let lo = self.search(query);
        let hi = self.upper_bound(query, lo);
        lo..hi
    }

    /// Find first index at or after `start` whose suffix does NOT start with `query`
    fn upper_bound(&self, query: &[u8], start: usize) -> usize {
        let mut lo = start;
        let mut hi = self.array.len();

        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if self.text[self.array[mid]..].starts_with(query) {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }

        lo
    }

    /// Number of occurrences of `query` in the text
    pub fn count(&self, query: &[u8]) -> usize {
        self.range(query).len()
    }

    pub fn contains(&self, query: &[u8]) -> bool {
        self.locate(query).is_some()
    }

    /// Text offsets of every occurrence of `query`, ascending
    pub fn positions(&self, query: &[u8]) -> Vec<Offset> {
        let mut positions = self.array[self.range(query)].to_vec();
        positions.sort_unstable();
        positions
    }
}
