//! Types for suffix array indexing

use crate::index::types::{Offset, Sequence};
use std::ops::Deref;

/// Sorted suffix start offsets of one sequence
///
/// `sequence.suffix(array[i])` is lexicographically non-decreasing in `i`, and
/// every offset in `0..sequence.len()` appears exactly once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuffixArray {
    offsets: Vec<Offset>,
}

impl SuffixArray {
    pub(crate) fn from_offsets(offsets: Vec<Offset>) -> Self {
        Self { offsets }
    }

    pub fn as_slice(&self) -> &[Offset] {
        &self.offsets
    }

    pub fn into_inner(self) -> Vec<Offset> {
        self.offsets
    }

    /// Inverse permutation: `rank[offset]` is the position of `offset` in the array
    pub fn rank(&self) -> Vec<usize> {
        let mut rank = vec![0; self.offsets.len()];
        for (i, &offset) in self.offsets.iter().enumerate() {
            rank[offset] = i;
        }
        rank
    }

    /// Longest common prefix of each suffix with its predecessor (Kasai et al.)
    ///
    /// `lcp[0]` is always 0.
    pub fn lcp(&self, sequence: &Sequence) -> Vec<usize> {
        let s = sequence.as_bytes();
        let rank = self.rank();
        let mut lcp = vec![0; s.len()];
        let mut k = 0;

        for i in 0..s.len() {
            let x = rank[i];
            if x > 0 {
                let j = self.offsets[x - 1];
                while i + k < s.len() && j + k < s.len() && s[i + k] == s[j + k] {
                    k += 1;
                }
                lcp[x] = k;
            }
            k = k.saturating_sub(1);
        }

        lcp
    }
}

impl Deref for SuffixArray {
    type Target = [Offset];

    fn deref(&self) -> &[Offset] {
        &self.offsets
    }
}
