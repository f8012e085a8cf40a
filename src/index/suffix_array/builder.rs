//! Suffix array builder
//!
//! Derives a suffix array from a compressed suffix tree by depth-first
//! traversal:
//! 1. Walk from the root, accumulating edge label lengths
//! 2. At each leaf, the accumulated length is the suffix length, so the
//!    suffix starts at `text_len - depth`
//! 3. Visit children in ascending first-byte order, which yields leaves in
//!    lexicographic order without a separate sort
//!
//! The traversal uses an explicit stack, so tree depth is bounded only by
//! memory, not by the call stack.

use super::types::SuffixArray;
use crate::error::{IndexError, Result};
use crate::index::suffix_tree::SuffixTreeView;
use crate::index::types::{NodeId, Offset, ROOT, Sequence};

/// Builds suffix arrays from suffix tree views
pub struct SuffixArrayBuilder;

impl SuffixArrayBuilder {
    /// Collect leaf offsets of `tree` in lexicographic order.
    ///
    /// `text_len` is the length of the indexed text, sentinel included. The
    /// tree must have exactly that many leaves, each at a distinct string
    /// depth in `1..=text_len`; anything else is reported as
    /// [`IndexError::InvariantViolation`]. A root with no children yields an
    /// empty array.
    pub fn from_tree<V: SuffixTreeView + ?Sized>(tree: &V, text_len: usize) -> Result<SuffixArray> {
        let mut offsets: Vec<Offset> = Vec::with_capacity(text_len);
        let mut seen = vec![false; text_len];
        let mut stack: Vec<(NodeId, usize)> = vec![(ROOT, 0)];
        let mut scratch: Vec<(u8, NodeId)> = Vec::new();

        while let Some((node, depth)) = stack.pop() {
            let children = tree.children(node);

            if children.is_empty() {
                if node == ROOT {
                    continue;
                }

                let offset = text_len.checked_sub(depth).ok_or_else(|| {
                    IndexError::InvariantViolation(format!(
                        "leaf {node} at depth {depth} is deeper than the text ({text_len})"
                    ))
                })?;

                if depth == 0 || std::mem::replace(&mut seen[offset], true) {
                    return Err(IndexError::InvariantViolation(format!(
                        "leaf {node} maps to offset {offset}, which is already taken or empty"
                    )));
                }

                offsets.push(offset);
                continue;
            }

            // Pushed in reverse so the smallest byte is popped first
            scratch.clear();
            scratch.extend_from_slice(children);
            if !scratch.is_sorted_by_key(|&(b, _)| b) {
                scratch.sort_unstable_by_key(|&(b, _)| b);
            }
            for &(_, child) in scratch.iter().rev() {
                stack.push((child, depth + tree.label(child).len()));
            }
        }

        if offsets.len() != text_len {
            return Err(IndexError::InvariantViolation(format!(
                "found {} leaves, expected {}",
                offsets.len(),
                text_len
            )));
        }

        Ok(SuffixArray::from_offsets(offsets))
    }

    /// Build by sorting all suffix offsets with direct comparisons.
    ///
    /// Time: O(n² log n) worst case; used to cross-check tree-derived arrays.
    pub fn by_sorting(sequence: &Sequence) -> SuffixArray {
        let text = sequence.as_bytes();
        let mut sa: Vec<Offset> = (0..text.len()).collect();
        sa.sort_unstable_by(|&a, &b| compare_suffixes(text, a, b));
        SuffixArray::from_offsets(sa)
    }
}

/// Compare two suffixes lexicographically
#[inline]
fn compare_suffixes(text: &[u8], a: usize, b: usize) -> std::cmp::Ordering {
    text[a..].cmp(&text[b..])
}
