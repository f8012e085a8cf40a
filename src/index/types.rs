//! Core type definitions shared by the trie, tree and array indexes.

use crate::error::{IndexError, Result};

/// Start position of a suffix in the indexed text
pub type Offset = usize;

/// Stable index of a node inside a suffix tree arena
pub type NodeId = usize;

/// Index of the root node in every suffix tree arena
pub const ROOT: NodeId = 0;

/// Default terminal byte appended before array construction.
/// Must sort below every byte of the indexed alphabet.
pub const DEFAULT_SENTINEL: u8 = b'$';

/// Immutable text to be indexed, optionally terminated by a sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    bytes: Vec<u8>,
    sentinel: Option<u8>,
}

impl Sequence {
    /// Wrap text as is, without a terminal marker
    pub fn raw(text: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: text.into(),
            sentinel: None,
        }
    }

    /// Append `sentinel` to `text`.
    ///
    /// Fails if the sentinel already occurs in the text or if the text holds a
    /// byte that sorts below it, since either would break the "unique minimal
    /// terminal" guarantee suffix arrays rely on.
    pub fn with_sentinel(text: impl Into<Vec<u8>>, sentinel: u8) -> Result<Self> {
        let mut bytes = text.into();

        if let Some(pos) = memchr::memchr(sentinel, &bytes) {
            return Err(IndexError::InvalidSequence(format!(
                "sentinel {:?} already occurs at offset {}",
                sentinel as char, pos
            )));
        }

        if let Some(pos) = bytes.iter().position(|&b| b < sentinel) {
            return Err(IndexError::InvalidSequence(format!(
                "byte {:?} at offset {} sorts below sentinel {:?}",
                bytes[pos] as char, pos, sentinel as char
            )));
        }

        bytes.push(sentinel);
        Ok(Self {
            bytes,
            sentinel: Some(sentinel),
        })
    }

    /// Full text including the sentinel, if any
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Text without the trailing sentinel
    pub fn text(&self) -> &[u8] {
        match self.sentinel {
            Some(_) => &self.bytes[..self.bytes.len() - 1],
            None => &self.bytes,
        }
    }

    #[inline]
    pub fn suffix(&self, offset: Offset) -> &[u8] {
        &self.bytes[offset..]
    }

    pub fn sentinel(&self) -> Option<u8> {
        self.sentinel
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
