//! Error types for index construction and input loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while assembling inputs or building an index.
#[derive(Debug, Error)]
pub enum IndexError {
    /// The suffix tree handed to the array builder does not describe the text.
    #[error("malformed suffix tree: {0}")]
    InvariantViolation(String),

    /// Sentinel misuse or an input the structure refuses to index.
    #[error("invalid sequence: {0}")]
    InvalidSequence(String),

    /// Neither a literal string nor a reference file was supplied.
    #[error("no input sequence: pass --string <text> or --reference <fasta>")]
    MissingInput,

    /// The reference file parsed but held no records.
    #[error("reference file {} contains no FASTA records", .0.display())]
    EmptyReference(PathBuf),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, IndexError>;
