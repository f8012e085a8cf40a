//! Peripheral helpers: input loading and terminal progress.
//!
//! - [`fasta`] - FASTA reference file parsing
//! - [`progress`] - Construction spinner (no-op without the `progress` feature)

pub mod fasta;
pub mod progress;

pub use fasta::{FastaRecord, parse_fasta, read_fasta};
pub use progress::Spinner;
