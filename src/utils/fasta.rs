//! Minimal FASTA reader
//!
//! `>` lines start a record and carry its header. Sequence lines are joined
//! with whitespace removed. Blank lines and `;` comment lines are skipped.

use anyhow::{Context, Result, bail};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// One `>header` record and its sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    pub header: String,
    pub sequence: Vec<u8>,
}

/// Read every record of the FASTA file at `path`
pub fn read_fasta(path: &Path) -> Result<Vec<FastaRecord>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open reference file {}", path.display()))?;
    parse_fasta(BufReader::new(file))
        .with_context(|| format!("Failed to read reference file {}", path.display()))
}

/// Parse FASTA records from any buffered reader
pub fn parse_fasta<R: BufRead>(reader: R) -> Result<Vec<FastaRecord>> {
    let mut records: Vec<FastaRecord> = Vec::new();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end();

        if let Some(header) = line.strip_prefix('>') {
            records.push(FastaRecord {
                header: header.trim().to_string(),
                sequence: Vec::new(),
            });
            continue;
        }

        if line.trim().is_empty() || line.starts_with(';') {
            continue;
        }

        match records.last_mut() {
            Some(record) => record
                .sequence
                .extend(line.bytes().filter(|b| !b.is_ascii_whitespace())),
            None => bail!("line {}: sequence data before the first '>' header", line_no + 1),
        }
    }

    Ok(records)
}
