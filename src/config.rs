//! Application configuration
//!
//! Settings come from, in increasing priority: built-in defaults, the user
//! config file (`<config dir>/sufx/config.json`), a file passed with
//! `--config`, and individual command-line flags.

use crate::error::IndexError;
use crate::index::types::{DEFAULT_SENTINEL, Sequence};
use crate::utils::fasta::read_fasta;
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "sufx";
const CONFIG_FILE: &str = "config.json";

/// Persistent settings for index construction and query output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Terminal byte appended before suffix tree/array construction
    #[serde(default = "default_sentinel")]
    pub sentinel: u8,

    /// Append the sentinel in trie mode too
    #[serde(default)]
    pub trie_sentinel: bool,

    /// Report whether each array query actually occurs
    #[serde(default)]
    pub verify_matches: bool,

    /// Longest text the suffix trie will index (0 = unlimited)
    #[serde(default = "default_max_trie_len")]
    pub max_trie_len: usize,
}

fn default_sentinel() -> u8 {
    DEFAULT_SENTINEL
}

fn default_max_trie_len() -> usize {
    100_000
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sentinel: default_sentinel(),
            trie_sentinel: false,
            verify_matches: false,
            max_trie_len: default_max_trie_len(),
        }
    }
}

impl AppConfig {
    /// Load `path` if given, else the user config file if present, else defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match get_config_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: AppConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }
}

/// Location of the user config file, if the platform has a config directory
pub fn get_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_NAME).join(CONFIG_FILE))
}

/// Which index answers the queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Suffix trie; results are longest-match lengths
    Trie,
    /// Suffix array; results are insertion indices
    Array,
}

/// Where the reference text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Literal(String),
    /// FASTA file; only the first record is indexed
    Reference(PathBuf),
}

impl InputSource {
    /// Pick the literal string over the reference file when both are present
    pub fn from_args(string: Option<String>, reference: Option<PathBuf>) -> Result<Self, IndexError> {
        match (string, reference) {
            (Some(text), _) => Ok(InputSource::Literal(text)),
            (None, Some(path)) => Ok(InputSource::Reference(path)),
            (None, None) => Err(IndexError::MissingInput),
        }
    }

    /// Materialize the raw text, without any sentinel
    pub fn read(&self) -> Result<Vec<u8>> {
        match self {
            InputSource::Literal(text) => Ok(text.as_bytes().to_vec()),
            InputSource::Reference(path) => {
                let mut records = read_fasta(path)?;
                if records.is_empty() {
                    return Err(IndexError::EmptyReference(path.clone()).into());
                }
                Ok(records.swap_remove(0).sequence)
            }
        }
    }
}

/// Everything one invocation needs, resolved before any index is built
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub mode: Mode,
    pub source: InputSource,
    pub queries: Vec<String>,
    pub app: AppConfig,
    pub stats: bool,
    pub color: bool,
    pub verbose: bool,
}

impl RunConfig {
    /// Load the input text and terminate it as `mode` requires
    pub fn load_sequence(&self) -> Result<Sequence> {
        let text = self.source.read()?;

        match self.mode {
            Mode::Trie => {
                let cap = self.app.max_trie_len;
                if cap != 0 && text.len() > cap {
                    bail!(IndexError::InvalidSequence(format!(
                        "text of {} bytes exceeds the suffix trie limit of {} (max_trie_len)",
                        text.len(),
                        cap
                    )));
                }
                if self.app.trie_sentinel {
                    Ok(Sequence::with_sentinel(text, self.app.sentinel)?)
                } else {
                    Ok(Sequence::raw(text))
                }
            }
            Mode::Array => Ok(Sequence::with_sentinel(text, self.app.sentinel)?),
        }
    }
}
