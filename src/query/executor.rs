use crate::config::{Mode, RunConfig};
use crate::index::stats::{ArrayStats, IndexStats, TrieStats};
use crate::index::suffix_array::{SuffixArray, SuffixArrayBuilder, SuffixArraySearcher};
use crate::index::suffix_tree::SuffixTree;
use crate::index::trie::SuffixTrie;
use crate::index::types::Sequence;
use crate::query::{Outcome, QueryResult};
use anyhow::{Context, Result};

/// The structure a run built, ready for queries
#[derive(Debug, Clone)]
pub enum BuiltIndex {
    Trie(SuffixTrie),
    Array(SuffixArray),
}

/// Query executor
///
/// Owns the sequence and the index built over it. Both are read-only after
/// construction.
#[derive(Debug, Clone)]
pub struct QueryExecutor {
    sequence: Sequence,
    index: BuiltIndex,
    stats: IndexStats,
    verify: bool,
}

impl QueryExecutor {
    /// Build the index `config.mode` selects over `sequence`
    pub fn build(config: &RunConfig, sequence: Sequence) -> Result<Self> {
        let (index, stats) = match config.mode {
            Mode::Trie => {
                let trie = SuffixTrie::build(&sequence);
                let stats = IndexStats::Trie(TrieStats::collect(&trie, sequence.len()));
                (BuiltIndex::Trie(trie), stats)
            }
            Mode::Array => {
                let tree = SuffixTree::build(&sequence).context("Failed to build suffix tree")?;
                let array = SuffixArrayBuilder::from_tree(&tree, sequence.len())
                    .context("Failed to derive suffix array")?;
                let stats = IndexStats::Array(ArrayStats::collect(&tree, &array));
                (BuiltIndex::Array(array), stats)
            }
        };

        Ok(Self {
            sequence,
            index,
            stats,
            verify: config.app.verify_matches,
        })
    }

    /// Answer one query
    pub fn execute(&self, query: &str) -> QueryResult {
        let pattern = query.as_bytes();
        let outcome = match &self.index {
            BuiltIndex::Trie(trie) => Outcome::MatchLength(trie.search(pattern)),
            BuiltIndex::Array(array) => {
                let searcher = SuffixArraySearcher::new(array, &self.sequence);
                let range = searcher.range(pattern);
                Outcome::Insertion {
                    index: range.start,
                    hits: self.verify.then_some(range.len()),
                }
            }
        };

        QueryResult {
            query: query.to_string(),
            outcome,
        }
    }

    /// Answer every query in order
    pub fn execute_all<S: AsRef<str>>(&self, queries: &[S]) -> Vec<QueryResult> {
        queries.iter().map(|q| self.execute(q.as_ref())).collect()
    }

    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    pub fn index(&self) -> &BuiltIndex {
        &self.index
    }

    pub fn stats(&self) -> IndexStats {
        self.stats
    }
}
