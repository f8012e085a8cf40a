pub mod executor;

pub use executor::{BuiltIndex, QueryExecutor};

use std::fmt;

/// What one query produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Suffix trie: length of the longest matched prefix
    MatchLength(usize),
    /// Suffix array: lower-bound insertion index, plus the occurrence count
    /// when verification was requested
    Insertion { index: usize, hits: Option<usize> },
}

/// A query paired with its outcome, displayed as `<query> : <result>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResult {
    pub query: String,
    pub outcome: Outcome,
}

impl fmt::Display for QueryResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            Outcome::MatchLength(len) => write!(f, "{} : {}", self.query, len),
            Outcome::Insertion { index, hits: None } => write!(f, "{} : {}", self.query, index),
            Outcome::Insertion {
                index,
                hits: Some(0),
            } => write!(f, "{} : {} (absent)", self.query, index),
            Outcome::Insertion {
                index,
                hits: Some(n),
            } => write!(f, "{} : {} ({} hits)", self.query, index, n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(outcome: Outcome) -> String {
        QueryResult {
            query: "ana".into(),
            outcome,
        }
        .to_string()
    }

    #[test]
    fn test_display() {
        assert_eq!(result(Outcome::MatchLength(3)), "ana : 3");
        assert_eq!(result(Outcome::Insertion { index: 2, hits: None }), "ana : 2");
        assert_eq!(
            result(Outcome::Insertion { index: 2, hits: Some(2) }),
            "ana : 2 (2 hits)"
        );
        assert_eq!(
            result(Outcome::Insertion { index: 4, hits: Some(0) }),
            "ana : 4 (absent)"
        );
    }
}
