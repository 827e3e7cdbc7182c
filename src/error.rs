//! Error types for rank-lexical.

use std::fmt;

/// Errors that can occur while building or querying the index.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchError {
    /// A stop word contains a control character (byte `< 0x20`).
    InvalidStopWords(String),
    /// A document id was negative or already present in the index.
    InvalidId(i64),
    /// A document body contained a token with a control character.
    InvalidWord(String),
    /// A query token was empty, bare `-`, `--...`, or contained a control character.
    InvalidQueryWord(String),
    /// A document body contained no words after stop-word removal, which
    /// would divide by zero during TF normalization.
    EmptyDocument(i64),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::InvalidStopWords(word) => {
                write!(f, "invalid stop word: {:?}", word)
            }
            SearchError::InvalidId(id) => write!(f, "invalid document id: {}", id),
            SearchError::InvalidWord(word) => write!(f, "invalid word in document: {:?}", word),
            SearchError::InvalidQueryWord(word) => write!(f, "invalid query word: {:?}", word),
            SearchError::EmptyDocument(id) => write!(
                f,
                "document {} has no words left after stop-word removal",
                id
            ),
        }
    }
}

impl std::error::Error for SearchError {}
