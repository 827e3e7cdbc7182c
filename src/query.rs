//! Query parser.
//!
//! Classifies each whitespace-delimited token of a raw query into a
//! plus-term or minus-term bucket, discarding stop-words, and fails fast on
//! malformed tokens.

use std::collections::HashSet;

use crate::error::SearchError;
use crate::tokenize;

/// A parsed query: the terms that must be present (`plus`) and the terms
/// that must be absent (`minus`) for a document to match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedQuery {
    pub plus: Vec<String>,
    pub minus: Vec<String>,
}

/// Classify and validate a single query token.
///
/// Fails with `InvalidQueryWord` if the token is empty, bare `-`, begins with
/// `--`, or contains a character `< 0x20`. Returns `None` for the term when
/// the (stripped) token is a stop-word — the caller discards it.
fn parse_query_word<'a>(
    token: &'a str,
    stop_words: &HashSet<String>,
) -> Result<Option<(bool, &'a str)>, SearchError> {
    if token.is_empty() || token == "-" || token.starts_with("--") {
        return Err(SearchError::InvalidQueryWord(token.to_string()));
    }
    let (is_minus, word) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token),
    };
    if word.is_empty() || word.starts_with('-') || !tokenize::is_valid_word(word) {
        return Err(SearchError::InvalidQueryWord(token.to_string()));
    }
    if stop_words.contains(word) {
        return Ok(None);
    }
    Ok(Some((is_minus, word)))
}

/// Parse `text` into a deduplicated query: each bucket sorted and unique.
///
/// This is the default shape used by `find_top_documents` and the
/// sequential `match_document`.
pub fn parse(text: &str, stop_words: &HashSet<String>) -> Result<ParsedQuery, SearchError> {
    let mut query = parse_raw(text, stop_words)?;
    make_unique(&mut query.plus);
    make_unique(&mut query.minus);
    Ok(query)
}

/// Parse `text` preserving token order and duplicates.
///
/// Used only by the parallel matcher, which deduplicates its own output
/// after filtering.
pub fn parse_raw(text: &str, stop_words: &HashSet<String>) -> Result<ParsedQuery, SearchError> {
    let mut query = ParsedQuery::default();
    for token in tokenize::split(text) {
        if let Some((is_minus, word)) = parse_query_word(token, stop_words)? {
            if is_minus {
                query.minus.push(word.to_string());
            } else {
                query.plus.push(word.to_string());
            }
        }
    }
    Ok(query)
}

/// Sort `items` and remove adjacent duplicates in place.
pub fn make_unique(items: &mut Vec<String>) {
    items.sort_unstable();
    items.dedup();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stops(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn classifies_plus_and_minus() {
        let q = parse("curly and funny curly -not -not", &stops(&["and"])).unwrap();
        assert_eq!(q.plus, vec!["curly".to_string(), "funny".to_string()]);
        assert_eq!(q.minus, vec!["not".to_string()]);
    }

    #[test]
    fn rejects_bare_dash() {
        assert!(matches!(
            parse("-", &stops(&[])),
            Err(SearchError::InvalidQueryWord(_))
        ));
    }

    #[test]
    fn rejects_double_dash() {
        assert!(matches!(
            parse("--x", &stops(&[])),
            Err(SearchError::InvalidQueryWord(_))
        ));
    }

    #[test]
    fn rejects_control_characters() {
        assert!(matches!(
            parse("bad\u{0007}word", &stops(&[])),
            Err(SearchError::InvalidQueryWord(_))
        ));
    }

    #[test]
    fn raw_preserves_order_and_duplicates() {
        let q = parse_raw("curly and funny curly -not -not", &stops(&["and"])).unwrap();
        assert_eq!(q.plus, vec!["curly".to_string(), "funny".to_string(), "curly".to_string()]);
        assert_eq!(q.minus, vec!["not".to_string(), "not".to_string()]);
    }

    #[test]
    fn stop_words_are_discarded() {
        let q = parse("curly and -and", &stops(&["and"])).unwrap();
        assert_eq!(q.plus, vec!["curly".to_string()]);
        assert!(q.minus.is_empty());
    }
}
