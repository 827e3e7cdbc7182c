//! Matcher — `MatchDocument`.
//!
//! The sequential path short-circuits to an empty result the moment any
//! minus-term is present in the document, and otherwise returns the
//! plus-terms that hit, in parsed order. The parallel path parses the
//! non-deduplicated query so it can use a parallel `any` for the early-out
//! and a parallel filter plus sort-dedup for the plus-term matches, instead
//! of touching a shared set.

use std::collections::HashSet;

use crate::error::SearchError;
use crate::index::InvertedIndex;
use crate::query;
use crate::status::DocumentStatus;

/// Sequential `MatchDocument`: parses the deduplicated query, short-circuits
/// to `(vec![], status)` if any minus-term is present in the document, and
/// otherwise returns the subset of plus-terms present, in parsed order.
pub fn match_document(
    index: &InvertedIndex,
    text: &str,
    stop_words: &HashSet<String>,
    id: i64,
) -> Result<(Vec<String>, DocumentStatus), SearchError> {
    let parsed = query::parse(text, stop_words)?;
    let Some(data) = index.document(id) else {
        return Ok((Vec::new(), DocumentStatus::Removed));
    };

    if parsed.minus.iter().any(|term| data.freqs.contains_key(term.as_str())) {
        tracing::trace!(document_id = id, "match_document: minus-term hit");
        return Ok((Vec::new(), data.status));
    }

    let matched: Vec<String> = parsed
        .plus
        .into_iter()
        .filter(|term| data.freqs.contains_key(term.as_str()))
        .collect();
    Ok((matched, data.status))
}

/// Parallel `MatchDocument`: parses the raw (non-deduplicated) query, checks
/// minus-terms with a parallel `any`, filters plus-terms in parallel, and
/// deduplicates the surviving matches by sort+adjacent-unique.
pub fn match_document_parallel(
    index: &InvertedIndex,
    text: &str,
    stop_words: &HashSet<String>,
    id: i64,
) -> Result<(Vec<String>, DocumentStatus), SearchError> {
    use rayon::prelude::*;

    let parsed = query::parse_raw(text, stop_words)?;
    let Some(data) = index.document(id) else {
        return Ok((Vec::new(), DocumentStatus::Removed));
    };

    let minus_hit = parsed
        .minus
        .par_iter()
        .any(|term| data.freqs.contains_key(term.as_str()));
    if minus_hit {
        tracing::trace!(document_id = id, "match_document_parallel: minus-term hit");
        return Ok((Vec::new(), data.status));
    }

    let mut matched: Vec<String> = parsed
        .plus
        .par_iter()
        .filter(|term| data.freqs.contains_key(term.as_str()))
        .cloned()
        .collect();
    query::make_unique(&mut matched);
    Ok((matched, data.status))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::DocumentStatus;

    fn build(stops: &HashSet<String>) -> InvertedIndex {
        let mut index = InvertedIndex::new();
        index
            .add_document(1, "funny pet and nasty rat", DocumentStatus::Actual, &[1, 2], stops)
            .unwrap();
        index
            .add_document(2, "funny pet with curly hair", DocumentStatus::Actual, &[1, 2], stops)
            .unwrap();
        index
            .add_document(
                3,
                "funny pet and not very nasty rat",
                DocumentStatus::Actual,
                &[1, 2],
                stops,
            )
            .unwrap();
        index
    }

    fn stops() -> HashSet<String> {
        ["and".to_string(), "with".to_string()].into_iter().collect()
    }

    #[test]
    fn scenario_one_doc_one_matches_funny_only() {
        let stops = stops();
        let index = build(&stops);
        let (matched, status) =
            match_document(&index, "curly and funny curly -not -not", &stops, 1).unwrap();
        assert_eq!(matched, vec!["funny".to_string()]);
        assert_eq!(status, DocumentStatus::Actual);
    }

    #[test]
    fn scenario_one_doc_two_parallel_matches_curly_and_funny() {
        let stops = stops();
        let index = build(&stops);
        let (mut matched, status) =
            match_document_parallel(&index, "curly and funny curly -not -not", &stops, 2).unwrap();
        matched.sort_unstable();
        assert_eq!(matched, vec!["curly".to_string(), "funny".to_string()]);
        assert_eq!(status, DocumentStatus::Actual);
    }

    #[test]
    fn scenario_one_doc_three_parallel_minus_hit_is_empty() {
        let stops = stops();
        let index = build(&stops);
        let (matched, status) =
            match_document_parallel(&index, "curly and funny curly -not -not", &stops, 3).unwrap();
        assert!(matched.is_empty());
        assert_eq!(status, DocumentStatus::Actual);
    }
}
