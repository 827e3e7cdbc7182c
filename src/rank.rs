//! Ranker — `FindTopDocuments`.
//!
//! Accumulates a per-document TF-IDF score: each plus-term contributes
//! `tf * ln(N / document_frequency)` to every matching document, minus-terms
//! erase a document's score outright rather than penalizing it, and results
//! are sorted by descending relevance with an epsilon-aware tie-break on
//! rating before truncating to the configured cap.

use crate::concurrent_map::ConcurrentMap;
use crate::config::RankingConfig;
use crate::error::SearchError;
use crate::index::InvertedIndex;
use crate::query;
use crate::status::DocumentStatus;
use std::collections::{HashMap, HashSet};

/// A single ranked search result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedDocument {
    pub id: i64,
    pub relevance: f64,
    pub rating: i64,
}

/// `(id, status, rating) -> bool` predicate used to filter candidates before
/// they're scored.
pub type Predicate<'a> = dyn Fn(i64, DocumentStatus, i64) -> bool + 'a;

/// Predicate matching documents with `DocumentStatus::Actual`, the default
/// used by the status-free overload.
pub fn actual_only(_id: i64, status: DocumentStatus, _rating: i64) -> bool {
    status == DocumentStatus::Actual
}

/// Build a predicate matching a single status.
pub fn status_equals(target: DocumentStatus) -> impl Fn(i64, DocumentStatus, i64) -> bool {
    move |_id, status, _rating| status == target
}

fn idf(index: &InvertedIndex, term: &str) -> Option<f64> {
    let postings = index.postings(term)?;
    if postings.is_empty() {
        return None;
    }
    let n = index.document_count() as f64;
    Some((n / postings.len() as f64).ln())
}

/// Sort `results` by descending relevance, breaking ties within
/// `config.relevance_epsilon` by descending rating, and truncate to
/// `config.max_results`.
fn finish(mut results: Vec<RankedDocument>, config: &RankingConfig) -> Vec<RankedDocument> {
    results.sort_by(|a, b| {
        if (a.relevance - b.relevance).abs() < config.relevance_epsilon {
            b.rating.cmp(&a.rating)
        } else {
            b.relevance
                .partial_cmp(&a.relevance)
                .unwrap_or(std::cmp::Ordering::Equal)
        }
    });
    results.truncate(config.max_results);
    results
}

/// Sequential `FindTopDocuments`: parse `text`, accumulate TF-IDF relevance
/// for every live document matching `predicate`, and return at most
/// `config.max_results` results sorted by descending relevance.
pub fn find_top_documents(
    index: &InvertedIndex,
    text: &str,
    stop_words: &HashSet<String>,
    predicate: &Predicate<'_>,
    config: &RankingConfig,
) -> Result<Vec<RankedDocument>, SearchError> {
    let parsed = query::parse(text, stop_words)?;
    let mut acc: HashMap<i64, f64> = HashMap::new();

    for term in &parsed.plus {
        let Some(postings) = index.postings(term) else {
            continue;
        };
        let Some(idf) = idf(index, term) else {
            continue;
        };
        for (&id, &tf) in postings {
            let Some(data) = index.document(id) else {
                continue;
            };
            if predicate(id, data.status, data.rating) {
                *acc.entry(id).or_insert(0.0) += tf * idf;
            }
        }
    }

    for term in &parsed.minus {
        if let Some(postings) = index.postings(term) {
            for &id in postings.keys() {
                acc.remove(&id);
            }
        }
    }

    let results = acc
        .into_iter()
        .filter_map(|(id, relevance)| {
            index.document(id).map(|data| RankedDocument {
                id,
                relevance,
                rating: data.rating,
            })
        })
        .collect();

    tracing::debug!(query = text, "find_top_documents");
    Ok(finish(results, config))
}

/// Parallel `FindTopDocuments`: identical contract to the sequential path.
/// Accumulating plus-term contributions is dispatched across a rayon thread
/// pool into a sharded [`ConcurrentMap`]; minus-term filtering, sorting, and
/// truncation stay sequential.
pub fn find_top_documents_parallel(
    index: &InvertedIndex,
    text: &str,
    stop_words: &HashSet<String>,
    predicate: &(dyn Fn(i64, DocumentStatus, i64) -> bool + Sync),
    config: &RankingConfig,
) -> Result<Vec<RankedDocument>, SearchError> {
    use rayon::prelude::*;

    let parsed = query::parse(text, stop_words)?;
    let acc: ConcurrentMap<f64> = ConcurrentMap::with_bucket_count(config.shard_count);

    parsed.plus.par_iter().for_each(|term| {
        let Some(postings) = index.postings(term) else {
            return;
        };
        let Some(idf) = idf(index, term) else {
            return;
        };
        for (&id, &tf) in postings {
            let Some(data) = index.document(id) else {
                continue;
            };
            if predicate(id, data.status, data.rating) {
                acc.with_mut(id, || 0.0, |v| *v += tf * idf);
            }
        }
    });

    let mut merged = acc.build_ordinary_map();
    for term in &parsed.minus {
        if let Some(postings) = index.postings(term) {
            for &id in postings.keys() {
                merged.remove(&id);
            }
        }
    }

    let results = merged
        .into_iter()
        .filter_map(|(id, relevance)| {
            index.document(id).map(|data| RankedDocument {
                id,
                relevance,
                rating: data.rating,
            })
        })
        .collect();

    tracing::debug!(query = text, "find_top_documents_parallel");
    Ok(finish(results, config))
}
