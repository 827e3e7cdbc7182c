//! Inverted index.
//!
//! Maps each term to the set of documents containing it, with a normalized
//! term frequency per document (summing to 1.0, not raw occurrence counts),
//! plus per-document metadata. Removing a document erases its postings one
//! term at a time rather than dropping the whole postings map.

use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, OnceLock};

use crate::arena::StringArena;
use crate::error::SearchError;
use crate::status::DocumentStatus;
use crate::tokenize;

/// Per-document metadata and term-frequency map.
#[derive(Debug, Clone)]
pub struct DocumentData {
    pub rating: i64,
    pub status: DocumentStatus,
    /// term -> normalized term frequency within this document; sums to 1.0.
    pub freqs: HashMap<Arc<str>, f64>,
    /// The document's arena-backed body, kept alive only as long as this
    /// entry is; dropped along with it on `remove_document`.
    pub body: Arc<str>,
}

/// Dictionary-backed inverted index: `term -> (doc-id -> tf)` plus per-document
/// metadata and the live id set.
#[derive(Debug, Default)]
pub struct InvertedIndex {
    w2d: HashMap<Arc<str>, HashMap<i64, f64>>,
    docs: HashMap<i64, DocumentData>,
    ids: BTreeSet<i64>,
    arena: StringArena,
}

/// Arithmetic mean of `ratings`, truncated toward zero; 0 for an empty list.
///
/// Rust's integer `/` already truncates toward zero for negative operands,
/// so no special-casing is required here.
pub fn average_rating(ratings: &[i64]) -> i64 {
    if ratings.is_empty() {
        return 0;
    }
    let sum: i64 = ratings.iter().sum();
    sum / ratings.len() as i64
}

impl InvertedIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live documents.
    pub fn document_count(&self) -> usize {
        self.ids.len()
    }

    /// Ascending iterator over live document ids.
    pub fn ids(&self) -> impl Iterator<Item = i64> + '_ {
        self.ids.iter().copied()
    }

    /// Postings for `term`, if any document contains it.
    pub fn postings(&self, term: &str) -> Option<&HashMap<i64, f64>> {
        self.w2d.get(term)
    }

    /// Metadata for `id`, if live.
    pub fn document(&self, id: i64) -> Option<&DocumentData> {
        self.docs.get(&id)
    }

    /// Term-frequency map for `id`, or a canonical empty map when absent.
    ///
    /// Borrows the document's own freq map rather than copying it.
    pub fn word_frequencies(&self, id: i64) -> &HashMap<Arc<str>, f64> {
        static EMPTY: OnceLock<HashMap<Arc<str>, f64>> = OnceLock::new();
        match self.docs.get(&id) {
            Some(data) => &data.freqs,
            None => EMPTY.get_or_init(HashMap::new),
        }
    }

    /// Add a document, tokenizing `body` against `stop_words`.
    ///
    /// Fails with `InvalidId` when `id < 0` or already present, and with
    /// `InvalidWord` when `body` contains a token with a control character.
    /// All words are validated before any mutation, so a failed call leaves
    /// the index untouched. Also fails with `EmptyDocument` when every word
    /// in `body` is a stop-word, since TF normalization would otherwise
    /// divide by zero.
    pub fn add_document(
        &mut self,
        id: i64,
        body: &str,
        status: DocumentStatus,
        ratings: &[i64],
        stop_words: &std::collections::HashSet<String>,
    ) -> Result<(), SearchError> {
        if id < 0 || self.docs.contains_key(&id) {
            return Err(SearchError::InvalidId(id));
        }

        let mut kept: Vec<&str> = Vec::new();
        for word in tokenize::split(body) {
            if !tokenize::is_valid_word(word) {
                return Err(SearchError::InvalidWord(word.to_string()));
            }
            if !stop_words.contains(word) {
                kept.push(word);
            }
        }
        if kept.is_empty() {
            return Err(SearchError::EmptyDocument(id));
        }

        tracing::trace!(document_id = id, kept_words = kept.len(), "add_document");

        let body_handle = self.arena.intern_body(body);
        let inv = 1.0 / kept.len() as f64;
        let mut freqs: HashMap<Arc<str>, f64> = HashMap::new();
        for word in &kept {
            let handle = self.arena.intern_term(word);
            *freqs.entry(handle.clone()).or_insert(0.0) += inv;
            *self.w2d.entry(handle).or_default().entry(id).or_insert(0.0) += inv;
        }

        self.docs.insert(
            id,
            DocumentData {
                rating: average_rating(ratings),
                status,
                freqs,
                body: body_handle,
            },
        );
        self.ids.insert(id);
        Ok(())
    }

    /// Remove `id` and every posting it owns. No-op if `id` is not live.
    pub fn remove_document(&mut self, id: i64) {
        let Some(data) = self.docs.remove(&id) else {
            return;
        };
        tracing::trace!(document_id = id, "remove_document");
        for term in data.freqs.keys() {
            if let Some(postings) = self.w2d.get_mut(term.as_ref()) {
                postings.remove(&id);
                if postings.is_empty() {
                    self.w2d.remove(term.as_ref());
                    self.arena.release_term(term);
                }
            }
        }
        self.ids.remove(&id);
    }

    /// Remove `id` and every posting it owns, dispatching the per-term
    /// postings cleanup across a rayon thread pool.
    ///
    /// Parallel variant of `remove_document`. Equivalent outcome to the
    /// sequential path; only throughput differs.
    pub fn remove_document_parallel(&mut self, id: i64) {
        use rayon::prelude::*;

        let Some(data) = self.docs.remove(&id) else {
            return;
        };
        tracing::trace!(document_id = id, "remove_document_parallel");
        let terms: Vec<Arc<str>> = data.freqs.keys().cloned().collect();
        // Each term's tf only needs to be looked up once per removal, so the
        // parallel work is read-only: compute which terms would go empty,
        // then apply the (cheap, sequential) mutation.
        let to_drop: Vec<Arc<str>> = terms
            .par_iter()
            .filter(|term| {
                self.w2d
                    .get(term.as_ref())
                    .is_some_and(|postings| postings.len() == 1 && postings.contains_key(&id))
            })
            .cloned()
            .collect();
        for term in &terms {
            if let Some(postings) = self.w2d.get_mut(term.as_ref()) {
                postings.remove(&id);
            }
        }
        for term in &to_drop {
            self.w2d.remove(term.as_ref());
            self.arena.release_term(term);
        }
        self.ids.remove(&id);
    }
}
