//! Search server facade.
//!
//! A single type that owns the stop-word set and the inverted index and
//! exposes the engine's public operations, wiring together the query parser,
//! index, ranker, and matcher. Policy-tagged overloads are collapsed into
//! `*_with_policy` methods taking an explicit `ExecutionPolicy` rather than a
//! ladder of generic overloads.

use std::collections::HashSet;

use crate::config::RankingConfig;
use crate::error::SearchError;
use crate::index::InvertedIndex;
use crate::matcher;
use crate::policy::ExecutionPolicy;
use crate::rank::{self, Predicate, RankedDocument};
use crate::status::DocumentStatus;
use crate::tokenize;

/// Owns the stop-word set and inverted index, and exposes the engine's
/// public operations.
pub struct SearchServer {
    stop_words: HashSet<String>,
    index: InvertedIndex,
    config: RankingConfig,
}

impl SearchServer {
    /// Build a server from a space-separated stop-word string, using the
    /// default [`RankingConfig`].
    pub fn new(stop_words: &str) -> Result<Self, SearchError> {
        Self::with_config(stop_words.split(' ').filter(|w| !w.is_empty()), RankingConfig::default())
    }

    /// Build a server from any iterable of stop-word strings, validating
    /// each with the tokenizer's character check and deduplicating, using
    /// the default [`RankingConfig`].
    pub fn from_words<I, S>(stop_words: I) -> Result<Self, SearchError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_config(stop_words, RankingConfig::default())
    }

    /// Build a server from any iterable of stop-word strings and an
    /// explicit [`RankingConfig`].
    pub fn with_config<I, S>(stop_words: I, config: RankingConfig) -> Result<Self, SearchError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = HashSet::new();
        for word in stop_words {
            let word = word.as_ref();
            if word.is_empty() {
                continue;
            }
            if !tokenize::is_valid_word(word) {
                return Err(SearchError::InvalidStopWords(word.to_string()));
            }
            words.insert(word.to_string());
        }
        Ok(Self {
            stop_words: words,
            index: InvertedIndex::new(),
            config,
        })
    }

    /// Number of live documents.
    pub fn document_count(&self) -> usize {
        self.index.document_count()
    }

    /// Ascending iterator over live document ids.
    pub fn ids(&self) -> impl Iterator<Item = i64> + '_ {
        self.index.ids()
    }

    /// Term-frequency map for `id`, or empty if `id` is not live.
    pub fn word_frequencies(&self, id: i64) -> &std::collections::HashMap<std::sync::Arc<str>, f64> {
        self.index.word_frequencies(id)
    }

    /// Add a document under the server's stop-word set.
    pub fn add_document(
        &mut self,
        id: i64,
        body: &str,
        status: DocumentStatus,
        ratings: &[i64],
    ) -> Result<(), SearchError> {
        self.index.add_document(id, body, status, ratings, &self.stop_words)
    }

    /// Remove a document sequentially. No-op if `id` is not live.
    pub fn remove_document(&mut self, id: i64) {
        self.index.remove_document(id);
    }

    /// Remove a document, choosing the sequential or rayon-parallel path.
    pub fn remove_document_with_policy(&mut self, policy: ExecutionPolicy, id: i64) {
        match policy {
            ExecutionPolicy::Sequential => self.index.remove_document(id),
            ExecutionPolicy::Parallel => self.index.remove_document_parallel(id),
        }
    }

    /// `FindTopDocuments` restricted to `DocumentStatus::Actual`.
    pub fn find_top_documents(&self, text: &str) -> Result<Vec<RankedDocument>, SearchError> {
        self.find_top_documents_by(text, &rank::actual_only)
    }

    /// `FindTopDocuments` restricted to a single status.
    pub fn find_top_documents_with_status(
        &self,
        text: &str,
        status: DocumentStatus,
    ) -> Result<Vec<RankedDocument>, SearchError> {
        self.find_top_documents_by(text, &rank::status_equals(status))
    }

    /// `FindTopDocuments` with an arbitrary `(id, status, rating) -> bool` predicate.
    pub fn find_top_documents_by(
        &self,
        text: &str,
        predicate: &Predicate<'_>,
    ) -> Result<Vec<RankedDocument>, SearchError> {
        rank::find_top_documents(&self.index, text, &self.stop_words, predicate, &self.config)
    }

    /// Parallel `FindTopDocuments` restricted to `DocumentStatus::Actual`.
    pub fn find_top_documents_parallel(
        &self,
        text: &str,
    ) -> Result<Vec<RankedDocument>, SearchError> {
        self.find_top_documents_parallel_by(text, &rank::actual_only)
    }

    /// Parallel `FindTopDocuments` with an arbitrary predicate (must be `Sync`
    /// since it's shared across the rayon thread pool).
    pub fn find_top_documents_parallel_by(
        &self,
        text: &str,
        predicate: &(dyn Fn(i64, DocumentStatus, i64) -> bool + Sync),
    ) -> Result<Vec<RankedDocument>, SearchError> {
        rank::find_top_documents_parallel(&self.index, text, &self.stop_words, predicate, &self.config)
    }

    /// Sequential `MatchDocument`.
    pub fn match_document(
        &self,
        text: &str,
        id: i64,
    ) -> Result<(Vec<String>, DocumentStatus), SearchError> {
        matcher::match_document(&self.index, text, &self.stop_words, id)
    }

    /// Parallel `MatchDocument`.
    pub fn match_document_parallel(
        &self,
        text: &str,
        id: i64,
    ) -> Result<(Vec<String>, DocumentStatus), SearchError> {
        matcher::match_document_parallel(&self.index, text, &self.stop_words, id)
    }

    /// Borrow of the server's stop-word set, for helpers that need it
    /// directly (`process_queries`, `RequestQueue`).
    pub fn stop_words(&self) -> &HashSet<String> {
        &self.stop_words
    }

    /// Borrow of the server's ranking configuration.
    pub fn config(&self) -> &RankingConfig {
        &self.config
    }

    /// Borrow of the underlying index, for helpers that need direct access
    /// (`remove_duplicates`, `process_queries`).
    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }

    /// Mutable borrow of the underlying index.
    pub fn index_mut(&mut self) -> &mut InvertedIndex {
        &mut self.index
    }
}
