//! In-memory full-text search for short documents: boolean plus/minus
//! queries evaluated over a dictionary-backed inverted index, ranked by
//! TF-IDF.
//!
//! # Design
//!
//! This crate focuses on the **index core**: the inverted index, the query
//! parser and evaluator, TF-IDF ranking with status/predicate filtering,
//! document matching, deduplication, the concurrent evaluation path, and a
//! request-rate accounting window. It deliberately stays out of:
//! - command-line drivers and demo/benchmark harnesses,
//! - result pretty-printing,
//! - persistence (the engine is entirely in-memory),
//! - logging/timing infrastructure beyond the `tracing` hooks the core emits.
//!
//! Non-goals: stemming, phrase queries, fuzzy matching, multi-field
//! documents, incremental persistence, distributed sharding, network
//! transport, authorization.
//!
//! # Quick Start
//!
//! ```rust
//! use rank_lexical::prelude::*;
//!
//! let mut server = SearchServer::new("a an the").unwrap();
//! server.add_document(0, "the quick brown fox", DocumentStatus::Actual, &[4, 5]).unwrap();
//! server.add_document(1, "the lazy dog", DocumentStatus::Actual, &[3]).unwrap();
//!
//! let results = server.find_top_documents("quick fox").unwrap();
//! assert_eq!(results[0].id, 0);
//! ```

/// String arena: owns document and stop-word text, hands out stable `Arc<str>` handles.
pub mod arena;

/// Ranking, request-window, and shard tunables.
pub mod config;

/// Lock-striped concurrent map used as the parallel rank reduction target.
pub mod concurrent_map;

/// Removes documents whose plus-term set duplicates an earlier one.
pub mod dedup;

/// Error types for construction, ingestion, and query parsing.
pub mod error;

/// The dictionary-backed inverted index.
pub mod index;

/// `MatchDocument`: per-document query matching.
pub mod matcher;

/// Slices a ranked sequence into fixed-size pages.
pub mod paginator;

/// Sequential/parallel execution-policy tag.
pub mod policy;

/// `ProcessQueries`/`ProcessQueriesJoined`: batch query evaluation.
pub mod process_queries;

/// `FindTopDocuments`: TF-IDF ranking with predicate/status filtering.
pub mod rank;

/// `RequestQueue`: rolling window of empty-result outcomes.
pub mod request_queue;

/// The `SearchServer` facade tying the components together.
pub mod server;

/// Document status enumeration.
pub mod status;

/// Splits text into whitespace-delimited word slices; validates characters.
pub mod tokenize;

/// Turns a raw query slice into (plus-terms, minus-terms).
pub mod query;

pub use error::SearchError;
pub use server::SearchServer;
pub use status::DocumentStatus;

/// Re-export of the crate's primary API surface.
pub mod prelude {
    pub use crate::config::RankingConfig;
    pub use crate::dedup::remove_duplicates;
    pub use crate::error::SearchError;
    pub use crate::paginator::{paginate, Page};
    pub use crate::policy::ExecutionPolicy;
    pub use crate::process_queries::{process_queries, process_queries_joined};
    pub use crate::rank::RankedDocument;
    pub use crate::request_queue::RequestQueue;
    pub use crate::server::SearchServer;
    pub use crate::status::DocumentStatus;
}
