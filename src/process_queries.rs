//! `ProcessQueries` / `ProcessQueriesJoined` helpers.
//!
//! Runs `FindTopDocuments` for each query in parallel and returns the
//! per-query result lists in input order; the joined variant concatenates
//! them, likewise preserving input order.

use crate::error::SearchError;
use crate::rank::RankedDocument;
use crate::server::SearchServer;

/// Run `FindTopDocuments` (status-ACTUAL default) for each of `queries` in
/// parallel, returning one result (or error) per query in input order.
pub fn process_queries(
    server: &SearchServer,
    queries: &[String],
) -> Vec<Result<Vec<RankedDocument>, SearchError>> {
    use rayon::prelude::*;

    tracing::debug!(query_count = queries.len(), "process_queries");
    queries
        .par_iter()
        .map(|text| server.find_top_documents(text))
        .collect()
}

/// `process_queries`, concatenated in input order. A query that fails to
/// parse contributes nothing to the joined list but does not abort the
/// others.
pub fn process_queries_joined(server: &SearchServer, queries: &[String]) -> Vec<RankedDocument> {
    process_queries(server, queries)
        .into_iter()
        .filter_map(Result::ok)
        .flatten()
        .collect()
}
