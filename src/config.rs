//! Ranking configuration.
//!
//! `rank-lexical` has no config file or environment parsing — it's a library,
//! not a service. Its tunables are grouped into one small `Copy` struct with
//! a `Default` impl.

/// Tunables for ranking, pagination, and the request window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankingConfig {
    /// Maximum number of results `find_top_documents` returns.
    pub max_results: usize,
    /// Absolute relevance difference below which two results are considered tied
    /// and broken by rating instead.
    pub relevance_epsilon: f64,
    /// Number of most-recent requests tracked by the request window.
    pub request_window: usize,
    /// Number of shards in the concurrent accumulator used by the parallel rank path.
    pub shard_count: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            max_results: 5,
            relevance_epsilon: 1e-6,
            request_window: 1440,
            shard_count: 16,
        }
    }
}
