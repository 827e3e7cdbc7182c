//! Request window — `RequestQueue`.
//!
//! A fixed-width rolling window over the last `window_size` requests
//! (granularity = one request, not wall-time), tracking how many of them
//! returned zero results.

use std::collections::VecDeque;

use crate::error::SearchError;
use crate::rank::{Predicate, RankedDocument};
use crate::server::SearchServer;

/// Wraps a [`SearchServer`] with a rolling window of the last `window_size`
/// search outcomes, counting how many were empty.
pub struct RequestQueue<'a> {
    server: &'a SearchServer,
    window_size: usize,
    outcomes: VecDeque<bool>,
    empty_count: usize,
}

impl<'a> RequestQueue<'a> {
    /// Wrap `server`, using its configured request-window size.
    pub fn new(server: &'a SearchServer) -> Self {
        let window_size = server.config().request_window;
        Self {
            server,
            window_size,
            outcomes: VecDeque::with_capacity(window_size),
            empty_count: 0,
        }
    }

    /// Number of requests in the current window whose result was empty.
    pub fn empty_request_count(&self) -> usize {
        self.empty_count
    }

    fn record(&mut self, was_empty: bool) {
        if self.outcomes.len() >= self.window_size {
            if let Some(evicted) = self.outcomes.pop_front() {
                if evicted {
                    self.empty_count -= 1;
                }
            }
        }
        self.outcomes.push_back(was_empty);
        if was_empty {
            self.empty_count += 1;
        }
    }

    /// Run `FindTopDocuments` (status-ACTUAL default) through the window:
    /// evicts the oldest outcome if the window is full, executes the
    /// search, then records whether the result was empty.
    pub fn add_find_request(&mut self, text: &str) -> Result<Vec<RankedDocument>, SearchError> {
        let results = self.server.find_top_documents(text)?;
        self.record(results.is_empty());
        Ok(results)
    }

    /// Same as `add_find_request`, with an explicit predicate.
    pub fn add_find_request_by(
        &mut self,
        text: &str,
        predicate: &Predicate<'_>,
    ) -> Result<Vec<RankedDocument>, SearchError> {
        let results = self.server.find_top_documents_by(text, predicate)?;
        self.record(results.is_empty());
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::DocumentStatus;

    #[test]
    fn scenario_six_window_boundary_counts() {
        let mut server = SearchServer::new("").unwrap();
        server.add_document(1, "rat", DocumentStatus::Actual, &[]).unwrap();
        let mut queue = RequestQueue::new(&server);

        for _ in 0..1439 {
            queue.add_find_request("nothing-matches").unwrap();
        }
        queue.add_find_request("rat").unwrap();
        assert_eq!(queue.empty_request_count(), 1439);

        queue.add_find_request("nothing-matches").unwrap();
        assert_eq!(queue.empty_request_count(), 1439);

        queue.add_find_request("rat").unwrap();
        assert_eq!(queue.empty_request_count(), 1438);
    }
}
