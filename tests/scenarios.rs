//! End-to-end scenario tests for the search server.
//!
//! Exercises the public `SearchServer` facade and its helpers
//! (`remove_duplicates`, `RequestQueue`) the way a caller would: build a
//! server, ingest a handful of documents, then assert on match/rank/removal
//! outcomes.

use rank_lexical::prelude::*;

// ─────────────────────────────────────────────────────────────────────────────
// Matching
// ─────────────────────────────────────────────────────────────────────────────

fn five_document_server() -> SearchServer {
    let mut server = SearchServer::new("and with").unwrap();
    let bodies = [
        "funny pet and nasty rat",
        "funny pet with curly hair",
        "funny pet and not very nasty rat",
        "pet with rat and rat and rat",
        "nasty rat with curly hair",
    ];
    for (i, body) in bodies.iter().enumerate() {
        server
            .add_document(i as i64 + 1, body, DocumentStatus::Actual, &[1, 2])
            .unwrap();
    }
    server
}

#[test]
fn match_document_sequential_returns_only_the_shared_plus_term() {
    let server = five_document_server();
    let (matched, status) = server
        .match_document("curly and funny curly -not -not", 1)
        .unwrap();
    assert_eq!(matched, vec!["funny".to_string()]);
    assert_eq!(status, DocumentStatus::Actual);
}

#[test]
fn match_document_parallel_matches_both_plus_terms() {
    let server = five_document_server();
    let (mut matched, status) = server
        .match_document_parallel("curly and funny curly -not -not", 2)
        .unwrap();
    matched.sort_unstable();
    assert_eq!(matched, vec!["curly".to_string(), "funny".to_string()]);
    assert_eq!(status, DocumentStatus::Actual);
}

#[test]
fn match_document_parallel_minus_term_hit_yields_no_matches() {
    let server = five_document_server();
    let (matched, status) = server
        .match_document_parallel("curly and funny curly -not -not", 3)
        .unwrap();
    assert!(matched.is_empty());
    assert_eq!(status, DocumentStatus::Actual);
}

// ─────────────────────────────────────────────────────────────────────────────
// Ranking under removal
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn find_top_documents_count_shrinks_as_documents_are_removed() {
    let mut server = five_document_server();
    assert_eq!(server.find_top_documents("curly and funny").unwrap().len(), 4);

    server.remove_document(4);
    assert_eq!(server.find_top_documents("curly and funny").unwrap().len(), 4);

    server.remove_document(1);
    assert_eq!(server.find_top_documents("curly and funny").unwrap().len(), 3);

    server.remove_document_with_policy(ExecutionPolicy::Parallel, 2);
    assert_eq!(server.find_top_documents("curly and funny").unwrap().len(), 2);
}

// ─────────────────────────────────────────────────────────────────────────────
// Deduplication
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn remove_duplicates_leaves_one_survivor_per_equivalence_class() {
    let mut server = SearchServer::new("").unwrap();
    let bodies: [(i64, &str); 9] = [
        (1, "funny pet and nasty rat"),
        (2, "funny pet with curly hair"),
        (3, "funny pet with curly hair"),
        (4, "funny pet and nasty rat"),
        (5, "funny pet and nasty rat"),
        (6, "nasty rat with curly hair"),
        (7, "nasty rat with curly hair"),
        (8, "nasty rat with curly hair and not very nasty rat"),
        (9, "nasty rat"),
    ];
    for (id, body) in bodies {
        server.add_document(id, body, DocumentStatus::Actual, &[1]).unwrap();
    }

    remove_duplicates(server.index_mut());
    assert_eq!(server.ids().collect::<Vec<_>>(), vec![1, 2, 6, 8, 9]);
}

// ─────────────────────────────────────────────────────────────────────────────
// TF-IDF ranking
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn tfidf_ranking_puts_the_best_matching_document_first() {
    let mut server = SearchServer::new("").unwrap();
    let bodies = [
        "white cat in the city",
        "black cat in the village",
        "red cat in the house",
    ];
    for (i, body) in bodies.iter().enumerate() {
        server
            .add_document(i as i64, body, DocumentStatus::Actual, &[])
            .unwrap();
    }

    let results = server.find_top_documents("black cat village").unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].id, 1);
}

// ─────────────────────────────────────────────────────────────────────────────
// Construction and ingestion errors
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn invalid_id_errors_do_not_mutate_the_index() {
    let mut server = SearchServer::new("").unwrap();
    assert!(matches!(
        server.add_document(-1, "x", DocumentStatus::Actual, &[]),
        Err(SearchError::InvalidId(-1))
    ));
    assert_eq!(server.document_count(), 0);

    server.add_document(1, "ok", DocumentStatus::Actual, &[1]).unwrap();
    assert!(matches!(
        server.add_document(1, "dup", DocumentStatus::Actual, &[1]),
        Err(SearchError::InvalidId(1))
    ));
    assert_eq!(server.document_count(), 1);
}

// ─────────────────────────────────────────────────────────────────────────────
// Request window
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn request_window_boundary_counts_match_the_1440_request_rollover() {
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
