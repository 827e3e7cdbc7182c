//! Deduplicator — `RemoveDuplicates`.
//!
//! Scans live ids in ascending order, keys each by its *set* of distinct
//! terms (frequency values ignored), keeps the first id seen for each key,
//! and removes every later id whose term set repeats one already seen.

use std::collections::HashSet;

use crate::index::InvertedIndex;

/// Remove every document whose set of distinct terms equals that of an
/// earlier (lower-id) document still live in `index`. Returns the removed
/// ids in ascending order.
pub fn remove_duplicates(index: &mut InvertedIndex) -> Vec<i64> {
    let mut seen: HashSet<Vec<String>> = HashSet::new();
    let mut to_remove = Vec::new();

    for id in index.ids().collect::<Vec<_>>() {
        let Some(data) = index.document(id) else {
            continue;
        };
        let mut terms: Vec<String> = data.freqs.keys().map(|t| t.to_string()).collect();
        terms.sort_unstable();
        terms.dedup();
        if !seen.insert(terms) {
            to_remove.push(id);
        }
    }

    for &id in &to_remove {
        tracing::debug!(document_id = id, "remove_duplicates: removing");
        index.remove_document(id);
    }
    to_remove
}
