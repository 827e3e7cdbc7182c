//! Sharded concurrent map.
//!
//! A fixed number of lock-striped buckets, keyed by `id % bucket_count`, so
//! concurrent writers touching different documents don't contend on one
//! global lock. This is the reduction target the parallel `find_top_documents`
//! and `match_document` paths fold into from a rayon `par_iter`.
//!
//! `with_mut` takes a closure under the bucket's mutex instead of returning a
//! lock-guard-plus-reference handle, which keeps the guard's lifetime from
//! ever escaping.

use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

const DEFAULT_BUCKET_COUNT: usize = 16;

/// A map from `i64` document ids to `Value`, sharded across `bucket_count`
/// independently-locked buckets.
pub struct ConcurrentMap<Value> {
    buckets: Vec<Mutex<HashMap<i64, Value>>>,
}

impl<Value> ConcurrentMap<Value> {
    /// Create a map with the default bucket count.
    pub fn new() -> Self {
        Self::with_bucket_count(DEFAULT_BUCKET_COUNT)
    }

    /// Create a map with an explicit bucket count. Panics if `bucket_count == 0`.
    pub fn with_bucket_count(bucket_count: usize) -> Self {
        assert!(bucket_count > 0, "ConcurrentMap requires at least one bucket");
        let mut buckets = Vec::with_capacity(bucket_count);
        buckets.resize_with(bucket_count, || Mutex::new(HashMap::new()));
        Self { buckets }
    }

    fn bucket_index(&self, key: i64) -> usize {
        (key as u64 % self.buckets.len() as u64) as usize
    }

    /// Run `f` against the entry for `key` under that shard's lock alone,
    /// inserting `default()` first if the key is absent.
    pub fn with_mut<R>(&self, key: i64, default: impl FnOnce() -> Value, f: impl FnOnce(&mut Value) -> R) -> R {
        let bucket = &self.buckets[self.bucket_index(key)];
        let mut guard = bucket.lock().expect("concurrent map mutex poisoned");
        let entry = guard.entry(key).or_insert_with(default);
        f(entry)
    }

    /// Remove `key` from whichever shard owns it.
    pub fn erase(&self, key: i64) {
        let bucket = &self.buckets[self.bucket_index(key)];
        bucket.lock().expect("concurrent map mutex poisoned").remove(&key);
    }

    /// Drain every shard into a single ordered map, matching
    /// `ConcurrentMap::BuildOrdinaryMap`'s `std::map` (ordered) result.
    pub fn build_ordinary_map(self) -> BTreeMap<i64, Value> {
        let mut result = BTreeMap::new();
        for bucket in self.buckets {
            let guard = bucket.into_inner().expect("concurrent map mutex poisoned");
            result.extend(guard);
        }
        result
    }
}

impl<Value> Default for ConcurrentMap<Value> {
    fn default() -> Self {
        Self::new()
    }
}
