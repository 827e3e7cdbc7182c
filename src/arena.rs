//! String arena.
//!
//! Owns the backing storage for every piece of text that must outlive a
//! request: stop-word source text and each added document's body/terms. Text
//! is interned into reference-counted slices so postings, per-document term
//! maps, and parsed queries can all hold a cheap, independently-owned handle
//! to the same bytes without copying on every occurrence. An `Arc<str>`
//! handle stays valid for as long as any index entry references it,
//! independent of the arena's own lifetime.

use std::collections::HashMap;
use std::sync::Arc;

/// Interning store for document and stop-word text.
///
/// `intern_term` is idempotent on equal content: repeated terms across
/// documents share one allocation. Dropping every `Arc<str>` handle to a term
/// (which happens when the owning document is removed and no live posting or
/// query still references it) frees the backing bytes. Body text handed out
/// by `intern_body` is *not* retained here — the returned `Arc<str>` is the
/// only owner besides whatever document data holds a clone of it, so a
/// removed document's body is freed as soon as its last handle drops, rather
/// than living as long as the arena itself.
#[derive(Debug, Default)]
pub struct StringArena {
    body_count: usize,
    terms: HashMap<Arc<str>, Arc<str>>,
}

impl StringArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a stable, reference-counted handle for a document body.
    pub fn intern_body(&mut self, text: &str) -> Arc<str> {
        self.body_count += 1;
        Arc::from(text)
    }

    /// Intern a single term, returning the canonical shared handle for it.
    ///
    /// Subsequent calls with equal content return clones of the same
    /// allocation instead of creating a new one.
    pub fn intern_term(&mut self, term: &str) -> Arc<str> {
        if let Some(existing) = self.terms.get(term) {
            return existing.clone();
        }
        let handle: Arc<str> = Arc::from(term);
        self.terms.insert(handle.clone(), handle.clone());
        handle
    }

    /// Drop the arena's own reference to a term, freeing the allocation once
    /// no index structure holds a clone of it either.
    pub fn release_term(&mut self, term: &str) {
        self.terms.remove(term);
    }

    /// Number of bodies ever interned (monotonic, not decremented on removal).
    pub fn body_count(&self) -> usize {
        self.body_count
    }
}
