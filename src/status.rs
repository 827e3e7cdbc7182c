//! Document status enumeration.

/// Categorical label attached to a document. Used only for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DocumentStatus {
    /// The document should be surfaced in ordinary searches.
    #[default]
    Actual,
    /// The document is no longer relevant but is kept for reference.
    Irrelevant,
    /// The document has been banned from ordinary searches.
    Banned,
    /// The document has been marked for removal.
    Removed,
}
