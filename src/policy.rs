//! Execution policy.
//!
//! An explicit enum selects between an operation's sequential and parallel
//! implementation at the call site, rather than a generic parameter or a
//! ladder of overloads.

/// Selects between the sequential and rayon-parallel code path for an
/// operation that supports both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionPolicy {
    #[default]
    Sequential,
    Parallel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_sequential() {
        assert_eq!(ExecutionPolicy::default(), ExecutionPolicy::Sequential);
    }
}
