//! Error types for trie mutation.

use std::collections::TryReserveError;

use thiserror::Error;

/// Convenience alias for fallible trie operations.
pub type Result<T> = std::result::Result<T, TrieError>;

/// Errors raised by mutating operations.
///
/// Lookups never error: a missing key is an absent result, not a failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrieError {
    /// Keys must contain at least one byte. The empty path belongs to the
    /// root sentinel, which never carries a value.
    #[error("key must not be empty")]
    EmptyKey,

    /// A label buffer could not be grown. The structure is left exactly as
    /// it was before the failing operation.
    #[error("allocation failed while growing the trie: {0}")]
    Alloc(#[from] TryReserveError),
}
