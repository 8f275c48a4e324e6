//! Commit error types.

use thiserror::Error;

/// Commit-related errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommitError {
    /// Hash is not 40 hexadecimal characters.
    #[error("invalid commit hash {hash:?}: expected 40 hex characters, found {len}")]
    InvalidHash {
        /// The rejected token.
        hash: String,
        /// Its length in characters.
        len: usize,
    },

    /// Change kind other than insertion or deletion.
    #[error("unknown change kind {0:?}: expected \"insertion\" or \"deletion\"")]
    UnknownChangeKind(String),
}

/// Result type for commit operations.
pub type CommitResult<T> = Result<T, CommitError>;
