//! Git error types.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Git-related errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// Path is not a directory.
    #[error("{0} is not a valid directory")]
    NotADirectory(PathBuf),

    /// Not a git repository.
    #[error("not a git repository: {0}")]
    NotARepo(PathBuf),

    /// Repository has no commits.
    #[error("no commits found")]
    NoCommits,

    /// A `git` invocation exited unsuccessfully.
    #[error("`git {command}` failed ({status}): {stderr}")]
    CommandFailed {
        /// The git arguments.
        command: String,
        /// Exit status description.
        status: String,
        /// Captured standard error.
        stderr: String,
    },

    /// A `git` invocation did not finish in time.
    #[error("`git {command}` timed out after {timeout:?}")]
    TimedOut {
        /// The git arguments.
        command: String,
        /// The timeout that expired.
        timeout: Duration,
    },

    /// Git2 error.
    #[error("git error: {0}")]
    Git2(#[from] git2::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for git operations.
pub type GitResult<T> = Result<T, GitError>;
