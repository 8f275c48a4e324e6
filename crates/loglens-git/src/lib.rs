//! Git access layer for Loglens.
//!
//! This crate provides:
//! - Repository validation
//! - Commit listing and per-commit detail retrieval through the `git` CLI
//! - Splitting a commit listing into validated hashes

mod error;
mod listing;
mod repository;
mod source;

pub use error::{GitError, GitResult};
pub use listing::{COMMIT_MARKER, split_commit_listing};
pub use repository::Repository;
pub use source::{DEFAULT_TIMEOUT, GitCli, LogSource};
