//! Commit types for Loglens.
//!
//! This crate provides the commit types used throughout Loglens and the
//! extractors that read them out of `git log --stat` text:
//! - [`CommitHash`]: A validated 40-character commit id
//! - [`CommitRecord`]: The structured metadata of one commit
//! - [`parse_commit`]: Runs every field extractor over one commit's text

mod error;
pub mod extract;
mod hash;
mod record;

pub use error::{CommitError, CommitResult};
pub use extract::{ChangeKind, StatSummary, parse_commit};
pub use hash::CommitHash;
pub use record::{CommitRecord, CommitRecordBuilder, RenamedFile};
