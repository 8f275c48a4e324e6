//! Core library for Loglens.
//!
//! This crate provides the orchestration on top of the git and commit
//! crates: collecting every commit of a repository into an ordered map,
//! writing that map as JSON, and the depth-bounded caller propagation search.

mod collector;
mod error;
mod output;
mod propagation;

pub use collector::{CommitCollector, CommitMap, DEFAULT_LABEL_PREFIX};
pub use error::{CoreError, CoreResult};
pub use output::write_commits_json;
pub use propagation::{CallGraph, PropagatedCall, PropagationSearch};
