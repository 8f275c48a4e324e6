//! Commit aggregation.

use indexmap::IndexMap;
use loglens_commit::{CommitHash, CommitRecord, parse_commit};
use loglens_git::LogSource;
use tracing::{debug, info};

use crate::CoreResult;

/// Default prefix of each commit's label.
pub const DEFAULT_LABEL_PREFIX: &str = "commit_";

/// Commit records keyed by label, in log order.
pub type CommitMap = IndexMap<String, CommitRecord>;

/// Collects every commit of a [`LogSource`] into a [`CommitMap`].
pub struct CommitCollector<S> {
    source: S,
    label_prefix: String,
}

impl<S: LogSource> CommitCollector<S> {
    /// Creates a collector reading from `source`.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self {
            source,
            label_prefix: DEFAULT_LABEL_PREFIX.to_string(),
        }
    }

    /// Sets the prefix prepended to each commit hash to form its label.
    #[must_use]
    pub fn with_label_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.label_prefix = prefix.into();
        self
    }

    /// Returns the underlying log source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns the label of a commit.
    #[must_use]
    pub fn label(&self, hash: &CommitHash) -> String {
        format!("{}{hash}", self.label_prefix)
    }

    /// Fetches and parses every commit, most recent first.
    ///
    /// # Errors
    ///
    /// Returns an error if the listing or any commit's details cannot be
    /// retrieved. No partial map is returned.
    pub fn collect(&self) -> CoreResult<CommitMap> {
        let hashes = self.source.commit_hashes()?;
        info!(count = hashes.len(), "collecting commits");

        let mut commits = CommitMap::with_capacity(hashes.len());
        for hash in hashes {
            let details = self.source.commit_details(&hash)?;
            let record = parse_commit(hash, &details);
            debug!(
                hash = %record.hash.short(),
                files = record.changed_files.len(),
                renames = record.renamed_files.len(),
                "parsed commit"
            );
            commits.insert(self.label(&record.hash), record);
        }

        Ok(commits)
    }
}
