//! Git repository wrapper.

use std::path::Path;
use std::time::Duration;

use git2::Repository as Git2Repo;
use tracing::debug;

use crate::{GitCli, GitError, GitResult};

/// A validated Git repository.
pub struct Repository {
    inner: Git2Repo,
}

impl Repository {
    /// Opens a repository at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::NotADirectory`] if the path is not a directory and
    /// [`GitError::NotARepo`] if it is not a Git repository.
    pub fn open(path: impl AsRef<Path>) -> GitResult<Self> {
        let path = path.as_ref();
        if !path.is_dir() {
            return Err(GitError::NotADirectory(path.to_path_buf()));
        }

        let inner = Git2Repo::open(path).map_err(|_| GitError::NotARepo(path.to_path_buf()))?;
        debug!(?path, "opened git repository");
        Ok(Self { inner })
    }

    /// Returns the repository root path.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.inner.workdir().unwrap_or_else(|| self.inner.path())
    }

    /// Returns true if HEAD does not point at a commit yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository state cannot be read.
    pub fn is_empty(&self) -> GitResult<bool> {
        Ok(self.inner.is_empty()?)
    }

    /// Returns a `git` CLI log source rooted at this repository.
    ///
    /// # Errors
    ///
    /// Returns an error if the process runtime cannot be created.
    pub fn log_source(&self, timeout: Duration) -> GitResult<GitCli> {
        Ok(GitCli::new(self.path())?.with_timeout(timeout))
    }
}
