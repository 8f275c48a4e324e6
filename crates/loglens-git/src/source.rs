//! Log retrieval.

use std::path::{Path, PathBuf};
use std::time::Duration;

use loglens_commit::CommitHash;
use tokio::process::Command;
use tokio::runtime::{Builder, Runtime};
use tracing::{debug, warn};

use crate::{GitError, GitResult, split_commit_listing};

/// Default time limit for a single `git` invocation.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Stat width wide enough that git never abbreviates paths with `...`.
const STAT_WIDTH: &str = "--stat=4096";

/// Supplies raw log text for a repository.
pub trait LogSource {
    /// Returns the commit listing, one `commit <hash>` line per commit,
    /// most recent first.
    ///
    /// # Errors
    ///
    /// Returns an error if the listing cannot be retrieved.
    fn commit_listing(&self) -> GitResult<String>;

    /// Returns the header, message and stat summary of one commit.
    ///
    /// # Errors
    ///
    /// Returns an error if the details cannot be retrieved.
    fn commit_details(&self, hash: &CommitHash) -> GitResult<String>;

    /// Returns the validated hashes of the commit listing.
    ///
    /// # Errors
    ///
    /// Returns an error if the listing cannot be retrieved.
    fn commit_hashes(&self) -> GitResult<Vec<CommitHash>> {
        let listing = self.commit_listing()?;
        Ok(split_commit_listing(&listing))
    }
}

/// Runs the `git` executable against a working tree.
pub struct GitCli {
    program: PathBuf,
    repo: PathBuf,
    timeout: Duration,
    runtime: Runtime,
}

impl GitCli {
    /// Creates a log source for the repository at `repo`.
    ///
    /// # Errors
    ///
    /// Returns an error if the process runtime cannot be created.
    pub fn new(repo: impl Into<PathBuf>) -> GitResult<Self> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        Ok(Self {
            program: PathBuf::from("git"),
            repo: repo.into(),
            timeout: DEFAULT_TIMEOUT,
            runtime,
        })
    }

    /// Sets the time limit for each `git` invocation.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Runs `program` instead of the `git` found on `PATH`.
    #[cfg(test)]
    pub(crate) fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    /// Returns the repository path.
    #[must_use]
    pub fn repo(&self) -> &Path {
        &self.repo
    }

    /// Runs `git -C <repo> <args>` and returns its standard output.
    ///
    /// Paths are printed verbatim, not C-quoted, so non-ASCII file names
    /// survive into the stat summary.
    fn run(&self, args: &[&str]) -> GitResult<String> {
        let command = args.join(" ");
        debug!(repo = ?self.repo, %command, "running git");

        let mut git = Command::new(&self.program);
        git.args(["-c", "core.quotePath=false"])
            .arg("-C")
            .arg(&self.repo)
            .args(args)
            .env("GIT_PAGER", "cat")
            .kill_on_drop(true);

        let output = self.runtime.block_on(async {
            tokio::time::timeout(self.timeout, git.output()).await
        });

        let output = match output {
            Ok(result) => result?,
            Err(_) => {
                warn!(%command, timeout = ?self.timeout, "git timed out");
                return Err(GitError::TimedOut {
                    command,
                    timeout: self.timeout,
                });
            }
        };

        if !output.status.success() {
            return Err(GitError::CommandFailed {
                command,
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl LogSource for GitCli {
    fn commit_listing(&self) -> GitResult<String> {
        self.run(&["log", "--no-color", "--format=commit %H"])
    }

    fn commit_details(&self, hash: &CommitHash) -> GitResult<String> {
        self.run(&[
            "log",
            "-1",
            "--no-color",
            "--date=iso",
            STAT_WIDTH,
            hash.as_str(),
        ])
    }
}
