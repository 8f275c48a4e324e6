//! Collect command.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Args;
use loglens_config::Config;
use loglens_core::{CommitCollector, write_commits_json};
use loglens_git::{GitError, Repository};
use tracing::info;

/// Arguments for the collect command.
#[derive(Debug, Args)]
pub struct CollectArgs {
    /// Path to the git repository
    #[arg(short, long, value_name = "DIR")]
    pub git_repository: PathBuf,

    /// Output file (default: git_info.json)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Runs the collect command.
pub fn run(args: CollectArgs, config: &Config) -> Result<()> {
    let repo = Repository::open(&args.git_repository)
        .with_context(|| format!("cannot use {}", args.git_repository.display()))?;

    if repo.is_empty()? {
        return Err(GitError::NoCommits)
            .with_context(|| format!("cannot collect from {}", repo.path().display()));
    }

    let source = repo.log_source(config.git.timeout())?;
    let commits = CommitCollector::new(source)
        .with_label_prefix(config.collect.label_prefix.as_str())
        .collect()
        .context("failed to collect commits")?;

    if commits.is_empty() {
        bail!("no commits collected from {}", repo.path().display());
    }

    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(&config.collect.output));
    write_commits_json(&commits, &output)?;

    info!(count = commits.len(), output = %output.display(), "collection complete");
    println!("Collected {} commits into {}", commits.len(), output.display());

    Ok(())
}
