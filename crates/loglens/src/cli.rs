//! CLI definition.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use loglens_config::load_config_or_default;

use crate::commands;

/// Collect git history as JSON and sort test protocols by category.
#[derive(Debug, Parser)]
#[command(name = "loglens")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (default: loglens.toml in the current directory or a parent)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Also write logs to this file
    #[arg(long, global = true, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Collect every commit of a repository into a JSON file
    Collect(commands::collect::CollectArgs),

    /// Sort the protocols of an XML export into one file per category
    Sort(commands::sort::SortArgs),
}

impl Cli {
    /// Runs the CLI command.
    pub fn run(self) -> Result<()> {
        let config = load_config_or_default(self.config.as_deref())?;

        match self.command {
            Commands::Collect(args) => commands::collect::run(args, &config),
            Commands::Sort(args) => commands::sort::run(args, &config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_collect() {
        let cli = Cli::parse_from(["loglens", "-v", "collect", "-g", "repo", "-o", "out.json"]);
        assert!(cli.verbose);
        match cli.command {
            Commands::Collect(args) => {
                assert_eq!(args.git_repository, PathBuf::from("repo"));
                assert_eq!(args.output, Some(PathBuf::from("out.json")));
            }
            Commands::Sort(_) => panic!("expected collect"),
        }
    }

    #[test]
    fn test_parse_sort() {
        let cli = Cli::parse_from([
            "loglens",
            "sort",
            "--xml-file",
            "export.xml",
            "-d",
            "ta",
            "-n",
            "sorted",
            "--config",
            "custom.toml",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        match cli.command {
            Commands::Sort(args) => {
                assert_eq!(args.xml_file, PathBuf::from("export.xml"));
                assert_eq!(args.test_automation_dir, PathBuf::from("ta"));
                assert_eq!(args.new_folder, PathBuf::from("sorted"));
            }
            Commands::Collect(_) => panic!("expected sort"),
        }
    }
}
