//! Sort command.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Args;
use loglens_config::Config;
use loglens_protocol::{Categorizer, ProtocolExport};
use tracing::info;

/// Arguments for the sort command.
#[derive(Debug, Args)]
pub struct SortArgs {
    /// XML export of test protocols
    #[arg(short = 'f', long, value_name = "FILE")]
    pub xml_file: PathBuf,

    /// Test automation directory holding `test_cases/`
    #[arg(short = 'd', long, value_name = "DIR")]
    pub test_automation_dir: PathBuf,

    /// Directory to create for the sorted files
    #[arg(short = 'n', long, value_name = "DIR")]
    pub new_folder: PathBuf,
}

/// Runs the sort command.
pub fn run(args: SortArgs, config: &Config) -> Result<()> {
    if !args.xml_file.is_file() {
        bail!("{} is not a valid file", args.xml_file.display());
    }
    if !args.test_automation_dir.is_dir() {
        bail!("{} is not a valid directory", args.test_automation_dir.display());
    }

    let export = ProtocolExport::open(&args.xml_file)
        .with_context(|| format!("cannot read {}", args.xml_file.display()))?;

    let categorizer = Categorizer::new(&config.protocols, args.test_automation_dir.clone());
    let buckets = categorizer.categorize(&export)?;
    let written = categorizer.write_buckets(&export, &buckets, &args.new_folder)?;

    info!(
        files = written.len(),
        folder = %args.new_folder.display(),
        "sorting complete"
    );
    println!(
        "Generated {} files in {}",
        written.len(),
        args.new_folder.display()
    );

    Ok(())
}
