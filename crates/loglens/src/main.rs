//! Loglens CLI - Collect git history as JSON and sort test protocols.

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod logging;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    logging::init(cli.verbose, cli.log_file.as_deref())?;
    cli.run()
}
