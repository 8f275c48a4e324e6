//! Subcommand implementations.

pub mod collect;
pub mod sort;
