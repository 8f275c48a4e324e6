//! JSON output.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::info;

use crate::{CommitMap, CoreError, CoreResult};

/// Writes `commits` to `path` as JSON with 4-space indentation.
///
/// Non-ASCII text is written as-is and the file ends with a newline.
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written.
pub fn write_commits_json(commits: &CommitMap, path: &Path) -> CoreResult<()> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    commits.serialize(&mut serializer)?;
    buffer.push(b'\n');

    fs::write(path, buffer).map_err(|source| CoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    info!(count = commits.len(), ?path, "wrote commit data");
    Ok(())
}
