//! Commit listing splitter.

use loglens_commit::CommitHash;
use tracing::warn;

/// Token that starts a commit boundary line.
pub const COMMIT_MARKER: &str = "commit";

/// Returns the hashes of every `commit <hash>` line, in listing order.
///
/// Lines whose token after the marker is not a 40-character hex hash are
/// logged and skipped. Anything after the hash token is ignored.
pub fn split_commit_listing(listing: &str) -> Vec<CommitHash> {
    listing
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let mut tokens = line.split_whitespace();
            if tokens.next() != Some(COMMIT_MARKER) {
                return None;
            }
            let token = tokens.next()?;

            match CommitHash::parse(token) {
                Ok(hash) => Some(hash),
                Err(err) => {
                    warn!(line = index + 1, %err, "skipping commit line");
                    None
                }
            }
        })
        .collect()
}
