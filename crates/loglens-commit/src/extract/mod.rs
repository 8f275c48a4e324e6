//! Field extractors for `git log --stat` output.
//!
//! Every extractor is a pure function over one commit's detail text. None of
//! them fail when a field is missing: they fall back to an empty string, an
//! empty collection or zero. [`parse_commit`] is the only entry point callers
//! outside this crate need; the individual extractors are public so the text
//! grammar can be tested and evolved on its own.

mod counts;
mod header;
mod message;
mod stat;

pub use counts::{ChangeKind, count_changes};
pub use header::author_and_date;
pub use message::message;
pub use stat::StatSummary;

use crate::{CommitHash, CommitRecord};

/// Indent git puts in front of every commit message line.
const MESSAGE_INDENT: &str = "    ";

/// Returns true for a line of the indented commit message.
///
/// Stat lines and the trailer are indented by a single space, so nothing the
/// message says can be mistaken for them.
fn is_message_line(line: &str) -> bool {
    line.starts_with(MESSAGE_INDENT)
}

/// Builds a [`CommitRecord`] from the detail text of one commit.
pub fn parse_commit(hash: CommitHash, text: &str) -> CommitRecord {
    let (author, date) = author_and_date(text);
    let stat = StatSummary::parse(text);
    let message = message(text, &date, &stat.first_line);

    CommitRecord::builder(hash)
        .author(author)
        .date(date)
        .message(message)
        .insertions(count_changes(text, ChangeKind::Insertion))
        .deletions(count_changes(text, ChangeKind::Deletion))
        .changed_files(stat.changed_files)
        .renamed_files(stat.renamed_files)
        .build()
}
