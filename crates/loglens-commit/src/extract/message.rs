//! Commit message between the date header and the stat summary.

use super::header::header_value;
use super::is_message_line;

const DATE: &str = "Date:";

/// Extracts the commit message.
///
/// The message is the text after the `Date:` line carrying `date` and before
/// the unindented line equal to `first_stat_line`, trimmed. Without a stat
/// line the message runs to the end of the text. An empty `date` yields an
/// empty message.
pub fn message(text: &str, date: &str, first_stat_line: &str) -> String {
    if date.is_empty() {
        return String::new();
    }

    let mut offset = 0;
    let mut start = None;
    for line in text.split_inclusive('\n') {
        offset += line.len();
        if header_value(line, DATE) == Some(date) {
            start = Some(offset);
            break;
        }
    }
    let Some(start) = start else {
        return String::new();
    };

    let body = &text[start..];
    let mut end = body.len();
    if !first_stat_line.is_empty() {
        let mut offset = 0;
        for line in body.split_inclusive('\n') {
            if !is_message_line(line) && line.trim() == first_stat_line {
                end = offset;
                break;
            }
            offset += line.len();
        }
    }

    body[..end].trim().to_string()
}
