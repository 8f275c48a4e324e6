//! Changed and renamed files from the stat summary.
//!
//! Git prints one `path | count graph` line per touched file. Renames use
//! either the compact `dir/{old => new}/file` form or a bare `old => new`.

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;

use super::is_message_line;
use crate::RenamedFile;

static STAT_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<path>\S.*?)\s*\|\s*(?P<count>\d+|Bin)\b").expect("invalid regex")
});

const RENAME_ARROW: &str = "=>";

/// Files listed in the stat summary of one commit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatSummary {
    /// The first stat line, trimmed. Marks where the message ends.
    pub first_line: String,

    /// Paths with a content delta, in stat order.
    pub changed_files: Vec<String>,

    /// Rename pairs keyed by the new file's base name.
    pub renamed_files: IndexMap<String, RenamedFile>,
}

impl StatSummary {
    /// Scans `text` for stat lines, skipping the indented commit message.
    ///
    /// A rename whose count is exactly `0` has no content delta and is only
    /// recorded as a rename. Any other rename also lists its new path as
    /// changed.
    pub fn parse(text: &str) -> Self {
        let mut summary = Self::default();

        for line in text.lines().filter(|line| !is_message_line(line)) {
            let line = line.trim();
            let Some(caps) = STAT_LINE_RE.captures(line) else {
                continue;
            };

            if summary.first_line.is_empty() {
                summary.first_line = line.to_string();
            }

            let path = caps["path"].trim();
            let Some(rename) = resolve_rename(path) else {
                summary.changed_files.push(path.to_string());
                continue;
            };

            if &caps["count"] != "0" {
                summary.changed_files.push(rename.new.clone());
            }
            let key = unique_key(&summary.renamed_files, base_name(&rename.new));
            summary.renamed_files.insert(key, rename);
        }

        summary
    }

    /// Returns true if no stat line was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.first_line.is_empty()
    }
}

/// Expands rename notation into full old and new paths.
///
/// The nearest `{...}` around the arrow is substituted into the surrounding
/// path; without braces the whole path is the rename.
fn resolve_rename(path: &str) -> Option<RenamedFile> {
    let arrow = path.find(RENAME_ARROW)?;
    let after_arrow = arrow + RENAME_ARROW.len();

    let open = path[..arrow].rfind('{');
    let close = path[after_arrow..].find('}').map(|i| after_arrow + i);

    let rename = match (open, close) {
        (Some(open), Some(close)) => {
            let prefix = &path[..open];
            let suffix = &path[close + 1..];
            RenamedFile::new(
                splice(prefix, path[open + 1..arrow].trim(), suffix),
                splice(prefix, path[after_arrow..close].trim(), suffix),
            )
        }
        _ => RenamedFile::new(path[..arrow].trim(), path[after_arrow..].trim()),
    };

    Some(rename)
}

/// Joins `prefix`, `segment` and `suffix`, dropping the doubled separator an
/// empty segment leaves behind (`dir/{ => sub}/file`).
fn splice(prefix: &str, segment: &str, suffix: &str) -> String {
    if !segment.is_empty() {
        return format!("{prefix}{segment}{suffix}");
    }

    let suffix = if prefix.is_empty() || prefix.ends_with('/') {
        suffix.strip_prefix('/').unwrap_or(suffix)
    } else {
        suffix
    };
    format!("{prefix}{suffix}")
}

fn base_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Returns `base`, or `base#N` for the first N >= 2 not yet taken.
fn unique_key(taken: &IndexMap<String, RenamedFile>, base: &str) -> String {
    if !taken.contains_key(base) {
        return base.to_string();
    }

    (2..)
        .map(|n| format!("{base}#{n}"))
        .find(|key| !taken.contains_key(key))
        .unwrap_or_else(|| base.to_string())
}
