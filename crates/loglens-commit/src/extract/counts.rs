//! Insertion and deletion counts from the stat trailer.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use super::is_message_line;
use crate::CommitError;

static TRAILER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+ files? changed").expect("invalid regex"));

static INSERTIONS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+) insertions?\(.\)").expect("invalid regex"));

static DELETIONS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+) deletions?\(.\)").expect("invalid regex"));

/// Kind of line change counted in the stat trailer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    /// `N insertion(s)(+)`
    Insertion,
    /// `N deletion(s)(-)`
    Deletion,
}

impl ChangeKind {
    /// Returns the singular word git prints for this kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Insertion => "insertion",
            Self::Deletion => "deletion",
        }
    }

    fn regex(self) -> &'static Regex {
        match self {
            Self::Insertion => &INSERTIONS_RE,
            Self::Deletion => &DELETIONS_RE,
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChangeKind {
    type Err = CommitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "insertion" => Ok(Self::Insertion),
            "deletion" => Ok(Self::Deletion),
            other => Err(CommitError::UnknownChangeKind(other.to_string())),
        }
    }
}

/// Returns the number of inserted or deleted lines, or 0 when git printed no
/// clause for that kind.
///
/// Only the `N file(s) changed` trailer is read; the commit message may
/// mention insertions too.
pub fn count_changes(text: &str, kind: ChangeKind) -> u64 {
    let Some(trailer) = text
        .lines()
        .filter(|line| !is_message_line(line))
        .map(str::trim)
        .rfind(|line| TRAILER_RE.is_match(line))
    else {
        return 0;
    };

    kind.regex()
        .captures(trailer)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertions_and_deletions() {
        let text = " pythonProject/advent_of_code_2.py | 25 +++++++++++++++++++++++++\n  1 file changed, 9 insertions(+), 4 deletions(-)";
        assert_eq!(count_changes(text, ChangeKind::Insertion), 9);
        assert_eq!(count_changes(text, ChangeKind::Deletion), 4);
    }

    #[test]
    fn test_insertions_only() {
        let text = " 1 file changed, 25 insertions(+)";
        assert_eq!(count_changes(text, ChangeKind::Insertion), 25);
        assert_eq!(count_changes(text, ChangeKind::Deletion), 0);
    }

    #[test]
    fn test_deletions_only() {
        let text = " 2 files changed, 7 deletions(-)";
        assert_eq!(count_changes(text, ChangeKind::Insertion), 0);
        assert_eq!(count_changes(text, ChangeKind::Deletion), 7);
    }

    #[test]
    fn test_singular_clauses() {
        let text = " 1 file changed, 1 insertion(+), 1 deletion(-)\n";
        assert_eq!(count_changes(text, ChangeKind::Insertion), 1);
        assert_eq!(count_changes(text, ChangeKind::Deletion), 1);
    }

    #[test]
    fn test_no_trailer() {
        let text = "Author: a\nDate:   x\n\n    Commiting not completely done advent of code part 2\n";
        assert_eq!(count_changes(text, ChangeKind::Insertion), 0);
        assert_eq!(count_changes(text, ChangeKind::Deletion), 0);
    }

    #[test]
    fn test_large_counts() {
        let text = " 968 files changed, 163570 insertions(+), 86903 deletions(-)";
        assert_eq!(count_changes(text, ChangeKind::Insertion), 163_570);
        assert_eq!(count_changes(text, ChangeKind::Deletion), 86_903);
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("insertion".parse::<ChangeKind>(), Ok(ChangeKind::Insertion));
        assert_eq!("deletion".parse::<ChangeKind>(), Ok(ChangeKind::Deletion));
        assert_eq!(
            "insertions".parse::<ChangeKind>(),
            Err(CommitError::UnknownChangeKind("insertions".to_string()))
        );
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ChangeKind::Insertion.to_string(), "insertion");
        assert_eq!(ChangeKind::Deletion.to_string(), "deletion");
    }

    #[test]
    fn test_message_mentioning_insertions() {
        let text = "Date:   x\n\n    previous commit had 3 insertions(+) too many\n\n src/a.rs | 12 ++++++++++++\n 1 file changed, 12 insertions(+)\n";
        assert_eq!(count_changes(text, ChangeKind::Insertion), 12);
        assert_eq!(count_changes(text, ChangeKind::Deletion), 0);
    }

    #[test]
    fn test_clause_outside_trailer_ignored() {
        let text = " notes.txt | 1 +\n 5 insertions(+) were planned\n";
        assert_eq!(count_changes(text, ChangeKind::Insertion), 0);
    }
}
