//! Structured commit record.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::CommitHash;

/// Old and new path of a renamed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenamedFile {
    /// Path before the rename.
    pub old: String,

    /// Path after the rename.
    pub new: String,
}

impl RenamedFile {
    /// Creates a new rename pair.
    #[must_use]
    pub fn new(old: impl Into<String>, new: impl Into<String>) -> Self {
        Self {
            old: old.into(),
            new: new.into(),
        }
    }
}

/// Metadata extracted from one commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    /// The commit hash.
    pub hash: CommitHash,

    /// The author line, e.g. `Jane Doe <jane@example.com>`.
    pub author: String,

    /// The date exactly as printed by git.
    pub date: String,

    /// The commit message (may be empty).
    pub message: String,

    /// Files with a content delta, in stat order. Duplicates are kept.
    pub changed_files: Vec<String>,

    /// Renamed files keyed by the new file's base name.
    pub renamed_files: IndexMap<String, RenamedFile>,

    /// Number of inserted lines.
    pub insertions: u64,

    /// Number of deleted lines.
    pub deletions: u64,
}

impl CommitRecord {
    /// Creates a new commit record builder.
    #[must_use]
    pub fn builder(hash: CommitHash) -> CommitRecordBuilder {
        CommitRecordBuilder::new(hash)
    }
}

/// Builder for [`CommitRecord`].
#[derive(Debug)]
pub struct CommitRecordBuilder {
    hash: CommitHash,
    author: String,
    date: String,
    message: String,
    changed_files: Vec<String>,
    renamed_files: IndexMap<String, RenamedFile>,
    insertions: u64,
    deletions: u64,
}

impl CommitRecordBuilder {
    fn new(hash: CommitHash) -> Self {
        Self {
            hash,
            author: String::new(),
            date: String::new(),
            message: String::new(),
            changed_files: Vec::new(),
            renamed_files: IndexMap::new(),
            insertions: 0,
            deletions: 0,
        }
    }

    /// Sets the author.
    #[must_use]
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Sets the date.
    #[must_use]
    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    /// Sets the message.
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Sets the changed files.
    #[must_use]
    pub fn changed_files(mut self, files: Vec<String>) -> Self {
        self.changed_files = files;
        self
    }

    /// Sets the renamed files.
    #[must_use]
    pub fn renamed_files(mut self, files: IndexMap<String, RenamedFile>) -> Self {
        self.renamed_files = files;
        self
    }

    /// Sets the insertion count.
    #[must_use]
    pub fn insertions(mut self, count: u64) -> Self {
        self.insertions = count;
        self
    }

    /// Sets the deletion count.
    #[must_use]
    pub fn deletions(mut self, count: u64) -> Self {
        self.deletions = count;
        self
    }

    /// Builds the [`CommitRecord`].
    #[must_use]
    pub fn build(self) -> CommitRecord {
        CommitRecord {
            hash: self.hash,
            author: self.author,
            date: self.date,
            message: self.message,
            changed_files: self.changed_files,
            renamed_files: self.renamed_files,
            insertions: self.insertions,
            deletions: self.deletions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hash() -> CommitHash {
        CommitHash::parse("50c76e327549dd683d5a2af8310433589757725f").unwrap()
    }

    #[test]
    fn test_builder_defaults() {
        let record = CommitRecord::builder(hash()).build();
        assert!(record.author.is_empty());
        assert!(record.message.is_empty());
        assert!(record.changed_files.is_empty());
        assert!(record.renamed_files.is_empty());
        assert_eq!(record.insertions, 0);
        assert_eq!(record.deletions, 0);
    }

    #[test]
    fn test_json_round_trip() {
        let mut renamed = IndexMap::new();
        renamed.insert(
            "run.py".to_string(),
            RenamedFile::new(
                "services/test_cases/run.py",
                "services/project_service_tmt/run.py",
            ),
        );

        let record = CommitRecord::builder(hash())
            .author("Arnas Žuklija <arnas@example.com>")
            .date("2024-02-19 14:57:17 +0200")
            .message("first line\n    second line")
            .changed_files(vec![
                "a.py".to_string(),
                "services/project_service_tmt/run.py".to_string(),
                "a.py".to_string(),
            ])
            .renamed_files(renamed)
            .insertions(9)
            .deletions(4)
            .build();

        let json = serde_json::to_string_pretty(&record).unwrap();
        assert!(json.contains("Žuklija"));

        let back: CommitRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_renamed_files_serialize_in_insertion_order() {
        let mut renamed = IndexMap::new();
        renamed.insert("z.py".to_string(), RenamedFile::new("a/z.py", "b/z.py"));
        renamed.insert("a.py".to_string(), RenamedFile::new("a/a.py", "b/a.py"));
        let record = CommitRecord::builder(hash()).renamed_files(renamed).build();

        let json = serde_json::to_string(&record).unwrap();
        let z = json.find("\"z.py\"").unwrap();
        let a = json.find("\"a.py\"").unwrap();
        assert!(z < a);
    }
}
