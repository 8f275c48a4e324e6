//! Test case classification by content markers.

use std::fmt;

use loglens_config::ProtocolsConfig;

/// The category of a test case file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    /// The file carries the semi-automated title marker.
    SemiAutomated,
    /// The lower-cased token following the setup marker.
    Setup(String),
    /// No marker found, or the file could not be resolved.
    Unknown,
}

impl Category {
    /// Returns the bucket name used for the output file.
    #[must_use]
    pub fn bucket_name(&self) -> &str {
        match self {
            Self::SemiAutomated => "semi-automated",
            Self::Setup(name) => name,
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.bucket_name())
    }
}

/// Classifies a test case by its text.
///
/// The semi-automated marker wins over the setup marker.
pub fn classify(text: &str, rules: &ProtocolsConfig) -> Category {
    if text.contains(&rules.semi_automated_marker) {
        return Category::SemiAutomated;
    }

    text.find(&rules.setup_marker)
        .and_then(|index| {
            text[index + rules.setup_marker.len()..]
                .split_whitespace()
                .next()
        })
        .map_or(Category::Unknown, |token| {
            Category::Setup(token.to_lowercase())
        })
}
