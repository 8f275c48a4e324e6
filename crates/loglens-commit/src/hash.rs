//! Validated commit hash.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{CommitError, CommitResult};

/// Length of a full SHA-1 commit id in hex characters.
const HASH_LEN: usize = 40;

/// A full 40-character hexadecimal commit id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CommitHash(String);

impl CommitHash {
    /// Parses a commit hash.
    ///
    /// # Errors
    ///
    /// Returns [`CommitError::InvalidHash`] unless the token is exactly
    /// 40 ASCII hex digits.
    pub fn parse(token: &str) -> CommitResult<Self> {
        let len = token.chars().count();
        if len != HASH_LEN || !token.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(CommitError::InvalidHash {
                hash: token.to_string(),
                len,
            });
        }
        Ok(Self(token.to_string()))
    }

    /// Returns the hash as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the short hash (first 7 characters).
    #[must_use]
    pub fn short(&self) -> &str {
        &self.0[..7]
    }
}

impl fmt::Display for CommitHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CommitHash {
    type Err = CommitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CommitHash {
    type Error = CommitError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CommitHash> for String {
    fn from(hash: CommitHash) -> Self {
        hash.0
    }
}

impl AsRef<str> for CommitHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HASH: &str = "0b44f202c497c7efb8599567c92b052ee573afc3";

    #[test]
    fn test_parse_valid() {
        let hash = CommitHash::parse(HASH).unwrap();
        assert_eq!(hash.as_str(), HASH);
        assert_eq!(hash.to_string(), HASH);
    }

    #[test]
    fn test_parse_uppercase_hex() {
        assert!(CommitHash::parse(&HASH.to_uppercase()).is_ok());
    }

    #[test]
    fn test_parse_too_short() {
        let err = CommitHash::parse(&HASH[..39]).unwrap_err();
        assert_eq!(
            err,
            CommitError::InvalidHash {
                hash: HASH[..39].to_string(),
                len: 39
            }
        );
    }

    #[test]
    fn test_parse_too_long() {
        assert!(CommitHash::parse(&format!("{HASH}0")).is_err());
    }

    #[test]
    fn test_parse_non_hex() {
        let bad = format!("{}g", &HASH[..39]);
        assert!(CommitHash::parse(&bad).is_err());
    }

    #[test]
    fn test_short() {
        let hash = CommitHash::parse(HASH).unwrap();
        assert_eq!(hash.short(), "0b44f20");
    }

    #[test]
    fn test_from_str() {
        let hash: CommitHash = HASH.parse().unwrap();
        assert_eq!(hash.as_ref(), HASH);
    }

    #[test]
    fn test_serde_as_plain_string() {
        let hash = CommitHash::parse(HASH).unwrap();
        let json = serde_json::to_string(&hash).unwrap();
        assert_eq!(json, format!("\"{HASH}\""));

        let back: CommitHash = serde_json::from_str(&json).unwrap();
        assert_eq!(back, hash);
    }

    #[test]
    fn test_deserialize_rejects_invalid() {
        let result: Result<CommitHash, _> = serde_json::from_str("\"abc123\"");
        assert!(result.is_err());
    }
}
