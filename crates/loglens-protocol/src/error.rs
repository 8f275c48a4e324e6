//! Protocol error types.

use std::path::PathBuf;

use thiserror::Error;

/// Protocol categorization errors.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// The export is not well-formed XML.
    #[error("cannot parse XML file {path}: {reason}")]
    Xml {
        /// The export file.
        path: PathBuf,
        /// Parser message.
        reason: String,
    },

    /// The container element to rewrite is missing.
    #[error("element <{0}> not found in XML document")]
    MissingContainer(String),

    /// The export holds no protocol elements.
    #[error("no <{0}> elements found in XML document")]
    NoProtocols(String),

    /// Every protocol ended up in the unknown bucket.
    #[error(
        "every protocol was classified as unknown, probably a wrong test automation directory: {0}"
    )]
    OnlyUnknown(PathBuf),

    /// The output directory must not exist beforehand.
    #[error("output directory {0} already exists, use another name or delete it")]
    OutputExists(PathBuf),

    /// Serializing a bucket failed.
    #[error("failed to write {path}: {reason}")]
    Write {
        /// The bucket file.
        path: PathBuf,
        /// Writer message.
        reason: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for protocol operations.
pub type ProtocolResult<T> = Result<T, ProtocolError>;
