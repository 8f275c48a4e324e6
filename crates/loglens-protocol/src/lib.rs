//! Test protocol categorization for Loglens.
//!
//! Reads an XML export of test protocols, follows each protocol's test script
//! reference to a file under the test automation directory, classifies the
//! file by its `Title:`/`Setup:` markers and writes one XML document per
//! category.

mod categorizer;
mod classify;
mod error;
mod export;
mod reference;

pub use categorizer::{CategoryBuckets, Categorizer, UNKNOWN_BUCKET};
pub use classify::{Category, classify};
pub use error::{ProtocolError, ProtocolResult};
pub use export::ProtocolExport;
pub use reference::{reference_url, test_case_path};
