//! Protocol bucketing and per-bucket output.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use loglens_config::ProtocolsConfig;
use tracing::{debug, info, warn};
use xmltree::{Element, XMLNode};

use crate::classify::{Category, classify};
use crate::reference::{reference_url, test_case_path};
use crate::{ProtocolError, ProtocolExport, ProtocolResult};

/// Bucket name for protocols that could not be classified.
pub const UNKNOWN_BUCKET: &str = "unknown";

/// Ordered mapping from bucket name to the protocols it holds.
pub type CategoryBuckets = IndexMap<String, Vec<Element>>;

/// Sorts protocol elements into category buckets.
#[derive(Debug, Clone)]
pub struct Categorizer {
    rules: ProtocolsConfig,
    test_automation_dir: PathBuf,
}

impl Categorizer {
    /// Creates a categorizer resolving test cases under `test_automation_dir`.
    pub fn new(rules: &ProtocolsConfig, test_automation_dir: impl Into<PathBuf>) -> Self {
        Self {
            rules: rules.clone(),
            test_automation_dir: test_automation_dir.into(),
        }
    }

    /// Returns the directory test case paths are resolved against.
    #[must_use]
    pub fn test_automation_dir(&self) -> &Path {
        &self.test_automation_dir
    }

    /// Returns the category of one protocol element.
    ///
    /// Anything that prevents reading the referenced test case yields
    /// [`Category::Unknown`] with a warning.
    pub fn category_of(&self, protocol: &Element) -> Category {
        let id = protocol.attributes.get("id").map_or("?", String::as_str);

        let Some(reference) = protocol.get_child(self.rules.reference_element.as_str()) else {
            warn!(id, element = %self.rules.reference_element, "protocol has no reference");
            return Category::Unknown;
        };

        let raw = element_text(reference);
        let Some(url) = reference_url(&raw) else {
            warn!(id, reference = %raw.trim(), "cannot resolve test script reference");
            return Category::Unknown;
        };

        let Some(relative) = test_case_path(&url, &self.rules.test_case_marker) else {
            warn!(id, %url, marker = %self.rules.test_case_marker, "reference outside test cases");
            return Category::Unknown;
        };

        let path = self.test_automation_dir.join(relative);
        match fs::read(&path) {
            Ok(bytes) => {
                let category = classify(&String::from_utf8_lossy(&bytes), &self.rules);
                debug!(id, ?path, %category, "classified protocol");
                category
            }
            Err(err) => {
                warn!(id, ?path, %err, "test case file not found");
                Category::Unknown
            }
        }
    }

    /// Buckets every protocol of the export, in document order.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::NoProtocols`] if the export has no protocol
    /// elements and [`ProtocolError::OnlyUnknown`] if none could be
    /// classified.
    pub fn categorize(&self, export: &ProtocolExport) -> ProtocolResult<CategoryBuckets> {
        let protocols = export.descendants(&self.rules.protocol_element);
        if protocols.is_empty() {
            return Err(ProtocolError::NoProtocols(
                self.rules.protocol_element.clone(),
            ));
        }

        let mut buckets = CategoryBuckets::new();
        for protocol in protocols {
            let category = self.category_of(protocol);
            buckets
                .entry(category.bucket_name().to_string())
                .or_default()
                .push(protocol.clone());
        }

        if buckets.len() == 1 && buckets.contains_key(UNKNOWN_BUCKET) {
            return Err(ProtocolError::OnlyUnknown(self.test_automation_dir.clone()));
        }

        info!(buckets = buckets.len(), "categorized protocols");
        Ok(buckets)
    }

    /// Writes one `<bucket>.xml` per bucket into `output_dir`.
    ///
    /// The directory is created, with any missing parents, and must not
    /// already exist. Returns the written paths in bucket order.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::MissingContainer`] before touching the
    /// filesystem if the export has no container element,
    /// [`ProtocolError::OutputExists`] if the directory exists, or a write
    /// error.
    pub fn write_buckets(
        &self,
        export: &ProtocolExport,
        buckets: &CategoryBuckets,
        output_dir: &Path,
    ) -> ProtocolResult<Vec<PathBuf>> {
        let container = self.rules.container_element.as_str();
        if !export.contains(container) {
            return Err(ProtocolError::MissingContainer(container.to_string()));
        }

        if let Some(parent) = output_dir.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::create_dir(output_dir).map_err(|err| match err.kind() {
            ErrorKind::AlreadyExists => ProtocolError::OutputExists(output_dir.to_path_buf()),
            _ => ProtocolError::Io(err),
        })?;

        let mut written = Vec::with_capacity(buckets.len());
        for (name, elements) in buckets {
            let path = output_dir.join(format!("{}.xml", file_stem(name)));
            export.write_with_children(container, elements, &path)?;
            info!(bucket = %name, protocols = elements.len(), ?path, "wrote bucket");
            written.push(path);
        }

        Ok(written)
    }
}

/// Concatenated text content of an element and its descendants.
fn element_text(element: &Element) -> String {
    let mut text = String::new();
    for child in &element.children {
        match child {
            XMLNode::Text(value) | XMLNode::CData(value) => text.push_str(value),
            XMLNode::Element(inner) => text.push_str(&element_text(inner)),
            _ => {}
        }
    }
    text
}

fn file_stem(bucket: &str) -> String {
    bucket.replace(['/', '\\'], "_")
}
