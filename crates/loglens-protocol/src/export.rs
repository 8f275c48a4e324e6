//! Parsed XML export.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;
use xmltree::{Element, XMLNode};

use crate::{ProtocolError, ProtocolResult};

/// An XML export of test protocols.
#[derive(Debug, Clone)]
pub struct ProtocolExport {
    root: Element,
    source: PathBuf,
}

impl ProtocolExport {
    /// Parses the export at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::Io`] if the file cannot be opened and
    /// [`ProtocolError::Xml`] if it is not well-formed.
    pub fn open(path: impl AsRef<Path>) -> ProtocolResult<Self> {
        let path = path.as_ref();
        debug!(?path, "parsing protocol export");

        let file = File::open(path)?;
        let root = Element::parse(BufReader::new(file)).map_err(|e| ProtocolError::Xml {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            root,
            source: path.to_path_buf(),
        })
    }

    /// Parses an export held in memory.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::Xml`] if the text is not well-formed.
    pub fn parse_str(xml: &str) -> ProtocolResult<Self> {
        let root = Element::parse(xml.as_bytes()).map_err(|e| ProtocolError::Xml {
            path: PathBuf::from("<memory>"),
            reason: e.to_string(),
        })?;

        Ok(Self {
            root,
            source: PathBuf::from("<memory>"),
        })
    }

    /// Returns the root element.
    #[must_use]
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Returns the path the export was read from.
    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Returns every descendant element named `name`, in document order.
    #[must_use]
    pub fn descendants(&self, name: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        collect_descendants(&self.root, name, &mut found);
        found
    }

    /// Returns true if the document has a descendant named `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        find_descendant(&self.root, name).is_some()
    }

    /// Writes a copy of the document whose `container` children are replaced
    /// by `elements`.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::MissingContainer`] if the document has no
    /// `container` element, or a write error.
    pub fn write_with_children(
        &self,
        container: &str,
        elements: &[Element],
        path: &Path,
    ) -> ProtocolResult<()> {
        let mut root = self.root.clone();
        let target = find_descendant_mut(&mut root, container)
            .ok_or_else(|| ProtocolError::MissingContainer(container.to_string()))?;
        target.children = elements.iter().cloned().map(XMLNode::Element).collect();

        let write_error = |reason: String| ProtocolError::Write {
            path: path.to_path_buf(),
            reason,
        };

        let mut writer = BufWriter::new(File::create(path)?);
        root.write(&mut writer).map_err(|e| write_error(e.to_string()))?;
        writer.flush()?;

        Ok(())
    }
}

fn collect_descendants<'a>(element: &'a Element, name: &str, found: &mut Vec<&'a Element>) {
    for child in &element.children {
        if let XMLNode::Element(child) = child {
            if child.name == name {
                found.push(child);
            }
            collect_descendants(child, name, found);
        }
    }
}

fn find_descendant<'a>(element: &'a Element, name: &str) -> Option<&'a Element> {
    element.children.iter().find_map(|child| match child {
        XMLNode::Element(child) if child.name == name => Some(child),
        XMLNode::Element(child) => find_descendant(child, name),
        _ => None,
    })
}

fn find_descendant_mut<'a>(element: &'a mut Element, name: &str) -> Option<&'a mut Element> {
    for child in &mut element.children {
        if let XMLNode::Element(child) = child {
            if child.name == name {
                return Some(child);
            }
            if let Some(found) = find_descendant_mut(child, name) {
                return Some(found);
            }
        }
    }
    None
}
