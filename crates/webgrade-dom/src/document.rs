//! Page document: raw source plus parsed DOM.

use std::path::{Path, PathBuf};

use scraper::{ElementRef, Html, Selector};

use crate::{Error, Result};

/// A loaded HTML page.
///
/// Keeps both the raw source text (the doctype lint rules need it, since the
/// recovering parser normalizes missing doctypes away) and the parsed DOM.
#[derive(Debug)]
pub struct PageDocument {
    source: String,
    dom: Html,
    path: Option<PathBuf>,
}

impl PageDocument {
    /// Load a document from a file. The file is read once.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;

        let mut document = Self::from_source(source);
        document.path = Some(path.to_path_buf());
        tracing::debug!("loaded document from {}", path.display());
        Ok(document)
    }

    /// Parse a document from source text.
    pub fn from_source(source: impl Into<String>) -> Self {
        let source = source.into();
        let dom = Html::parse_document(&source);
        Self {
            source,
            dom,
            path: None,
        }
    }

    /// The raw source text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The parsed DOM.
    pub fn dom(&self) -> &Html {
        &self.dom
    }

    /// The originating file path, if loaded from disk.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// All elements matching a CSS selector, in document order.
    pub fn select(&self, selector: &str) -> Result<Vec<ElementRef<'_>>> {
        let compiled = Selector::parse(selector)
            .map_err(|e| Error::invalid_selector(selector, e.to_string()))?;
        Ok(self.dom.select(&compiled).collect())
    }

    /// The first element matching a CSS selector.
    pub fn select_first(&self, selector: &str) -> Result<Option<ElementRef<'_>>> {
        Ok(self.select(selector)?.into_iter().next())
    }
}
