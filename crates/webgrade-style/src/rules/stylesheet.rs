//! Stylesheet collection and inspection.

use std::path::{Path, PathBuf};

use crate::rules::StyleRule;
use crate::selector::PseudoClass;
use crate::{Error, Result};

/// A stylesheet containing multiple rules in source order.
#[derive(Debug, Clone, Default)]
pub struct StyleSheet {
    /// The rules in this stylesheet.
    pub rules: Vec<StyleRule>,
    /// Source file path, if loaded from disk.
    pub source_path: Option<PathBuf>,
}

impl StyleSheet {
    /// Create an empty stylesheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a stylesheet from a CSS file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;

        let mut sheet = Self::from_css(&content)?;
        sheet.source_path = Some(path.to_path_buf());
        Ok(sheet)
    }

    /// Parse a stylesheet from CSS text.
    pub fn from_css(css: &str) -> Result<Self> {
        let rules = crate::parser::parse_css(css)?;
        Ok(Self {
            rules,
            source_path: None,
        })
    }

    /// Add a rule to the stylesheet.
    ///
    /// The rule's order is automatically set from the current rule count.
    pub fn add_rule(
        &mut self,
        selectors: Vec<crate::selector::Selector>,
        properties: crate::style::StyleProperties,
    ) {
        let order = self.rules.len() as u32;
        self.rules.push(StyleRule::new(selectors, properties, order));
    }

    /// Add a pre-built rule to the stylesheet.
    pub fn add_style_rule(&mut self, mut rule: StyleRule) {
        rule.order = self.rules.len() as u32;
        self.rules.push(rule);
    }

    /// Get the number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the stylesheet is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate over rules.
    pub fn iter(&self) -> impl Iterator<Item = &StyleRule> {
        self.rules.iter()
    }

    /// Rules whose selector list carries the given pseudo-class.
    ///
    /// This is the rule-level view used for dynamic-state assertions
    /// (`:hover` rules never match an element of a static document, but they
    /// are still present here).
    pub fn rules_with_pseudo(&self, pseudo: &PseudoClass) -> Vec<&StyleRule> {
        self.rules
            .iter()
            .filter(|rule| rule.has_pseudo_class(pseudo))
            .collect()
    }

    /// Clear all rules.
    pub fn clear(&mut self) {
        self.rules.clear();
    }
}
