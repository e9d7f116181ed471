//! The page under grading: document, stylesheet, and resolved styles.

use std::path::Path;

use scraper::ElementRef;

use webgrade_dom::{HtmlLinter, LintDiagnostic, LintOptions, PageDocument};
use webgrade_style::parser::{CssDiagnostic, lint_css};
use webgrade_style::resolve::{ComputedStyles, StyleResolver};
use webgrade_style::rules::StyleSheet;
use webgrade_style::style::ComputedStyle;

use crate::Result;

/// The fixture pair loaded once: HTML document, parsed stylesheet, and the
/// computed style of every element.
///
/// Both files are read a single time at load; every check reads from the
/// same structures, so the checks stay independent and order-insensitive.
#[derive(Debug)]
pub struct StyledPage {
    document: PageDocument,
    css_source: String,
    stylesheet: StyleSheet,
    styles: ComputedStyles,
    lint_options: LintOptions,
}

impl StyledPage {
    /// Load the page from an HTML file and a CSS file.
    pub fn load(html_path: impl AsRef<Path>, css_path: impl AsRef<Path>) -> Result<Self> {
        let document = PageDocument::from_file(html_path)?;

        let css_path = css_path.as_ref();
        let css_source = std::fs::read_to_string(css_path)
            .map_err(|e| webgrade_style::Error::io(css_path, e))?;
        let mut stylesheet = StyleSheet::from_css(&css_source)?;
        stylesheet.source_path = Some(css_path.to_path_buf());

        Ok(Self::assemble(document, css_source, stylesheet))
    }

    /// Build a page from in-memory sources (used by tests).
    pub fn from_sources(html: &str, css: &str) -> Result<Self> {
        let document = PageDocument::from_source(html);
        let stylesheet = StyleSheet::from_css(css)?;
        Ok(Self::assemble(document, css.to_string(), stylesheet))
    }

    fn assemble(document: PageDocument, css_source: String, stylesheet: StyleSheet) -> Self {
        let styles =
            StyleResolver::with_stylesheet(stylesheet.clone()).resolve_document(document.dom());
        tracing::debug!("resolved styles for {} element(s)", styles.len());
        Self {
            document,
            css_source,
            stylesheet,
            styles,
            lint_options: LintOptions::default(),
        }
    }

    /// Replace the markup lint options.
    pub fn with_lint_options(mut self, options: LintOptions) -> Self {
        self.lint_options = options;
        self
    }

    /// The loaded document.
    pub fn document(&self) -> &PageDocument {
        &self.document
    }

    /// The raw stylesheet source.
    pub fn css_source(&self) -> &str {
        &self.css_source
    }

    /// The parsed stylesheet (rule-level view).
    pub fn stylesheet(&self) -> &StyleSheet {
        &self.stylesheet
    }

    /// The computed styles of every element.
    pub fn styles(&self) -> &ComputedStyles {
        &self.styles
    }

    /// The markup lint options in force.
    pub fn lint_options(&self) -> &LintOptions {
        &self.lint_options
    }

    /// Lint the markup under the configured options.
    pub fn lint_markup(&self) -> Vec<LintDiagnostic> {
        HtmlLinter::new(self.lint_options.clone()).lint(&self.document)
    }

    /// Lint the stylesheet syntax.
    pub fn lint_styles(&self) -> Vec<CssDiagnostic> {
        lint_css(&self.css_source)
    }

    /// The computed style of an element (empty style if unresolved).
    pub fn style_of(&self, element: &ElementRef<'_>) -> ComputedStyle {
        self.styles.style_of(element).cloned().unwrap_or_default()
    }

    /// All elements matching a CSS selector, in document order.
    pub fn select(&self, selector: &str) -> webgrade_dom::Result<Vec<ElementRef<'_>>> {
        self.document.select(selector)
    }
}
