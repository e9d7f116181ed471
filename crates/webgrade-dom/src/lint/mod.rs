//! Markup linting.
//!
//! The linter checks structural and accessibility constraints on the raw
//! source and the parsed DOM. It never aborts: every violation becomes a
//! [`LintDiagnostic`], and an empty diagnostic list means the document is
//! valid under the configured options.

mod options;

pub use options::LintOptions;

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use scraper::ElementRef;

use crate::PageDocument;

/// Severity of a lint finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Advisory; does not fail validation.
    Warning,
    /// A violation; fails validation.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// One markup lint finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintDiagnostic {
    /// Rule identifier (e.g. `attr-bans`).
    pub rule: &'static str,
    /// Finding severity.
    pub severity: Severity,
    /// Human-readable description.
    pub message: String,
}

impl LintDiagnostic {
    fn error(rule: &'static str, message: impl Into<String>) -> Self {
        Self {
            rule,
            severity: Severity::Error,
            message: message.into(),
        }
    }
}

impl fmt::Display for LintDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: {}", self.severity, self.rule, self.message)
    }
}

// The doctype rules read the raw source: the recovering DOM parser inserts
// or reorders what a linter needs to observe as written.
static DOCTYPE_FIRST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)^\s*(?:<!--.*?-->\s*)*<!doctype\b").expect("doctype-first pattern is valid")
});
static DOCTYPE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<!doctype\s+([^>]*)>").expect("doctype pattern is valid"));

/// Runs the configured lint rules over a document.
#[derive(Debug, Clone, Default)]
pub struct HtmlLinter {
    options: LintOptions,
}

impl HtmlLinter {
    /// Create a linter with the given options.
    pub fn new(options: LintOptions) -> Self {
        Self { options }
    }

    /// The options in force.
    pub fn options(&self) -> &LintOptions {
        &self.options
    }

    /// Lint a document, returning every finding.
    pub fn lint(&self, document: &PageDocument) -> Vec<LintDiagnostic> {
        let mut diagnostics = vec![];

        self.check_doctype(document.source(), &mut diagnostics);
        self.check_elements(document, &mut diagnostics);

        tracing::debug!("markup lint produced {} diagnostic(s)", diagnostics.len());
        diagnostics
    }

    fn check_doctype(&self, source: &str, diagnostics: &mut Vec<LintDiagnostic>) {
        if self.options.doctype_first && !DOCTYPE_FIRST.is_match(source) {
            diagnostics.push(LintDiagnostic::error(
                "doctype-first",
                "the document must start with a doctype",
            ));
        }

        if self.options.doctype_html5 {
            match DOCTYPE_TAG.captures(source) {
                Some(captures) => {
                    let content = captures[1].trim();
                    if !content.eq_ignore_ascii_case("html") {
                        diagnostics.push(LintDiagnostic::error(
                            "doctype-html5",
                            format!("expected the HTML5 doctype, found '<!DOCTYPE {content}>'"),
                        ));
                    }
                }
                None => diagnostics.push(LintDiagnostic::error(
                    "doctype-html5",
                    "the document has no doctype",
                )),
            }
        }
    }

    fn check_elements(&self, document: &PageDocument, diagnostics: &mut Vec<LintDiagnostic>) {
        for node in document.dom().tree.root().descendants() {
            let Some(element) = ElementRef::wrap(node) else {
                continue;
            };
            let value = element.value();
            let tag = value.name();

            if self.options.tag_bans.iter().any(|banned| banned == tag) {
                diagnostics.push(LintDiagnostic::error(
                    "tag-bans",
                    format!("banned tag <{tag}>"),
                ));
            }

            for (attr, _) in value.attrs() {
                if self.options.attr_bans.iter().any(|banned| banned == attr) {
                    diagnostics.push(LintDiagnostic::error(
                        "attr-bans",
                        format!("banned attribute '{attr}' on <{tag}>"),
                    ));
                }
            }

            if self.options.require_lang && tag == "html" {
                let lang_set = value.attr("lang").is_some_and(|lang| !lang.trim().is_empty());
                if !lang_set {
                    diagnostics.push(LintDiagnostic::error(
                        "html-req-lang",
                        "<html> is missing a lang attribute",
                    ));
                }
            }

            if self.options.require_img_alt && tag == "img" {
                let alt_set = value.attr("alt").is_some_and(|alt| !alt.trim().is_empty());
                if !alt_set {
                    diagnostics.push(LintDiagnostic::error(
                        "img-req-alt",
                        "<img> is missing alt text",
                    ));
                }
            }
        }
    }
}
