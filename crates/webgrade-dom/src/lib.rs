//! HTML document loading, element queries, and markup linting.
//!
//! [`PageDocument`] owns a page's raw source and its parsed DOM, and answers
//! CSS-selector queries over it. [`lint::HtmlLinter`] checks the markup
//! against a configurable rule set (banned attributes/tags, doctype shape,
//! required `lang`, required image alt text).
//!
//! Parsing is error-recovering: malformed markup still produces a DOM, and
//! the linter reports structural problems as diagnostics rather than
//! failures to parse.

pub mod document;
pub mod lint;
pub mod query;

mod error;

pub use document::PageDocument;
pub use error::{Error, Result};
pub use lint::{HtmlLinter, LintDiagnostic, LintOptions, Severity};
pub use query::ElementExt;
