//! CSS parsing built on the `cssparser` crate.

mod css_parser;
mod lint;

pub use css_parser::{parse_css, parse_inline_style};
pub use lint::{CssDiagnostic, lint_css};
