//! CSS engine for static page style checking.
//!
//! This crate parses author stylesheets and resolves per-element computed
//! styles for a parsed HTML document, featuring:
//!
//! - **Selectors**: Type, class, ID, pseudo-class, and combinator selectors
//! - **Cascading**: Specificity and source-order based resolution
//! - **Inheritance**: Inherited properties flow down the element tree
//! - **Rule inspection**: Dynamic-state rules (e.g. `:hover`) stay queryable
//!   at the rule level even though they never match a static document
//! - **CSS linting**: The same grammar, with parse failures collected as
//!   diagnostics instead of skipped
//!
//! # Example
//!
//! ```ignore
//! use webgrade_style::prelude::*;
//!
//! // Load a stylesheet from a file
//! let stylesheet = StyleSheet::from_file("css/style.css")?;
//!
//! // Resolve computed styles for every element of a document
//! let resolver = StyleResolver::with_stylesheet(stylesheet);
//! let styles = resolver.resolve_document(document.dom());
//! ```
//!
//! Computed values keep their declared units: a `2.5rem` font size resolves
//! to `Length::Rem(2.5)`, not a pixel count. The crate checks declarations,
//! it does not lay out boxes.

pub mod types;
pub mod style;
pub mod selector;
pub mod rules;
pub mod resolve;
pub mod parser;

mod error;

pub use error::{Error, Result};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::types::{
        BackgroundImage, BackgroundPosition, BackgroundRepeat, BackgroundSize, Border,
        BorderLineStyle, BoxSizing, Color, Display, EdgeValues, Float, FontFamily, FontStack,
        FontStyle, FontWeight, HorizontalAnchor, Length, Position, StyleValue, TextAlign,
        TextDecoration, VerticalAlign, VerticalAnchor,
    };
    pub use crate::style::{ComputedStyle, StyleProperties};
    pub use crate::selector::{
        Combinator, ElementContext, PseudoClass, Selector, SelectorPart, Specificity,
    };
    pub use crate::rules::{StyleRule, StyleSheet};
    pub use crate::resolve::{ComputedStyles, StyleResolver};
    pub use crate::parser::{CssDiagnostic, lint_css, parse_css, parse_inline_style};
}
