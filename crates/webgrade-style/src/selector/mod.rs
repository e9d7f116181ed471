//! CSS selectors: types, specificity, and matching.

mod matcher;
mod specificity;
mod types;

pub use matcher::{AncestorProvider, ElementContext, SelectorMatcher, SiblingInfo, matches_full};
pub use specificity::{Specificity, SpecificityWithOrder};
pub use types::{Combinator, NthExpr, PseudoClass, Selector, SelectorPart, TypeSelector};
