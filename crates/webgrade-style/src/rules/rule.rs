//! Single style rule definition.

use crate::selector::{PseudoClass, Selector, Specificity};
use crate::style::StyleProperties;

/// A style rule mapping a selector list to declared properties.
///
/// Each rule has:
/// - One or more selectors (comma-separated in source)
/// - The declared properties shared by all of them
/// - Pre-computed per-selector specificity
/// - Source order for tie-breaking
#[derive(Debug, Clone)]
pub struct StyleRule {
    /// The selectors this rule applies to.
    pub selectors: Vec<Selector>,
    /// Pre-computed specificity, parallel to `selectors`.
    pub specificities: Vec<Specificity>,
    /// The declared properties.
    pub properties: StyleProperties,
    /// Source order (for tie-breaking when specificity is equal).
    pub order: u32,
}

impl StyleRule {
    /// Create a new style rule from a selector list.
    pub fn new(selectors: Vec<Selector>, properties: StyleProperties, order: u32) -> Self {
        let specificities = selectors.iter().map(Specificity::of_selector).collect();
        Self {
            selectors,
            specificities,
            properties,
            order,
        }
    }

    /// Create a rule with a single tag selector.
    pub fn for_tag(tag_name: impl Into<String>, properties: StyleProperties, order: u32) -> Self {
        Self::new(vec![Selector::tag(tag_name)], properties, order)
    }

    /// Create a rule with a single class selector.
    pub fn for_class(class: impl Into<String>, properties: StyleProperties, order: u32) -> Self {
        Self::new(vec![Selector::class(class)], properties, order)
    }

    /// Create a rule with a single ID selector.
    pub fn for_id(id: impl Into<String>, properties: StyleProperties, order: u32) -> Self {
        Self::new(vec![Selector::id(id)], properties, order)
    }

    /// Iterate selectors with their pre-computed specificity.
    pub fn selectors_with_specificity(
        &self,
    ) -> impl Iterator<Item = (&Selector, &Specificity)> {
        self.selectors.iter().zip(self.specificities.iter())
    }

    /// Check if any selector carries the given pseudo-class.
    pub fn has_pseudo_class(&self, pseudo: &PseudoClass) -> bool {
        self.selectors
            .iter()
            .any(|selector| selector.has_pseudo_class(pseudo))
    }

    /// The selector list as written (joined with a comma).
    pub fn selector_text(&self) -> String {
        self.selectors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
