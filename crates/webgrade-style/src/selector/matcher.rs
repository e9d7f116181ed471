//! Selector matching against document elements.

use super::{Combinator, PseudoClass, Selector, SelectorPart, TypeSelector};

/// Everything the matcher needs to know about one element.
///
/// Contexts are built from the DOM by the resolver; tests construct them
/// directly.
#[derive(Debug, Clone, Default)]
pub struct ElementContext {
    /// Lowercase element name (e.g., `nav`, `h1`).
    pub tag_name: String,
    /// The element's `id` attribute.
    pub id: Option<String>,
    /// The element's class list.
    pub classes: Vec<String>,
    /// Position among element siblings, for structural pseudo-classes.
    pub sibling_info: Option<SiblingInfo>,
    /// Number of child elements (for `:empty`).
    pub child_count: usize,
}

impl ElementContext {
    /// Create a context for a bare element with the given tag name.
    pub fn for_tag(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            ..Default::default()
        }
    }
}

/// Sibling position information.
#[derive(Debug, Clone, Copy)]
pub struct SiblingInfo {
    /// Zero-based index among element siblings.
    pub index: usize,
    /// Total number of element siblings (including self).
    pub count: usize,
}

impl SiblingInfo {
    /// Returns true if this is the first sibling.
    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    /// Returns true if this is the last sibling.
    pub fn is_last(&self) -> bool {
        self.index + 1 == self.count
    }

    /// Returns true if this is the only child.
    pub fn is_only(&self) -> bool {
        self.count == 1
    }
}

/// Selector matching engine.
pub struct SelectorMatcher;

impl SelectorMatcher {
    /// Check if a selector's subject (rightmost part) matches the element.
    ///
    /// This only checks the final selector part. For full matching with
    /// combinators, use [`matches_full`].
    pub fn matches_subject(selector: &Selector, context: &ElementContext) -> bool {
        if let Some(subject) = selector.subject() {
            Self::part_matches(subject, context)
        } else {
            false
        }
    }

    /// Check if a selector part matches the element.
    ///
    /// Dynamic pseudo-classes (`:hover` and friends) never match: a static
    /// document has no pointer and no focus.
    pub fn part_matches(part: &SelectorPart, context: &ElementContext) -> bool {
        // Check tag selector
        if let Some(type_sel) = &part.type_selector {
            match type_sel {
                TypeSelector::Universal => {} // Always matches
                TypeSelector::Tag(name) => {
                    if !name.eq_ignore_ascii_case(&context.tag_name) {
                        return false;
                    }
                }
            }
        }

        // Check ID selector
        if let Some(id) = &part.id {
            match &context.id {
                Some(element_id) if element_id == id => {}
                _ => return false,
            }
        }

        // Check class selectors (all must match)
        for class in &part.classes {
            if !context.classes.iter().any(|c| c == class) {
                return false;
            }
        }

        // Check pseudo-class selectors (all must match)
        for pseudo in &part.pseudo_classes {
            if !Self::pseudo_matches(pseudo, context) {
                return false;
            }
        }

        true
    }

    /// Check if a pseudo-class matches the element.
    fn pseudo_matches(pseudo: &PseudoClass, context: &ElementContext) -> bool {
        match pseudo {
            // Dynamic state does not exist in a static document.
            PseudoClass::Hover
            | PseudoClass::Active
            | PseudoClass::Focus
            | PseudoClass::Visited
            | PseudoClass::Link => false,

            PseudoClass::FirstChild => {
                context.sibling_info.map(|s| s.is_first()).unwrap_or(false)
            }
            PseudoClass::LastChild => context.sibling_info.map(|s| s.is_last()).unwrap_or(false),
            PseudoClass::OnlyChild => context.sibling_info.map(|s| s.is_only()).unwrap_or(false),
            PseudoClass::NthChild(expr) => context
                .sibling_info
                .map(|s| expr.matches(s.index))
                .unwrap_or(false),
            PseudoClass::Empty => context.child_count == 0,

            PseudoClass::Not(inner) => !Self::part_matches(inner, context),
        }
    }
}

/// Trait for providing ancestor and sibling context for selector matching.
pub trait AncestorProvider {
    /// Get ancestor contexts from parent to root.
    fn ancestors(&self) -> Vec<ElementContext>;

    /// Get the immediately preceding element sibling's context, if any.
    fn previous_sibling(&self) -> Option<ElementContext>;

    /// Get all preceding element siblings' contexts, nearest first.
    fn previous_siblings(&self) -> Vec<ElementContext>;
}

/// Check if a full selector matches, considering combinators.
///
/// This walks the selector from right to left, checking each part against
/// the element and its ancestors/siblings based on combinators.
pub fn matches_full<A: AncestorProvider>(
    selector: &Selector,
    context: &ElementContext,
    scope: &A,
) -> bool {
    if selector.parts.is_empty() {
        return false;
    }

    // Start with the subject (rightmost part)
    if !SelectorMatcher::part_matches(&selector.parts[selector.parts.len() - 1], context) {
        return false;
    }

    // If only one part, we're done
    if selector.parts.len() == 1 {
        return true;
    }

    // Walk backwards through remaining parts
    let ancestor_list = scope.ancestors();
    let mut ancestor_idx = 0;

    for i in (0..selector.parts.len() - 1).rev() {
        let part = &selector.parts[i];
        let combinator = &selector.combinators[i];

        match combinator {
            Combinator::Descendant => {
                // Find any matching ancestor
                let mut found = false;
                while ancestor_idx < ancestor_list.len() {
                    if SelectorMatcher::part_matches(part, &ancestor_list[ancestor_idx]) {
                        ancestor_idx += 1;
                        found = true;
                        break;
                    }
                    ancestor_idx += 1;
                }
                if !found {
                    return false;
                }
            }

            Combinator::Child => {
                // Must match the next ancestor exactly
                if ancestor_idx >= ancestor_list.len() {
                    return false;
                }
                if !SelectorMatcher::part_matches(part, &ancestor_list[ancestor_idx]) {
                    return false;
                }
                ancestor_idx += 1;
            }

            Combinator::AdjacentSibling => {
                // Must match the immediately preceding sibling
                match scope.previous_sibling() {
                    Some(prev) if SelectorMatcher::part_matches(part, &prev) => {}
                    _ => return false,
                }
            }

            Combinator::GeneralSibling => {
                // Must match any preceding sibling
                let siblings = scope.previous_siblings();
                if !siblings
                    .iter()
                    .any(|sibling| SelectorMatcher::part_matches(part, sibling))
                {
                    return false;
                }
            }
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(tag: &str, classes: &[&str]) -> ElementContext {
        ElementContext {
            tag_name: tag.to_string(),
            id: None,
            classes: classes.iter().map(|c| c.to_string()).collect(),
            sibling_info: None,
            child_count: 0,
        }
    }

    struct FixedScope {
        ancestors: Vec<ElementContext>,
        previous: Vec<ElementContext>,
    }

    impl AncestorProvider for FixedScope {
        fn ancestors(&self) -> Vec<ElementContext> {
            self.ancestors.clone()
        }

        fn previous_sibling(&self) -> Option<ElementContext> {
            self.previous.first().cloned()
        }

        fn previous_siblings(&self) -> Vec<ElementContext> {
            self.previous.clone()
        }
    }

    #[test]
    fn tag_selector_matches() {
        let cx = context("nav", &[]);

        assert!(SelectorMatcher::part_matches(&SelectorPart::tag_only("nav"), &cx));
        assert!(!SelectorMatcher::part_matches(&SelectorPart::tag_only("header"), &cx));
        assert!(SelectorMatcher::part_matches(&SelectorPart::universal(), &cx));
    }

    #[test]
    fn class_selector_matches() {
        let cx = context("div", &["searchBox", "wide"]);

        assert!(SelectorMatcher::part_matches(&SelectorPart::class_only("searchBox"), &cx));
        assert!(!SelectorMatcher::part_matches(&SelectorPart::class_only("sidebar"), &cx));

        // Multiple classes must all match
        let part = SelectorPart::new().with_class("searchBox").with_class("wide");
        assert!(SelectorMatcher::part_matches(&part, &cx));

        let part = SelectorPart::new().with_class("searchBox").with_class("narrow");
        assert!(!SelectorMatcher::part_matches(&part, &cx));
    }

    #[test]
    fn id_selector_matches() {
        let mut cx = context("main", &[]);
        cx.id = Some("content".to_string());

        assert!(SelectorMatcher::part_matches(&SelectorPart::id_only("content"), &cx));
        assert!(!SelectorMatcher::part_matches(&SelectorPart::id_only("footer"), &cx));
    }

    #[test]
    fn dynamic_pseudo_never_matches() {
        let cx = context("a", &[]);

        let part = SelectorPart::tag_only("a").with_pseudo(PseudoClass::Hover);
        assert!(!SelectorMatcher::part_matches(&part, &cx));

        let part = SelectorPart::tag_only("a").with_pseudo(PseudoClass::Focus);
        assert!(!SelectorMatcher::part_matches(&part, &cx));
    }

    #[test]
    fn structural_pseudo_matches() {
        let mut cx = context("li", &[]);
        cx.sibling_info = Some(SiblingInfo { index: 0, count: 3 });

        let first = SelectorPart::new().with_pseudo(PseudoClass::FirstChild);
        let last = SelectorPart::new().with_pseudo(PseudoClass::LastChild);
        assert!(SelectorMatcher::part_matches(&first, &cx));
        assert!(!SelectorMatcher::part_matches(&last, &cx));

        cx.sibling_info = Some(SiblingInfo { index: 2, count: 3 });
        assert!(SelectorMatcher::part_matches(&last, &cx));
    }

    #[test]
    fn not_pseudo_matches() {
        let cx = context("span", &[]);

        let part = SelectorPart::new().with_pseudo(PseudoClass::Not(Box::new(
            SelectorPart::class_only("logo"),
        )));
        assert!(SelectorMatcher::part_matches(&part, &cx));

        let cx = context("span", &["logo"]);
        assert!(!SelectorMatcher::part_matches(&part, &cx));
    }

    #[test]
    fn descendant_combinator() {
        // nav a against <a> inside <li> inside <ul> inside <nav>
        let selector = Selector::tag("nav").descendant(SelectorPart::tag_only("a"));
        let cx = context("a", &[]);
        let scope = FixedScope {
            ancestors: vec![context("li", &[]), context("ul", &[]), context("nav", &[])],
            previous: vec![],
        };

        assert!(matches_full(&selector, &cx, &scope));

        // header a should not match
        let selector = Selector::tag("header").descendant(SelectorPart::tag_only("a"));
        assert!(!matches_full(&selector, &cx, &scope));
    }

    #[test]
    fn child_combinator() {
        let selector = Selector::tag("nav").child(SelectorPart::tag_only("ul"));
        let cx = context("ul", &[]);

        let direct = FixedScope {
            ancestors: vec![context("nav", &[]), context("body", &[])],
            previous: vec![],
        };
        assert!(matches_full(&selector, &cx, &direct));

        let nested = FixedScope {
            ancestors: vec![context("div", &[]), context("nav", &[])],
            previous: vec![],
        };
        assert!(!matches_full(&selector, &cx, &nested));
    }

    #[test]
    fn sibling_combinators() {
        // h1 + p
        let mut selector = Selector::tag("h1").descendant(SelectorPart::tag_only("p"));
        selector.combinators[0] = Combinator::AdjacentSibling;

        let cx = context("p", &[]);
        let scope = FixedScope {
            ancestors: vec![context("main", &[])],
            previous: vec![context("h1", &[])],
        };
        assert!(matches_full(&selector, &cx, &scope));

        let scope = FixedScope {
            ancestors: vec![context("main", &[])],
            previous: vec![context("p", &[]), context("h1", &[])],
        };
        assert!(!matches_full(&selector, &cx, &scope));

        // h1 ~ p does match through an intervening sibling
        selector.combinators[0] = Combinator::GeneralSibling;
        assert!(matches_full(&selector, &cx, &scope));
    }
}
