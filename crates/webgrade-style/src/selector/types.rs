//! Selector type definitions.

use std::fmt;

/// A complete CSS selector (e.g., `nav ul li.active > a:hover`).
///
/// A selector consists of one or more selector parts connected by
/// combinators.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selector {
    /// Chain of selector parts, subject last.
    pub parts: Vec<SelectorPart>,
    /// Combinators between parts (length = parts.len() - 1).
    pub combinators: Vec<Combinator>,
}

impl Selector {
    /// Create a simple tag selector.
    pub fn tag(tag_name: impl Into<String>) -> Self {
        Self {
            parts: vec![SelectorPart::tag_only(tag_name)],
            combinators: vec![],
        }
    }

    /// Create a universal selector (`*`).
    pub fn universal() -> Self {
        Self {
            parts: vec![SelectorPart::universal()],
            combinators: vec![],
        }
    }

    /// Create a class selector.
    pub fn class(class_name: impl Into<String>) -> Self {
        Self {
            parts: vec![SelectorPart::class_only(class_name)],
            combinators: vec![],
        }
    }

    /// Create an ID selector.
    pub fn id(id: impl Into<String>) -> Self {
        Self {
            parts: vec![SelectorPart::id_only(id)],
            combinators: vec![],
        }
    }

    /// Add a descendant selector part.
    pub fn descendant(mut self, part: SelectorPart) -> Self {
        if !self.parts.is_empty() {
            self.combinators.push(Combinator::Descendant);
        }
        self.parts.push(part);
        self
    }

    /// Add a child selector part.
    pub fn child(mut self, part: SelectorPart) -> Self {
        if !self.parts.is_empty() {
            self.combinators.push(Combinator::Child);
        }
        self.parts.push(part);
        self
    }

    /// Get the rightmost (subject) selector part.
    pub fn subject(&self) -> Option<&SelectorPart> {
        self.parts.last()
    }

    /// Check if any part carries the given pseudo-class.
    pub fn has_pseudo_class(&self, pseudo: &PseudoClass) -> bool {
        self.parts
            .iter()
            .any(|part| part.pseudo_classes.contains(pseudo))
    }

    /// Check if the selector depends on dynamic element state.
    ///
    /// Dynamic selectors never match during static resolution; they are kept
    /// for rule-level inspection.
    pub fn is_dynamic(&self) -> bool {
        self.parts
            .iter()
            .any(|part| part.pseudo_classes.iter().any(PseudoClass::is_dynamic))
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                match &self.combinators[i - 1] {
                    Combinator::Descendant => write!(f, " ")?,
                    Combinator::Child => write!(f, " > ")?,
                    Combinator::AdjacentSibling => write!(f, " + ")?,
                    Combinator::GeneralSibling => write!(f, " ~ ")?,
                }
            }
            write!(f, "{}", part)?;
        }
        Ok(())
    }
}

/// A single selector segment (e.g., `a.navlink:hover`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SelectorPart {
    /// Tag selector (element name or universal).
    pub type_selector: Option<TypeSelector>,
    /// ID selector (`#id`).
    pub id: Option<String>,
    /// Class selectors (`.class`).
    pub classes: Vec<String>,
    /// Pseudo-class selectors (`:hover`, `:first-child`, ...).
    pub pseudo_classes: Vec<PseudoClass>,
}

impl SelectorPart {
    /// Create a new empty selector part.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tag-only selector.
    pub fn tag_only(tag_name: impl Into<String>) -> Self {
        Self {
            type_selector: Some(TypeSelector::Tag(tag_name.into())),
            ..Default::default()
        }
    }

    /// Create a universal selector part.
    pub fn universal() -> Self {
        Self {
            type_selector: Some(TypeSelector::Universal),
            ..Default::default()
        }
    }

    /// Create a class-only selector.
    pub fn class_only(class_name: impl Into<String>) -> Self {
        Self {
            classes: vec![class_name.into()],
            ..Default::default()
        }
    }

    /// Create an ID-only selector.
    pub fn id_only(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Default::default()
        }
    }

    /// Add a tag selector.
    pub fn with_tag(mut self, tag_name: impl Into<String>) -> Self {
        self.type_selector = Some(TypeSelector::Tag(tag_name.into()));
        self
    }

    /// Add an ID selector.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add a class selector.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Add a pseudo-class selector.
    pub fn with_pseudo(mut self, pseudo: PseudoClass) -> Self {
        self.pseudo_classes.push(pseudo);
        self
    }

    /// Check if nothing has been set on this part.
    pub fn is_empty(&self) -> bool {
        self.type_selector.is_none()
            && self.id.is_none()
            && self.classes.is_empty()
            && self.pseudo_classes.is_empty()
    }
}

impl fmt::Display for SelectorPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.type_selector {
            Some(TypeSelector::Universal) => write!(f, "*")?,
            Some(TypeSelector::Tag(t)) => write!(f, "{}", t)?,
            None => {}
        }

        if let Some(id) = &self.id {
            write!(f, "#{}", id)?;
        }

        for class in &self.classes {
            write!(f, ".{}", class)?;
        }

        for pseudo in &self.pseudo_classes {
            write!(f, ":{}", pseudo)?;
        }

        Ok(())
    }
}

/// Tag selector - matches the element name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeSelector {
    /// Universal selector (`*`) - matches any element.
    Universal,
    /// Named tag (e.g., `nav`, `h1`), stored lowercase.
    Tag(String),
}

/// Combinator between selector parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Combinator {
    /// Descendant combinator (space): matches any descendant.
    Descendant,
    /// Child combinator (`>`): matches direct child only.
    Child,
    /// Adjacent sibling (`+`): matches immediately following sibling.
    AdjacentSibling,
    /// General sibling (`~`): matches any following sibling.
    GeneralSibling,
}

/// Pseudo-class selectors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PseudoClass {
    /// `:hover` - pointer is over the element.
    Hover,
    /// `:active` - element is being activated.
    Active,
    /// `:focus` - element has focus.
    Focus,
    /// `:visited` - link has been visited.
    Visited,
    /// `:link` - unvisited link.
    Link,
    /// `:first-child` - first element among siblings.
    FirstChild,
    /// `:last-child` - last element among siblings.
    LastChild,
    /// `:nth-child(n)` - nth element among siblings.
    NthChild(NthExpr),
    /// `:only-child` - only child of its parent.
    OnlyChild,
    /// `:empty` - has no child elements.
    Empty,
    /// `:not(selector)` - negation.
    Not(Box<SelectorPart>),
}

impl PseudoClass {
    /// Parse a simple (argument-free) pseudo-class from its CSS name.
    pub fn from_css(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "hover" => Some(Self::Hover),
            "active" => Some(Self::Active),
            "focus" => Some(Self::Focus),
            "visited" => Some(Self::Visited),
            "link" => Some(Self::Link),
            "first-child" => Some(Self::FirstChild),
            "last-child" => Some(Self::LastChild),
            "only-child" => Some(Self::OnlyChild),
            "empty" => Some(Self::Empty),
            _ => None,
        }
    }

    /// Check if this pseudo-class depends on dynamic element state.
    pub fn is_dynamic(&self) -> bool {
        matches!(
            self,
            Self::Hover | Self::Active | Self::Focus | Self::Visited | Self::Link
        )
    }
}

impl fmt::Display for PseudoClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PseudoClass::Hover => write!(f, "hover"),
            PseudoClass::Active => write!(f, "active"),
            PseudoClass::Focus => write!(f, "focus"),
            PseudoClass::Visited => write!(f, "visited"),
            PseudoClass::Link => write!(f, "link"),
            PseudoClass::FirstChild => write!(f, "first-child"),
            PseudoClass::LastChild => write!(f, "last-child"),
            PseudoClass::NthChild(expr) => write!(f, "nth-child({})", expr),
            PseudoClass::OnlyChild => write!(f, "only-child"),
            PseudoClass::Empty => write!(f, "empty"),
            PseudoClass::Not(inner) => write!(f, "not({})", inner),
        }
    }
}

/// Expression for `:nth-child` (An+B).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NthExpr {
    /// Coefficient (A in An+B).
    pub a: i32,
    /// Offset (B in An+B).
    pub b: i32,
}

impl NthExpr {
    /// Create a new nth expression.
    pub fn new(a: i32, b: i32) -> Self {
        Self { a, b }
    }

    /// Check if a 0-indexed position matches this expression.
    pub fn matches(&self, index: usize) -> bool {
        let n = index as i32 + 1; // 1-indexed in CSS
        if self.a == 0 {
            n == self.b
        } else {
            let diff = n - self.b;
            if self.a > 0 {
                diff >= 0 && diff % self.a == 0
            } else {
                diff <= 0 && diff % self.a == 0
            }
        }
    }

    /// `:nth-child(odd)` = 2n+1.
    pub fn odd() -> Self {
        Self { a: 2, b: 1 }
    }

    /// `:nth-child(even)` = 2n.
    pub fn even() -> Self {
        Self { a: 2, b: 0 }
    }

    /// `:nth-child(n)` - matches all.
    pub fn all() -> Self {
        Self { a: 1, b: 0 }
    }
}

impl fmt::Display for NthExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.a, self.b) {
            (2, 1) => write!(f, "odd"),
            (2, 0) => write!(f, "even"),
            (0, b) => write!(f, "{}", b),
            (1, 0) => write!(f, "n"),
            (a, 0) => write!(f, "{}n", a),
            (1, b) if b > 0 => write!(f, "n+{}", b),
            (1, b) => write!(f, "n{}", b),
            (a, b) if b > 0 => write!(f, "{}n+{}", a, b),
            (a, b) => write!(f, "{}n{}", a, b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_display() {
        let sel = Selector::tag("nav")
            .descendant(SelectorPart::tag_only("a").with_pseudo(PseudoClass::Hover));
        assert_eq!(sel.to_string(), "nav a:hover");

        let sel = Selector::tag("nav").child(SelectorPart::tag_only("ul"));
        assert_eq!(sel.to_string(), "nav > ul");
    }

    #[test]
    fn selector_part_display() {
        let part = SelectorPart::tag_only("button")
            .with_class("icon")
            .with_class("round")
            .with_pseudo(PseudoClass::Focus);
        assert_eq!(part.to_string(), "button.icon.round:focus");
    }

    #[test]
    fn dynamic_detection() {
        let sel = Selector::tag("a").descendant(SelectorPart::new().with_pseudo(PseudoClass::Hover));
        assert!(sel.is_dynamic());
        assert!(sel.has_pseudo_class(&PseudoClass::Hover));

        let sel = Selector::tag("li").descendant(
            SelectorPart::new().with_pseudo(PseudoClass::FirstChild),
        );
        assert!(!sel.is_dynamic());
    }

    #[test]
    fn nth_expr_matches() {
        // :nth-child(3)
        let expr = NthExpr::new(0, 3);
        assert!(!expr.matches(0));
        assert!(!expr.matches(1));
        assert!(expr.matches(2));
        assert!(!expr.matches(3));

        // :nth-child(odd) = 2n+1
        let expr = NthExpr::odd();
        assert!(expr.matches(0));
        assert!(!expr.matches(1));
        assert!(expr.matches(2));

        // :nth-child(even) = 2n
        let expr = NthExpr::even();
        assert!(!expr.matches(0));
        assert!(expr.matches(1));
        assert!(!expr.matches(2));
    }
}
