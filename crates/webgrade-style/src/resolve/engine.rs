//! Document-wide style resolution.

use std::collections::HashMap;

use ego_tree::NodeId;
use scraper::{ElementRef, Html};

use crate::parser::parse_inline_style;
use crate::resolve::{cascade_properties, resolve_properties};
use crate::rules::StyleSheet;
use crate::selector::{
    AncestorProvider, ElementContext, SiblingInfo, SpecificityWithOrder, matches_full,
};
use crate::style::{ComputedStyle, StyleProperties};

/// Resolves computed styles for every element of a parsed document.
///
/// For each element: match every non-dynamic selector, order the matching
/// rules by specificity then source order, cascade their properties, apply
/// the element's `style` attribute last, and resolve inheritance against the
/// parent's computed style.
#[derive(Debug, Default)]
pub struct StyleResolver {
    stylesheets: Vec<StyleSheet>,
}

impl StyleResolver {
    /// Create a resolver with no stylesheets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver over a single stylesheet.
    pub fn with_stylesheet(stylesheet: StyleSheet) -> Self {
        Self {
            stylesheets: vec![stylesheet],
        }
    }

    /// Add a stylesheet. Rules cascade by specificity and per-sheet source
    /// order.
    pub fn add_stylesheet(&mut self, stylesheet: StyleSheet) {
        self.stylesheets.push(stylesheet);
    }

    /// The registered stylesheets.
    pub fn stylesheets(&self) -> &[StyleSheet] {
        &self.stylesheets
    }

    /// Resolve computed styles for the whole document, top-down.
    pub fn resolve_document(&self, document: &Html) -> ComputedStyles {
        let mut styles = ComputedStyles::default();

        // Preorder walk, so a parent's computed style exists before its
        // children resolve inheritance against it.
        for node in document.tree.root().descendants() {
            let Some(element) = ElementRef::wrap(node) else {
                continue;
            };

            let cascaded = self.cascaded_properties(&element);
            let parent = node.parent().and_then(|p| styles.map.get(&p.id()));
            let computed = resolve_properties(&cascaded, parent);
            styles.map.insert(node.id(), computed);
        }

        styles
    }

    /// Cascade every matching rule (and the inline style) for one element.
    fn cascaded_properties(&self, element: &ElementRef<'_>) -> StyleProperties {
        let context = element_context(element);
        let scope = DomScope { element: *element };

        let mut matched: Vec<(SpecificityWithOrder, &StyleProperties)> = vec![];
        for sheet in &self.stylesheets {
            for rule in sheet.iter() {
                // A rule applies with the highest specificity among its
                // matching selectors.
                let mut best = None;
                for (selector, specificity) in rule.selectors_with_specificity() {
                    if selector.is_dynamic() {
                        continue;
                    }
                    if matches_full(selector, &context, &scope) {
                        best = Some(match best {
                            Some(current) if current > *specificity => current,
                            _ => *specificity,
                        });
                    }
                }
                if let Some(specificity) = best {
                    matched.push((specificity.with_order(rule.order), &rule.properties));
                }
            }
        }

        matched.sort_by_key(|(precedence, _)| *precedence);

        let mut cascaded = StyleProperties::default();
        for (_, properties) in &matched {
            cascade_properties(&mut cascaded, properties);
        }

        // The style attribute always wins over stylesheet rules.
        if let Some(inline) = element.value().attr("style") {
            match parse_inline_style(inline) {
                Ok(properties) => cascade_properties(&mut cascaded, &properties),
                Err(error) => tracing::warn!("ignoring unparsable style attribute: {error}"),
            }
        }

        cascaded
    }
}

/// Computed styles for a document, keyed by DOM node id.
#[derive(Debug, Default)]
pub struct ComputedStyles {
    map: HashMap<NodeId, ComputedStyle>,
}

impl ComputedStyles {
    /// The computed style of an element.
    pub fn style_of(&self, element: &ElementRef<'_>) -> Option<&ComputedStyle> {
        self.map.get(&element.id())
    }

    /// The computed style for a node id.
    pub fn get(&self, id: NodeId) -> Option<&ComputedStyle> {
        self.map.get(&id)
    }

    /// Number of styled elements.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if no elements were styled.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Build the matcher's view of one element.
pub(crate) fn element_context(element: &ElementRef<'_>) -> ElementContext {
    let value = element.value();

    let sibling_info = element
        .parent()
        .and_then(ElementRef::wrap)
        .map(|parent| {
            let mut index = 0;
            let mut count = 0;
            for (i, sibling) in parent.children().filter_map(ElementRef::wrap).enumerate() {
                if sibling.id() == element.id() {
                    index = i;
                }
                count += 1;
            }
            SiblingInfo { index, count }
        });

    ElementContext {
        tag_name: value.name().to_ascii_lowercase(),
        id: value.id().map(str::to_string),
        classes: value.classes().map(str::to_string).collect(),
        sibling_info,
        child_count: element.children().filter_map(ElementRef::wrap).count(),
    }
}

/// Ancestor/sibling lookups over the real DOM.
struct DomScope<'a> {
    element: ElementRef<'a>,
}

impl AncestorProvider for DomScope<'_> {
    fn ancestors(&self) -> Vec<ElementContext> {
        self.element
            .ancestors()
            .filter_map(ElementRef::wrap)
            .map(|ancestor| element_context(&ancestor))
            .collect()
    }

    fn previous_sibling(&self) -> Option<ElementContext> {
        self.element
            .prev_siblings()
            .filter_map(ElementRef::wrap)
            .next()
            .map(|sibling| element_context(&sibling))
    }

    fn previous_siblings(&self) -> Vec<ElementContext> {
        self.element
            .prev_siblings()
            .filter_map(ElementRef::wrap)
            .map(|sibling| element_context(&sibling))
            .collect()
    }
}
