//! Element query helpers.

use scraper::ElementRef;

/// Convenience accessors on DOM elements.
pub trait ElementExt<'a> {
    /// Child elements only (text and comment nodes skipped).
    fn child_elements(&self) -> Vec<ElementRef<'a>>;

    /// The parent, if it is an element.
    fn parent_element(&self) -> Option<ElementRef<'a>>;

    /// All text content, concatenated.
    fn full_text(&self) -> String;

    /// The element's class list.
    fn class_list(&self) -> Vec<String>;

    /// Check if the element carries a class.
    fn has_class(&self, class: &str) -> bool;
}

impl<'a> ElementExt<'a> for ElementRef<'a> {
    fn child_elements(&self) -> Vec<ElementRef<'a>> {
        self.children().filter_map(ElementRef::wrap).collect()
    }

    fn parent_element(&self) -> Option<ElementRef<'a>> {
        self.parent().and_then(ElementRef::wrap)
    }

    fn full_text(&self) -> String {
        self.text().collect()
    }

    fn class_list(&self) -> Vec<String> {
        self.value().classes().map(str::to_string).collect()
    }

    fn has_class(&self, class: &str) -> bool {
        self.value().classes().any(|c| c == class)
    }
}
