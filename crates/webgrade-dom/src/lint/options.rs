//! Markup lint rule configuration.

/// Configuration for [`HtmlLinter`](crate::lint::HtmlLinter).
///
/// The defaults carry the rule set used for static page submissions:
/// presentational and layout attributes belong in the stylesheet, `<style>`
/// and `<b>` stay out of the markup, the document leads with the HTML5
/// doctype, and the page declares a language and image alt text.
#[derive(Debug, Clone)]
pub struct LintOptions {
    /// Attribute names that must not appear on any element.
    pub attr_bans: Vec<String>,
    /// Tag names that must not appear.
    pub tag_bans: Vec<String>,
    /// The document must start with a doctype.
    pub doctype_first: bool,
    /// The doctype must be the HTML5 doctype (`<!DOCTYPE html>`).
    pub doctype_html5: bool,
    /// `<html>` must carry a non-empty `lang` attribute.
    pub require_lang: bool,
    /// Every `<img>` must carry non-empty alt text.
    pub require_img_alt: bool,
}

impl Default for LintOptions {
    fn default() -> Self {
        Self {
            attr_bans: [
                "align",
                "background",
                "bgcolor",
                "border",
                "frameborder",
                "marginwidth",
                "marginheight",
                "scrolling",
                "style",
                "width",
                "height",
            ]
            .map(str::to_string)
            .to_vec(),
            tag_bans: ["style", "b"].map(str::to_string).to_vec(),
            doctype_first: true,
            doctype_html5: true,
            require_lang: true,
            require_img_alt: true,
        }
    }
}

impl LintOptions {
    /// Every rule disabled; a base for selective configurations.
    pub fn none() -> Self {
        Self {
            attr_bans: vec![],
            tag_bans: vec![],
            doctype_first: false,
            doctype_html5: false,
            require_lang: false,
            require_img_alt: false,
        }
    }
}
