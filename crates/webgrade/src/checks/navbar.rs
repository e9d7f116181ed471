//! Navbar layout, link, and list checks.

use webgrade_style::types::{Color, Display, Length, Position, TextDecoration};

use crate::checks::{BRAND_PURPLE, require_one, select_all};
use crate::page::StyledPage;
use crate::report::{CheckResult, Expectations};

/// The navbar is pinned to the top edge and styled.
pub fn navbar_layout(page: &StyledPage) -> CheckResult {
    let mut expect = Expectations::new("navbar-layout");

    if let Some(nav) = require_one(page, "nav", &mut expect) {
        let style = page.style_of(&nav);
        expect.eq("nav position", Some(Position::Fixed), style.position);
        expect.eq("nav top", Some(Length::Zero), style.top());
        expect.eq("nav left", Some(Length::Zero), style.left());
        expect.eq("nav width", Some(Length::Percent(100.0)), style.width);
        expect.eq(
            "nav background-color",
            Some(BRAND_PURPLE),
            style.background_color,
        );
        expect.eq("nav padding", Some(Length::Rem(0.75)), style.padding.uniform_value());
    }

    if let Some(h1) = require_one(page, "h1", &mut expect) {
        expect.eq(
            "h1 margin-top clears the fixed navbar",
            Some(Length::Em(3.0)),
            page.style_of(&h1).margin.top,
        );
    }

    expect.finish()
}

/// Navbar links are white and undecorated.
pub fn navbar_links(page: &StyledPage) -> CheckResult {
    let mut expect = Expectations::new("navbar-links");

    let links = select_all(page, "nav a", &mut expect);
    expect.holds("nav contains links", !links.is_empty());

    if let Some(link) = links.first() {
        let style = page.style_of(link);
        expect.eq("nav link color", Some(Color::WHITE), style.color);
        expect.eq(
            "nav link text-decoration",
            Some(TextDecoration::None),
            style.text_decoration,
        );
    }

    expect.finish()
}

/// The navbar list is flattened into a styled inline row.
pub fn navbar_list(page: &StyledPage) -> CheckResult {
    let mut expect = Expectations::new("navbar-list");

    if let Some(item) = require_one(page, "nav li", &mut expect) {
        let style = page.style_of(&item);
        expect.eq("nav item display", Some(Display::Inline), style.display);
        expect.eq("nav item margin-right", Some(Length::Rem(1.0)), style.margin.right);
    }

    if let Some(list) = require_one(page, "nav > ul", &mut expect) {
        let style = page.style_of(&list);
        expect.eq("nav list margin", Some(Length::Zero), style.margin.uniform_value());
        expect.eq("nav list padding-top", Some(Length::Rem(0.5)), style.padding.top);
        for (side, actual) in [
            ("right", style.padding.right),
            ("bottom", style.padding.bottom),
            ("left", style.padding.left),
        ] {
            expect.eq(format!("nav list padding-{side}"), Some(Length::Zero), actual);
        }
    }

    expect.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r##"<!DOCTYPE html><html lang="en"><head><title>t</title></head><body>
        <nav><ul><li><a href="#a">A</a></li><li><a href="#b">B</a></li></ul></nav>
        <h1>Title</h1>
        </body></html>"##;

    const CSS: &str = "\
        nav { position: fixed; top: 0; left: 0; width: 100%; background-color: #4b2e83; padding: .75rem; }\n\
        nav a { color: white; text-decoration: none; }\n\
        nav li { display: inline; margin-right: 1rem; }\n\
        nav ul { padding: 0; margin: 0; padding-top: .5rem; }\n\
        h1 { margin-top: 3em; }";

    #[test]
    fn conforming_navbar_passes_all_three() {
        let page = StyledPage::from_sources(PAGE, CSS).unwrap();
        for (name, result) in [
            ("layout", navbar_layout(&page)),
            ("links", navbar_links(&page)),
            ("list", navbar_list(&page)),
        ] {
            assert!(result.is_pass(), "{name}: {result}");
        }
    }

    #[test]
    fn static_navbar_fails_layout() {
        let css = CSS.replace("position: fixed;", "position: static;");
        let page = StyledPage::from_sources(PAGE, &css).unwrap();
        let result = navbar_layout(&page);
        assert!(
            result
                .failures
                .iter()
                .any(|f| f.expectation == "nav position" && f.actual.contains("Static"))
        );
    }

    #[test]
    fn shorthand_padding_zero_with_top_longhand() {
        // `padding: 0; padding-top: .5rem` must leave the other three sides
        // at zero, not undeclared.
        let page = StyledPage::from_sources(PAGE, CSS).unwrap();
        let result = navbar_list(&page);
        assert!(result.is_pass(), "{result}");
    }
}
