//! Search box and icon button checks.

use std::sync::LazyLock;

use regex::Regex;

use webgrade_dom::ElementExt;
use webgrade_style::types::{Display, Float, Length, VerticalAlign};

use crate::checks::{require_one, select_all};
use crate::page::StyledPage;
use crate::report::{CheckResult, Expectations};

/// The search box floats right of the inline nav list, with a sized input.
pub fn search_input(page: &StyledPage) -> CheckResult {
    let mut expect = Expectations::new("search-input");

    if let Some(search_box) = require_one(page, ".searchBox", &mut expect) {
        expect.eq(
            "search box float",
            Some(Float::Right),
            page.style_of(&search_box).float,
        );
    }

    if let Some(list) = require_one(page, "nav > ul", &mut expect) {
        expect.eq(
            "nav list display",
            Some(Display::InlineBlock),
            page.style_of(&list).display,
        );
    }

    if let Some(input) = require_one(page, ".searchBox input", &mut expect) {
        let style = page.style_of(&input);
        expect.eq("search input height", Some(Length::Rem(2.5)), style.height);
        expect.eq("search input font-size", Some(Length::Rem(1.0)), style.font_size);
        expect.eq(
            "search input padding",
            Some(Length::Rem(0.5)),
            style.padding.uniform_value(),
        );
        expect.eq(
            "search input vertical-align",
            Some(VerticalAlign::Bottom),
            style.vertical_align,
        );
    }

    expect.finish()
}

static FONT_AWESOME_HREF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"font-?awesome.*(all)?(\.min)?\.css").expect("Font Awesome href pattern is valid")
});

/// The search button shows a labeled icon instead of the word "Search".
pub fn search_button_icon(page: &StyledPage) -> CheckResult {
    let mut expect = Expectations::new("search-button-icon");

    let links = select_all(page, "link", &mut expect);
    let imports = links
        .iter()
        .filter(|link| {
            link.value()
                .attr("href")
                .is_some_and(|href| FONT_AWESOME_HREF.is_match(href))
        })
        .count();
    expect.eq("links importing Font Awesome", 1, imports);

    if let Some(button) = require_one(page, ".searchBox > button", &mut expect) {
        let children = ElementExt::child_elements(&button);
        expect.eq("button child element count", 1, children.len());

        let icon = children
            .first()
            .copied()
            .filter(|child| child.has_class("fa") || child.has_class("fas"));
        expect.holds("button content is a Font Awesome icon", icon.is_some());
        expect.holds(
            "button does not spell out \"Search\"",
            !button.full_text().contains("Search"),
        );

        let style = page.style_of(&button);
        expect.eq("search button height", Some(Length::Rem(2.5)), style.height);
        expect.eq("search button font-size", Some(Length::Rem(1.5)), style.font_size);
        expect.eq(
            "search button padding",
            Some(Length::Rem(0.3)),
            style.padding.uniform_value(),
        );

        if let Some(icon) = icon {
            expect.holds(
                "icon has an aria-label naming search",
                icon.value()
                    .attr("aria-label")
                    .is_some_and(|label| label.to_ascii_lowercase().contains("search")),
            );
        }
    }

    expect.finish()
}
