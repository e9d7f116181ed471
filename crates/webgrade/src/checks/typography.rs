//! Color palette, font, and type size checks.

use webgrade_style::types::{FontWeight, Length};

use crate::checks::{BODY_GRAY, BRAND_PURPLE, require_one, select_all};
use crate::page::StyledPage;
use crate::report::{CheckResult, Expectations};

/// The page uses the expected colors, fonts, and sizes.
pub fn colors_fonts_sizes(page: &StyledPage) -> CheckResult {
    let mut expect = Expectations::new("colors-fonts-sizes");

    if let Some(body) = require_one(page, "body", &mut expect) {
        let style = page.style_of(&body);
        expect.eq("body color", Some(BODY_GRAY), style.color);
        expect.holds(
            "body font stack includes Open Sans",
            style
                .font_family
                .as_ref()
                .is_some_and(|stack| stack.contains_name("Open Sans")),
        );
        expect.eq("body margin", Some(Length::Px(8.0)), style.margin.uniform_value());
    }

    for selector in ["h1", "h2"] {
        if let Some(heading) = require_one(page, selector, &mut expect) {
            let style = page.style_of(&heading);
            expect.eq(format!("{selector} color"), Some(BRAND_PURPLE), style.color);
            expect.holds(
                format!("{selector} font stack includes Encode Sans"),
                style
                    .font_family
                    .as_ref()
                    .is_some_and(|stack| stack.contains_name("Encode Sans")),
            );
            expect.eq(
                format!("{selector} font-weight"),
                Some(FontWeight::BLACK),
                style.font_weight,
            );
        }
    }

    if let Some(h1) = require_one(page, "h1", &mut expect) {
        expect.eq(
            "h1 font-size",
            Some(Length::Rem(2.5)),
            page.style_of(&h1).font_size,
        );
    }

    // The fonts must actually be imported.
    let links = select_all(page, "link", &mut expect);
    let importing = |needle: &str| {
        links
            .iter()
            .filter(|link| {
                link.value()
                    .attr("href")
                    .is_some_and(|href| href.contains(needle))
            })
            .count()
    };
    expect.eq("links importing Encode Sans", 1, importing("Encode+Sans"));
    expect.eq("links importing Open Sans", 1, importing("Open+Sans"));

    expect.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<!DOCTYPE html><html lang="en"><head>
        <title>t</title>
        <link rel="stylesheet" href="https://fonts.googleapis.com/css?family=Encode+Sans:900">
        <link rel="stylesheet" href="https://fonts.googleapis.com/css?family=Open+Sans">
        </head><body><h1>Title</h1><h2>Sub</h2></body></html>"#;

    const CSS: &str = "body { color: #535353; font-family: 'Open Sans', sans-serif; margin: 8px; }\n\
        h1, h2 { color: #4b2e83; font-family: 'Encode Sans', sans-serif; font-weight: 900; }\n\
        h1 { font-size: 2.5rem; }";

    #[test]
    fn conforming_page_passes() {
        let page = StyledPage::from_sources(PAGE, CSS).unwrap();
        let result = colors_fonts_sizes(&page);
        assert!(result.is_pass(), "{result}");
    }

    #[test]
    fn heading_inherits_nothing_it_should_declare() {
        // Without the heading rule, h1 inherits the body gray and the check
        // reports the inherited value as the actual.
        let page = StyledPage::from_sources(PAGE, "body { color: #535353; }").unwrap();
        let result = colors_fonts_sizes(&page);
        assert!(!result.is_pass());
        assert!(
            result
                .failures
                .iter()
                .any(|f| f.expectation == "h1 color" && f.actual.contains("#535353"))
        );
    }

    #[test]
    fn missing_font_import_fails() {
        let page = StyledPage::from_sources(
            r#"<!DOCTYPE html><html lang="en"><head><title>t</title></head>
               <body><h1>Title</h1><h2>Sub</h2></body></html>"#,
            CSS,
        )
        .unwrap();
        let result = colors_fonts_sizes(&page);
        assert!(
            result
                .failures
                .iter()
                .any(|f| f.expectation.contains("importing Encode Sans"))
        );
    }
}
