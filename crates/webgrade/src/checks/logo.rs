//! Logo styling checks.

use webgrade_dom::ElementExt;
use webgrade_style::types::{BackgroundRepeat, BackgroundSize, HorizontalAnchor, Length};

use crate::checks::require_one;
use crate::page::StyledPage;
use crate::report::{CheckResult, Expectations};

/// The logo is a background image on a padded, whitespace-only home link.
pub fn styled_logo(page: &StyledPage) -> CheckResult {
    let mut expect = Expectations::new("styled-logo");

    if let Some(logo) = require_one(page, ".logo", &mut expect) {
        let parent_is_home_link = logo.parent_element().is_some_and(|parent| {
            parent.value().name() == "a" && parent.value().attr("href") == Some("#")
        });
        expect.holds("logo sits inside an <a href=\"#\"> link", parent_is_home_link);
        expect.holds(
            "logo text is whitespace content",
            logo.full_text().chars().any(char::is_whitespace),
        );

        let style = page.style_of(&logo);
        expect.eq("logo padding-left", Some(Length::Em(1.0)), style.padding.left);
        expect.eq("logo padding-right", Some(Length::Em(1.0)), style.padding.right);

        expect.holds(
            "logo background image is the white symbol",
            style
                .background_image
                .as_ref()
                .and_then(|image| image.url())
                .is_some_and(|url| url.ends_with("ischool-symbol-white.png")),
        );
        expect.eq(
            "logo background anchored left",
            Some(HorizontalAnchor::Left),
            style.background_position.map(|position| position.horizontal),
        );
        expect.eq(
            "logo background-size",
            Some(BackgroundSize::Contain),
            style.background_size,
        );
        expect.eq(
            "logo background-repeat",
            Some(BackgroundRepeat::NoRepeat),
            style.background_repeat,
        );
    }

    expect.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r##"<!DOCTYPE html><html lang="en"><head><title>t</title></head><body>
        <a href="#"><span class="logo">&nbsp;</span></a>
        </body></html>"##;

    const CSS: &str = "\
        .logo { padding: 0 1em; background-image: url('../img/ischool-symbol-white.png'); \
        background-position: left center; background-size: contain; background-repeat: no-repeat; }";

    #[test]
    fn conforming_logo_passes() {
        let page = StyledPage::from_sources(PAGE, CSS).unwrap();
        let result = styled_logo(&page);
        assert!(result.is_pass(), "{result}");
    }

    #[test]
    fn shorthand_background_also_passes() {
        let css = ".logo { padding-left: 1em; padding-right: 1em; \
                   background: url('../img/ischool-symbol-white.png') no-repeat left center / contain; }";
        let page = StyledPage::from_sources(PAGE, css).unwrap();
        let result = styled_logo(&page);
        assert!(result.is_pass(), "{result}");
    }

    #[test]
    fn logo_outside_link_fails() {
        let html = PAGE.replace(
            r##"<a href="#"><span class="logo">&nbsp;</span></a>"##,
            r##"<span class="logo">&nbsp;</span>"##,
        );
        let page = StyledPage::from_sources(&html, CSS).unwrap();
        let result = styled_logo(&page);
        assert!(
            result
                .failures
                .iter()
                .any(|f| f.expectation.contains("home link"))
        );
    }

    #[test]
    fn repeating_background_fails() {
        let css = CSS.replace("no-repeat", "repeat");
        let page = StyledPage::from_sources(PAGE, &css).unwrap();
        let result = styled_logo(&page);
        assert!(
            result
                .failures
                .iter()
                .any(|f| f.expectation == "logo background-repeat")
        );
    }
}
