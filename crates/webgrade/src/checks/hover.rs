//! Hover-state rule checks.
//!
//! `:hover` rules never match a static document, so this check inspects the
//! stylesheet at the rule level instead of reading computed styles.

use webgrade_style::selector::PseudoClass;
use webgrade_style::types::{BorderLineStyle, Length};

use crate::checks::ACCENT_GOLD;
use crate::page::StyledPage;
use crate::report::{CheckResult, Expectations};

/// Links change color and gain a gold bottom border on hover.
pub fn hover_effects(page: &StyledPage) -> CheckResult {
    let mut expect = Expectations::new("hover-effects");

    let hover_rules = page.stylesheet().rules_with_pseudo(&PseudoClass::Hover);
    expect.eq("hover rule count", 1, hover_rules.len());

    if let Some(rule) = hover_rules.first() {
        expect.holds(
            "hover rule also covers :active",
            rule.has_pseudo_class(&PseudoClass::Active),
        );
        expect.holds(
            "hover rule also covers :focus",
            rule.has_pseudo_class(&PseudoClass::Focus),
        );

        expect.eq(
            "hover color",
            Some(ACCENT_GOLD),
            rule.properties.color.as_set().copied(),
        );

        let border = rule.properties.border_bottom.as_set().copied().unwrap_or_default();
        expect.eq("hover border-bottom width", Some(Length::Rem(0.6)), border.width);
        expect.eq(
            "hover border-bottom style",
            Some(BorderLineStyle::Solid),
            border.style,
        );
        expect.eq("hover border-bottom color", Some(ACCENT_GOLD), border.color);
    }

    expect.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r##"<!DOCTYPE html><html lang="en"><head><title>t</title></head>
        <body><a href="#a">A</a></body></html>"##;

    #[test]
    fn conforming_hover_rule_passes() {
        let page = StyledPage::from_sources(
            PAGE,
            "a { color: white; }\n\
             a:hover, a:focus, a:active { color: #b7a57a; border-bottom: .6rem solid #b7a57a; }",
        )
        .unwrap();

        let result = hover_effects(&page);
        assert!(result.is_pass(), "{result}");
    }

    #[test]
    fn two_hover_rules_fail_the_count() {
        let page = StyledPage::from_sources(
            PAGE,
            "a:hover { color: #b7a57a; }\nnav a:hover { color: white; }",
        )
        .unwrap();

        let result = hover_effects(&page);
        assert!(
            result
                .failures
                .iter()
                .any(|f| f.expectation == "hover rule count" && f.actual == "2")
        );
    }

    #[test]
    fn wrong_border_width_fails() {
        let page = StyledPage::from_sources(
            PAGE,
            "a:hover, a:focus, a:active { color: #b7a57a; border-bottom: 1px solid #b7a57a; }",
        )
        .unwrap();

        let result = hover_effects(&page);
        assert!(
            result
                .failures
                .iter()
                .any(|f| f.expectation == "hover border-bottom width")
        );
    }
}
