//! Source validity checks: markup and stylesheet lint.

use crate::page::StyledPage;
use crate::report::{CheckResult, Expectations};

/// The markup passes the configured lint rules.
pub fn html_validates(page: &StyledPage) -> CheckResult {
    let mut expect = Expectations::new("html-validates");
    for diagnostic in page.lint_markup() {
        expect.holds(format!("markup lint: {diagnostic}"), false);
    }
    expect.finish()
}

/// The stylesheet parses without syntax errors.
pub fn css_validates(page: &StyledPage) -> CheckResult {
    let mut expect = Expectations::new("css-validates");
    for diagnostic in page.lint_styles() {
        expect.holds(format!("stylesheet lint: {diagnostic}"), false);
    }
    expect.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banned_attribute_fails_markup_check() {
        let page = StyledPage::from_sources(
            r#"<!DOCTYPE html><html lang="en"><head><title>t</title></head>
               <body><p style="color: red">x</p></body></html>"#,
            "",
        )
        .unwrap();

        let result = html_validates(&page);
        assert!(!result.is_pass());
        assert!(result.failures[0].expectation.contains("attr-bans"));
    }

    #[test]
    fn css_syntax_error_fails_stylesheet_check() {
        let page = StyledPage::from_sources(
            r#"<!DOCTYPE html><html lang="en"><head><title>t</title></head><body></body></html>"#,
            "nav { position fixed; }",
        )
        .unwrap();

        let result = css_validates(&page);
        assert!(!result.is_pass());
    }
}
