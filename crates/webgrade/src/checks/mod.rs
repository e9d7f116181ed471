//! The rubric: named checks against a styled page.
//!
//! Each check inspects the page and returns a [`CheckResult`]; checks never
//! abort, so one failed expectation does not hide the next. The expected
//! values are the grading constants for one specific submission design, so
//! they live here rather than in the engine crates.

mod hover;
mod logo;
mod navbar;
mod search;
mod sizing;
mod typography;
mod validity;

pub use hover::hover_effects;
pub use logo::styled_logo;
pub use navbar::{navbar_layout, navbar_links, navbar_list};
pub use search::{search_button_icon, search_input};
pub use sizing::border_box_sizing;
pub use typography::colors_fonts_sizes;
pub use validity::{css_validates, html_validates};

use scraper::ElementRef;

use webgrade_style::types::Color;

use crate::page::StyledPage;
use crate::report::{CheckReport, CheckResult, Expectations};

/// Body text gray.
pub(crate) const BODY_GRAY: Color = Color::rgb(0x53, 0x53, 0x53);
/// Heading and navbar purple.
pub(crate) const BRAND_PURPLE: Color = Color::rgb(0x4b, 0x2e, 0x83);
/// Hover accent gold.
pub(crate) const ACCENT_GOLD: Color = Color::rgb(0xb7, 0xa5, 0x7a);

/// A rubric check: inspects the page and returns a named result.
pub type CheckFn = fn(&StyledPage) -> CheckResult;

/// The ordered list of checks applied to a submission.
pub struct Rubric {
    checks: Vec<CheckFn>,
}

impl Rubric {
    /// The standard rubric, in grading order.
    pub fn standard() -> Self {
        Self {
            checks: vec![
                html_validates,
                css_validates,
                border_box_sizing,
                colors_fonts_sizes,
                navbar_layout,
                navbar_links,
                navbar_list,
                search_input,
                search_button_icon,
                hover_effects,
                styled_logo,
            ],
        }
    }

    /// Run every check against the page.
    pub fn run(&self, page: &StyledPage) -> CheckReport {
        CheckReport {
            results: self.checks.iter().map(|check| check(page)).collect(),
        }
    }

    /// Number of checks.
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Check if the rubric has no checks.
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

/// All elements matching `selector`; an invalid selector is recorded as a
/// failure rather than panicking.
pub(crate) fn select_all<'a>(
    page: &'a StyledPage,
    selector: &str,
    expect: &mut Expectations,
) -> Vec<ElementRef<'a>> {
    match page.select(selector) {
        Ok(elements) => elements,
        Err(error) => {
            expect.holds(format!("selector `{selector}` is valid ({error})"), false);
            vec![]
        }
    }
}

/// The single element a check needs; absence is a recorded failure.
pub(crate) fn require_one<'a>(
    page: &'a StyledPage,
    selector: &str,
    expect: &mut Expectations,
) -> Option<ElementRef<'a>> {
    let found = select_all(page, selector, expect).into_iter().next();
    if found.is_none() {
        expect.holds(format!("page contains `{selector}`"), false);
    }
    found
}
