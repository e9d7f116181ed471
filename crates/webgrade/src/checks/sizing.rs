//! Sizing model check.

use webgrade_style::types::BoxSizing;

use crate::checks::require_one;
use crate::page::StyledPage;
use crate::report::{CheckResult, Expectations};

/// The page opts into border-box sizing.
pub fn border_box_sizing(page: &StyledPage) -> CheckResult {
    let mut expect = Expectations::new("border-box-sizing");

    if let Some(body) = require_one(page, "body", &mut expect) {
        let style = page.style_of(&body);
        expect.eq("body box-sizing", Some(BoxSizing::BorderBox), style.box_sizing);
    }

    expect.finish()
}
