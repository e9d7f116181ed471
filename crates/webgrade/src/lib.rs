//! Automated style grading for a static HTML/CSS page.
//!
//! A [`StyledPage`] loads one HTML document and one stylesheet, resolves
//! per-element computed styles, and the [`Rubric`] runs a fixed sequence of
//! named checks against it:
//!
//! - markup and stylesheet validity (lint)
//! - sizing model, color palette, fonts, and type sizes
//! - navbar layout, links, and list styling
//! - search box, input, and icon button styling
//! - hover-state rules (inspected at the rule level)
//! - logo styling
//!
//! Each check is independent and idempotent; failures carry the expectation
//! with expected and actual values. A missing file aborts the load, while a
//! missing element or undeclared property surfaces as an ordinary failed
//! comparison.
//!
//! # Example
//!
//! ```ignore
//! use webgrade::{Rubric, StyledPage};
//!
//! let page = StyledPage::load("index.html", "css/style.css")?;
//! let report = Rubric::standard().run(&page);
//! assert!(report.is_pass(), "{report}");
//! ```

pub mod checks;
pub mod page;
pub mod report;

mod error;

pub use checks::Rubric;
pub use error::{Error, Result};
pub use page::StyledPage;
pub use report::{CheckFailure, CheckReport, CheckResult};
