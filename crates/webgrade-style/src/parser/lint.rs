//! CSS syntax linting.
//!
//! Linting runs the same grammar as [`parse_css`](crate::parser::parse_css),
//! but parse failures are collected and returned instead of being skipped
//! with a log line.

use std::fmt;

/// One CSS syntax problem, located in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssDiagnostic {
    /// 1-based source line.
    pub line: u32,
    /// Source column.
    pub column: u32,
    /// What went wrong.
    pub message: String,
}

impl fmt::Display for CssDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.line, self.column, self.message)
    }
}

/// Lint a stylesheet, returning every syntax problem found.
///
/// An empty list means the stylesheet parsed cleanly.
pub fn lint_css(css: &str) -> Vec<CssDiagnostic> {
    let mut diagnostics = vec![];
    let _ = super::css_parser::parse_rules(css, &mut diagnostics);
    diagnostics
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_css_has_no_diagnostics() {
        let css = "nav { position: fixed; top: 0; }\n.logo { padding: 0 1em; }";
        assert!(lint_css(css).is_empty());
    }

    #[test]
    fn missing_colon_is_reported() {
        let css = "nav { position fixed; }";
        let diagnostics = lint_css(css);
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("position"));
        assert_eq!(diagnostics[0].line, 1);
    }

    #[test]
    fn bad_selector_is_reported_and_recovered() {
        let css = "} nav { color: white; }\nfooter { text-align: center; }";
        let diagnostics = lint_css(css);
        assert!(!diagnostics.is_empty());
    }

    #[test]
    fn diagnostics_carry_later_lines() {
        let css = "nav { color: white; }\n\nh1 { font-size }\n";
        let diagnostics = lint_css(css);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].line, 3);
    }
}
