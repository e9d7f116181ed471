//! Check results and the aggregate report.

use std::fmt;

/// One failed expectation: what was checked, what was expected, what the
/// page actually had.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckFailure {
    /// What the expectation was about.
    pub expectation: String,
    /// The expected value, rendered.
    pub expected: String,
    /// The actual value, rendered.
    pub actual: String,
}

impl fmt::Display for CheckFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: expected {}, got {}",
            self.expectation, self.expected, self.actual
        )
    }
}

/// The outcome of one named check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    /// The check's name.
    pub name: &'static str,
    /// Every failed expectation; empty means the check passed.
    pub failures: Vec<CheckFailure>,
}

impl CheckResult {
    /// Check if every expectation held.
    pub fn is_pass(&self) -> bool {
        self.failures.is_empty()
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_pass() {
            write!(f, "{}: ok", self.name)
        } else {
            write!(f, "{}: FAILED", self.name)?;
            for failure in &self.failures {
                write!(f, "\n  - {failure}")?;
            }
            Ok(())
        }
    }
}

/// The outcomes of a full rubric run, in check order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// Per-check results.
    pub results: Vec<CheckResult>,
}

impl CheckReport {
    /// Check if every check passed.
    pub fn is_pass(&self) -> bool {
        self.results.iter().all(CheckResult::is_pass)
    }

    /// Number of passing checks.
    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.is_pass()).count()
    }

    /// Number of failing checks.
    pub fn failed(&self) -> usize {
        self.results.len() - self.passed()
    }

    /// The result of a named check, if the rubric ran it.
    pub fn result(&self, name: &str) -> Option<&CheckResult> {
        self.results.iter().find(|r| r.name == name)
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for result in &self.results {
            writeln!(f, "{result}")?;
        }
        write!(f, "{} passed, {} failed", self.passed(), self.failed())
    }
}

/// Failure collector used inside check functions.
pub(crate) struct Expectations {
    name: &'static str,
    failures: Vec<CheckFailure>,
}

impl Expectations {
    /// Start collecting for a named check.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            failures: vec![],
        }
    }

    /// Expect two values to compare equal.
    pub fn eq<T: PartialEq + fmt::Debug>(
        &mut self,
        expectation: impl Into<String>,
        expected: T,
        actual: T,
    ) {
        if expected != actual {
            self.failures.push(CheckFailure {
                expectation: expectation.into(),
                expected: format!("{expected:?}"),
                actual: format!("{actual:?}"),
            });
        }
    }

    /// Expect a condition to hold.
    pub fn holds(&mut self, expectation: impl Into<String>, condition: bool) {
        if !condition {
            self.failures.push(CheckFailure {
                expectation: expectation.into(),
                expected: "satisfied".to_string(),
                actual: "not satisfied".to_string(),
            });
        }
    }

    /// Finish the check.
    pub fn finish(self) -> CheckResult {
        CheckResult {
            name: self.name,
            failures: self.failures,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expectations_collect_failures() {
        let mut expect = Expectations::new("demo");
        expect.eq("answer", 42, 42);
        expect.eq("color", "white", "purple");
        expect.holds("page has a nav", false);

        let result = expect.finish();
        assert!(!result.is_pass());
        assert_eq!(result.failures.len(), 2);
        assert_eq!(result.failures[0].expectation, "color");
    }

    #[test]
    fn report_summary() {
        let report = CheckReport {
            results: vec![
                CheckResult {
                    name: "a",
                    failures: vec![],
                },
                CheckResult {
                    name: "b",
                    failures: vec![CheckFailure {
                        expectation: "x".into(),
                        expected: "1".into(),
                        actual: "2".into(),
                    }],
                },
            ],
        };

        assert!(!report.is_pass());
        assert_eq!(report.passed(), 1);
        assert_eq!(report.failed(), 1);
        assert!(report.result("b").is_some_and(|r| !r.is_pass()));

        let rendered = report.to_string();
        assert!(rendered.contains("a: ok"));
        assert!(rendered.contains("b: FAILED"));
        assert!(rendered.contains("expected 1, got 2"));
    }
}
