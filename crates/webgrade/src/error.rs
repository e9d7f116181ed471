//! Error types for the grading harness.

/// Result type alias for harness operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading a page for grading.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Document loading or querying failed.
    #[error(transparent)]
    Dom(#[from] webgrade_dom::Error),

    /// Stylesheet loading or parsing failed.
    #[error(transparent)]
    Style(#[from] webgrade_style::Error),
}
