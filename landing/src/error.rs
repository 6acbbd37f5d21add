//! Error types for the landing page.
//!
//! Nothing here is fatal: callers log the error and leave the page as it is.

use thiserror::Error;

/// Failures while touching the browser DOM.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LandingError {
    #[error("no global `window` available")]
    NoWindow,

    #[error("window has no `document`")]
    NoDocument,

    #[error("section `#{0}` not found")]
    SectionNotFound(String),

    #[error("element `#{0}` is not an HtmlElement")]
    NotHtmlElement(String),
}

/// Rejected values in `site.json`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse site config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("`{field}` must be a finite, non-negative number (got {value})")]
    InvalidOffset { field: &'static str, value: f64 },

    #[error("`toast_duration_ms` must be greater than zero")]
    ZeroToastDuration,

    #[error("unknown log level `{0}` (expected trace, debug, info, warn or error)")]
    InvalidLogLevel(String),
}
