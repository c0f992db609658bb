//! Domain error types
//!
//! The crate-wide error taxonomy. Invalid span construction and a missing
//! extractor backend are the only errors the two public entry points surface;
//! everything else degrades in place rather than aborting a document.

use thiserror::Error;

/// Main Lethe error type
#[derive(Debug, Error)]
pub enum LetheError {
    /// A span was constructed with a non-positive extent
    #[error("invalid span: end ({end}) must be greater than start ({start})")]
    InvalidSpan { start: usize, end: usize },

    /// The probabilistic extractor backend failed to initialize
    ///
    /// Propagates out of `identify` when the caller requested probabilistic
    /// extraction; never raised otherwise.
    #[error("entity extractor unavailable: {0}")]
    ExtractorUnavailable(String),

    /// A scan failed after the extractor backend had initialized
    ///
    /// Recovered inside the recognition engine; callers only see this through
    /// a direct extractor invocation.
    #[error("entity extractor scan failed: {0}")]
    ExtractorScan(String),

    /// Configuration-related errors
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Detection pattern compilation errors
    #[error("pattern error: {0}")]
    Pattern(String),
}

// Error alias used throughout the crate
pub use self::LetheError as Error;

impl From<regex::Error> for LetheError {
    fn from(err: regex::Error) -> Self {
        LetheError::Pattern(err.to_string())
    }
}

impl From<toml::de::Error> for LetheError {
    fn from(err: toml::de::Error) -> Self {
        LetheError::Configuration(format!("TOML parse error: {err}"))
    }
}

impl From<std::io::Error> for LetheError {
    fn from(err: std::io::Error) -> Self {
        LetheError::Configuration(format!("I/O error: {err}"))
    }
}
