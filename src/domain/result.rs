//! Result type alias for Lethe
//!
//! Convenience alias using [`LetheError`](super::errors::LetheError) as the
//! error type. Use this throughout the codebase for fallible operations.

use super::errors::LetheError;

/// Result type alias for Lethe operations
pub type Result<T> = std::result::Result<T, LetheError>;
