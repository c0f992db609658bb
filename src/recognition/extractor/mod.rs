//! Entity extractor capability interface
//!
//! Probabilistic detection of the unstructured categories, person names and
//! addresses, at a fixed confidence below 1.0. Exactly two implementations
//! exist, selected at engine construction: [`DisabledExtractor`] when no
//! backend is configured and [`LexiconExtractor`] for lexicon-driven
//! heuristic extraction.

pub mod disabled;
pub mod lexicon;

use crate::domain::{Result, Span};

/// Trait for probabilistic entity extraction backends
pub trait EntityExtractor: Send + Sync {
    /// Scans text for Name and Address spans
    ///
    /// # Errors
    ///
    /// [`LetheError::ExtractorUnavailable`](crate::domain::LetheError::ExtractorUnavailable)
    /// when the backend failed to initialize;
    /// [`LetheError::ExtractorScan`](crate::domain::LetheError::ExtractorScan)
    /// for failures after initialization. The recognition engine propagates
    /// the former and recovers from the latter.
    fn scan(&self, text: &str) -> Result<Vec<Span>>;
}

pub use disabled::DisabledExtractor;
pub use lexicon::LexiconExtractor;
