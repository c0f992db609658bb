//! No-op extractor for regex-only engines

use tracing::debug;

use super::EntityExtractor;
use crate::domain::{Result, Span};

/// Extractor used when no probabilistic backend is configured
///
/// Always succeeds with zero spans, so identification requested with
/// probabilistic extraction degrades to pattern-matcher output instead of
/// failing. A configured-but-broken backend is the
/// [`LexiconExtractor`](super::LexiconExtractor)'s unavailable state, not
/// this type.
pub struct DisabledExtractor;

impl EntityExtractor for DisabledExtractor {
    fn scan(&self, _text: &str) -> Result<Vec<Span>> {
        debug!("probabilistic extraction disabled, returning no spans");
        Ok(Vec::new())
    }
}
