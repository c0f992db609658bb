//! Span deduplicator
//!
//! Merges pattern-matcher and extractor output into one list free of any pair
//! of overlapping spans.

use crate::domain::Span;

/// Resolves position overlaps, keeping the more trustworthy span
///
/// Input is sorted by `(start, end)` ascending (stable), then walked against
/// the accepted list. On overlap the higher-confidence span survives; an
/// exact confidence tie keeps the already-accepted span, which also covers
/// the two-pattern-matches case since those can never overlap. Quadratic in
/// the accepted list, but n is bounded by sensitive-item density, not
/// document size.
pub fn dedupe(mut spans: Vec<Span>) -> Vec<Span> {
    if spans.is_empty() {
        return spans;
    }

    spans.sort_by(|a, b| (a.start, a.end).cmp(&(b.start, b.end)));

    let mut accepted: Vec<Span> = Vec::with_capacity(spans.len());
    for candidate in spans {
        match accepted.iter().position(|existing| candidate.overlaps(existing)) {
            Some(idx) => {
                if candidate.confidence > accepted[idx].confidence {
                    accepted[idx] = candidate;
                }
            }
            None => accepted.push(candidate),
        }
    }

    accepted
}
