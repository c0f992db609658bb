//! Pattern matcher set for structured sensitive data
//!
//! A fixed, ordered collection of deterministic detectors, one per structured
//! category, each producing spans at confidence 1.0. Priority order is chosen
//! so a longer, more specific pattern claims its characters before a shorter,
//! more general one can consume a subset of them: an 18-character identity
//! number must never be double-counted as a bank card number, and a phone
//! number must not be suffix-matched inside a longer digit run.

use regex::Regex;

use crate::domain::{Category, Result, Span};
use crate::recognition::CharCursor;

/// Detection patterns in priority order
const STRUCTURED_PATTERNS: [(Category, &str); 4] = [
    // 18-character identity number, last character may be a check letter
    (Category::IdCard, r"\d{17}[\dXx]"),
    // 16-19 digit card number run
    (Category::BankCard, r"\d{16,19}"),
    // 11-digit mobile number with constrained second digit
    (Category::Phone, r"1[3-9]\d{9}"),
    (Category::Email, r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}"),
];

/// Confidence carried by every pattern-matcher span
const PATTERN_CONFIDENCE: f32 = 1.0;

struct CompiledPattern {
    category: Category,
    regex: Regex,
}

/// Ordered set of deterministic detectors for structured categories
pub struct PatternSet {
    patterns: Vec<CompiledPattern>,
}

impl PatternSet {
    /// Compiles the built-in detection patterns
    pub fn new() -> Result<Self> {
        let mut patterns = Vec::with_capacity(STRUCTURED_PATTERNS.len());
        for (category, pattern) in STRUCTURED_PATTERNS {
            patterns.push(CompiledPattern {
                category,
                regex: Regex::new(pattern)?,
            });
        }
        Ok(Self { patterns })
    }

    /// Scans text with every pattern in priority order
    ///
    /// Positions claimed by a higher-priority match exclude lower-priority
    /// matches that touch them. Zero matches is a valid result.
    pub fn scan(&self, text: &str) -> Result<Vec<Span>> {
        let mut spans = Vec::new();
        let mut claimed = ClaimedIntervals::default();

        for pattern in &self.patterns {
            // Matches of one regex arrive in order, so a single forward
            // cursor converts their byte offsets to codepoint offsets.
            let mut cursor = CharCursor::new(text);
            for found in pattern.regex.find_iter(text) {
                let start = cursor.char_offset(found.start());
                let end = cursor.char_offset(found.end());
                if claimed.is_free(start, end) {
                    spans.push(Span::new(
                        pattern.category,
                        found.as_str(),
                        start,
                        end,
                        PATTERN_CONFIDENCE,
                    )?);
                    claimed.claim(start, end);
                }
            }
        }

        Ok(spans)
    }
}

/// Codepoint intervals already claimed by a higher-priority match
///
/// Scoped to one scan call. Kept sorted and disjoint so membership is a
/// binary search over interval bounds rather than a per-codepoint set.
#[derive(Default)]
struct ClaimedIntervals {
    intervals: Vec<(usize, usize)>,
}

impl ClaimedIntervals {
    /// True when `[start, end)` touches no claimed interval
    fn is_free(&self, start: usize, end: usize) -> bool {
        let idx = self.intervals.partition_point(|&(_, e)| e <= start);
        match self.intervals.get(idx) {
            Some(&(s, _)) => s >= end,
            None => true,
        }
    }

    fn claim(&mut self, start: usize, end: usize) {
        let idx = self.intervals.partition_point(|&(s, _)| s < start);
        self.intervals.insert(idx, (start, end));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(text: &str) -> Vec<Span> {
        PatternSet::new().unwrap().scan(text).unwrap()
    }

    #[test]
    fn test_phone_detection_with_cjk_prefix() {
        let spans = scan("张三的手机号是13812345678");
        assert_eq!(spans.len(), 1);
        let span = &spans[0];
        assert_eq!(span.category, Category::Phone);
        assert_eq!(span.value, "13812345678");
        assert_eq!((span.start, span.end), (7, 18));
        assert_eq!(span.confidence, 1.0);
    }

    #[test]
    fn test_id_card_claims_before_bank_card() {
        // An 18-digit run fits both patterns; the identity number wins.
        let spans = scan("证件号110101199001011234。");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].category, Category::IdCard);
        assert_eq!(spans[0].value, "110101199001011234");
    }

    #[test]
    fn test_id_card_with_check_letter() {
        let spans = scan("11010119900101123X");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].category, Category::IdCard);
    }

    #[test]
    fn test_bank_card_detection() {
        let spans = scan("卡号6222021234567890123");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].category, Category::BankCard);
        assert_eq!(spans[0].value, "6222021234567890123");
    }

    #[test]
    fn test_phone_not_extracted_from_claimed_digit_run() {
        // The 16-digit card run embeds a plausible 11-digit phone suffix;
        // the claim set must keep the phone pattern away from it.
        let spans = scan("6222013812345678和13912345678");
        let phones: Vec<_> = spans
            .iter()
            .filter(|s| s.category == Category::Phone)
            .collect();
        assert_eq!(phones.len(), 1);
        assert_eq!(phones[0].value, "13912345678");
        assert!(spans
            .iter()
            .any(|s| s.category == Category::BankCard && s.value == "6222013812345678"));
        assert!(spans.iter().all(|s| s.value != "13812345678"));
    }

    #[test]
    fn test_email_detection() {
        let spans = scan("邮箱 john.doe@example.com 联系");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].category, Category::Email);
        assert_eq!(spans[0].value, "john.doe@example.com");
    }

    #[test]
    fn test_digit_local_part_email_yields_phone_first() {
        // The digits win at higher priority, so the email match is discarded.
        let spans = scan("13812345678@example.com");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].category, Category::Phone);
    }

    #[test]
    fn test_no_matches_is_not_an_error() {
        assert!(scan("没有任何敏感信息的文本").is_empty());
        assert!(scan("").is_empty());
    }

    #[test]
    fn test_position_correctness_against_source() {
        let text = "联系13812345678或a@b.cn即可";
        for span in scan(text) {
            let extracted: String = text
                .chars()
                .skip(span.start)
                .take(span.end - span.start)
                .collect();
            assert_eq!(extracted, span.value);
        }
    }

    #[test]
    fn test_claimed_intervals() {
        let mut claimed = ClaimedIntervals::default();
        assert!(claimed.is_free(0, 10));
        claimed.claim(5, 10);
        claimed.claim(20, 25);
        assert!(claimed.is_free(0, 5));
        assert!(claimed.is_free(10, 20));
        assert!(claimed.is_free(25, 30));
        assert!(!claimed.is_free(4, 6));
        assert!(!claimed.is_free(9, 21));
        assert!(!claimed.is_free(22, 23));
    }
}
