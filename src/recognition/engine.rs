//! Recognition engine
//!
//! Public entry point for identification. Orchestrates the pattern matcher
//! set, the optional entity extractor, and span deduplication.

use std::sync::Arc;

use tracing::{info, warn};

use crate::config::RecognitionConfig;
use crate::domain::{LetheError, Result, Span};
use crate::recognition::dedupe::dedupe;
use crate::recognition::extractor::{DisabledExtractor, EntityExtractor, LexiconExtractor};
use crate::recognition::patterns::PatternSet;

/// Engine for identifying sensitive information in text
///
/// # Thread Safety
///
/// `identify` takes `&self` and touches no shared mutable state; the only
/// interior state is the extractor's lazily-initialized backend, which
/// resolves at most once under concurrent first use. Engines can be shared
/// across threads with `Arc` and called for independent documents in
/// parallel.
pub struct RecognitionEngine {
    patterns: PatternSet,
    extractor: Arc<dyn EntityExtractor>,
}

impl RecognitionEngine {
    /// Regex-only engine with probabilistic extraction disabled
    pub fn new() -> Result<Self> {
        Self::with_extractor(Arc::new(DisabledExtractor))
    }

    /// Engine with a specific extractor backend
    pub fn with_extractor(extractor: Arc<dyn EntityExtractor>) -> Result<Self> {
        Ok(Self {
            patterns: PatternSet::new()?,
            extractor,
        })
    }

    /// Builds an engine from configuration, selecting the extractor backend
    ///
    /// # Errors
    ///
    /// Returns a configuration error when validation fails; pattern
    /// compilation errors surface as [`LetheError::Pattern`].
    pub fn from_config(config: &RecognitionConfig) -> Result<Self> {
        config.validate()?;

        let extractor: Arc<dyn EntityExtractor> = if config.probabilistic.enabled {
            let extractor = match &config.probabilistic.lexicon_path {
                Some(path) => LexiconExtractor::from_file(path),
                None => LexiconExtractor::new(),
            };
            Arc::new(extractor.with_confidence(config.probabilistic.confidence))
        } else {
            Arc::new(DisabledExtractor)
        };

        Self::with_extractor(extractor)
    }

    /// Identifies sensitive information in text
    ///
    /// Always runs the pattern matcher set. When `use_probabilistic` is true
    /// the entity extractor runs as well and both outputs are merged through
    /// deduplication; the result is ordered ascending by start position.
    ///
    /// # Errors
    ///
    /// Returns [`LetheError::ExtractorUnavailable`] when probabilistic
    /// extraction was requested and the backend failed to initialize. Any
    /// other extractor failure is logged and recognition proceeds with
    /// pattern-matcher results only.
    pub fn identify(&self, text: &str, use_probabilistic: bool) -> Result<Vec<Span>> {
        info!(
            text_length = text.chars().count(),
            use_probabilistic, "starting recognition"
        );

        let mut spans = self.patterns.scan(text)?;
        info!(spans_found = spans.len(), "pattern recognition complete");

        if use_probabilistic {
            match self.extractor.scan(text) {
                Ok(found) => {
                    info!(spans_found = found.len(), "extractor recognition complete");
                    spans.extend(found);
                }
                Err(err @ LetheError::ExtractorUnavailable(_)) => return Err(err),
                Err(err) => {
                    warn!(error = %err, fallback = "regex_only", "extractor scan failed");
                }
            }
        }

        let total = spans.len();
        let deduplicated = dedupe(spans);
        info!(
            total_spans = total,
            deduplicated_spans = deduplicated.len(),
            "recognition complete"
        );
        Ok(deduplicated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;

    /// Extractor whose scans always fail after a successful initialization
    struct FlakyExtractor;

    impl EntityExtractor for FlakyExtractor {
        fn scan(&self, _text: &str) -> Result<Vec<Span>> {
            Err(LetheError::ExtractorScan("backend crashed".to_string()))
        }
    }

    #[test]
    fn test_regex_only_identification() {
        let engine = RecognitionEngine::new().unwrap();
        let spans = engine.identify("张三的手机号是13812345678", false).unwrap();

        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].category, Category::Phone);
        assert_eq!(spans[0].value, "13812345678");
    }

    #[test]
    fn test_probabilistic_flag_with_disabled_extractor() {
        let engine = RecognitionEngine::new().unwrap();
        let spans = engine.identify("张三的手机号是13812345678", true).unwrap();

        // Disabled backend contributes nothing but does not fail
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].category, Category::Phone);
    }

    #[test]
    fn test_probabilistic_identification_merges_sources() {
        let engine =
            RecognitionEngine::with_extractor(Arc::new(LexiconExtractor::new())).unwrap();
        let spans = engine.identify("张三的手机号是13812345678", true).unwrap();

        assert!(spans
            .iter()
            .any(|s| s.category == Category::Name && s.value == "张三"));
        assert!(spans
            .iter()
            .any(|s| s.category == Category::Phone && s.value == "13812345678"));
    }

    #[test]
    fn test_result_is_sorted_and_disjoint() {
        let engine =
            RecognitionEngine::with_extractor(Arc::new(LexiconExtractor::new())).unwrap();
        let spans = engine
            .identify("李四住在上海市浦东新区，电话13912345678，邮箱li@ex.cn", true)
            .unwrap();

        for pair in spans.windows(2) {
            assert!(pair[0].start <= pair[1].start);
            assert!(!pair[0].overlaps(&pair[1]));
        }
    }

    #[test]
    fn test_unavailable_backend_propagates_when_requested() {
        let extractor = Arc::new(LexiconExtractor::from_file("/nonexistent/lexicon.toml"));
        let engine = RecognitionEngine::with_extractor(extractor).unwrap();

        let err = engine.identify("任何文本13812345678", true).unwrap_err();
        assert!(matches!(err, LetheError::ExtractorUnavailable(_)));
    }

    #[test]
    fn test_unavailable_backend_ignored_when_not_requested() {
        let extractor = Arc::new(LexiconExtractor::from_file("/nonexistent/lexicon.toml"));
        let engine = RecognitionEngine::with_extractor(extractor).unwrap();

        let spans = engine.identify("电话13812345678", false).unwrap();
        assert_eq!(spans.len(), 1);
    }

    #[test]
    fn test_scan_failure_degrades_to_regex_only() {
        let engine = RecognitionEngine::with_extractor(Arc::new(FlakyExtractor)).unwrap();

        let spans = engine.identify("电话13812345678", true).unwrap();
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].category, Category::Phone);
    }

    #[test]
    fn test_from_config_disabled_and_enabled() {
        let config = RecognitionConfig::default();
        let engine = RecognitionEngine::from_config(&config).unwrap();
        assert!(engine.identify("13812345678", true).unwrap().len() == 1);

        let mut config = RecognitionConfig::default();
        config.probabilistic.enabled = true;
        let engine = RecognitionEngine::from_config(&config).unwrap();
        let spans = engine.identify("张三的电话", true).unwrap();
        assert!(spans.iter().any(|s| s.category == Category::Name));
    }

    #[test]
    fn test_from_config_rejects_invalid() {
        let mut config = RecognitionConfig::default();
        config.probabilistic.confidence = 2.0;
        assert!(RecognitionEngine::from_config(&config).is_err());
    }
}
