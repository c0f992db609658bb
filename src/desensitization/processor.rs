//! Desensitization processor
//!
//! Public entry point for transformation. Resolves each span's rule, applies
//! the strategy through a per-call consistency cache, and rebuilds the text
//! in a single pass.

use std::collections::HashMap;

use tracing::{info, warn};

use crate::desensitization::resolver;
use crate::desensitization::transform::{
    DeleteTransform, MaskTransform, ReplaceTransform, Transform,
};
use crate::domain::{Category, Result, Rule, Span, Strategy};

/// Main processor for applying desensitization rules to text
///
/// `process` takes `&self` and keeps all per-document state on the stack, so
/// one processor can serve independent documents concurrently.
pub struct DesensitizationProcessor {
    mask: MaskTransform,
    replace: ReplaceTransform,
    delete: DeleteTransform,
}

impl DesensitizationProcessor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            mask: MaskTransform::new()?,
            replace: ReplaceTransform,
            delete: DeleteTransform,
        })
    }

    fn transform_for(&self, strategy: Strategy) -> &dyn Transform {
        match strategy {
            Strategy::Mask => &self.mask,
            Strategy::Replace => &self.replace,
            Strategy::Delete => &self.delete,
        }
    }

    /// Applies desensitization rules to text
    ///
    /// Spans without an enabled rule keep their original substring
    /// byte-for-byte. Identical `(category, value)` pairs always produce
    /// identical replacements within one call, even at multiple positions;
    /// the cache backing that guarantee lives and dies with this call.
    pub fn process(&self, text: &str, spans: &[Span], rules: &[Rule]) -> String {
        if text.is_empty() || spans.is_empty() {
            return text.to_string();
        }

        resolver::warn_on_duplicate_rules(rules);

        // Descending start order makes every edit independent of the offsets
        // of the spans still to be processed.
        let mut ordered: Vec<&Span> = spans.iter().collect();
        ordered.sort_by(|a, b| (b.start, b.end).cmp(&(a.start, a.end)));

        let chars: Vec<char> = text.chars().collect();
        let mut cache: HashMap<(Category, String), String> = HashMap::new();
        let mut output = String::with_capacity(text.len());
        // Codepoints already copied to the output
        let mut cursor = 0usize;
        let mut applied = 0usize;

        // Walk the descending list back to front, copying untouched gaps and
        // transformed values into a fresh buffer instead of splicing the
        // working text repeatedly.
        for span in ordered.into_iter().rev() {
            if span.end > chars.len() || span.start < cursor {
                warn!(
                    span_id = %span.id,
                    start = span.start,
                    end = span.end,
                    "span out of range or overlapping, skipped"
                );
                continue;
            }

            let Some(rule) = resolver::resolve(span.category, rules) else {
                continue;
            };

            let transformed = cache
                .entry((span.category, span.value.clone()))
                .or_insert_with(|| {
                    self.transform_for(rule.strategy)
                        .apply(&span.value, span.category)
                })
                .clone();

            output.extend(&chars[cursor..span.start]);
            output.push_str(&transformed);
            cursor = span.end;
            applied += 1;
        }
        output.extend(&chars[cursor..]);

        info!(
            spans = spans.len(),
            applied,
            distinct_values = cache.len(),
            "desensitization complete"
        );
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(category: Category, value: &str, start: usize, end: usize) -> Span {
        Span::new(category, value, start, end, 1.0).unwrap()
    }

    fn processor() -> DesensitizationProcessor {
        DesensitizationProcessor::new().unwrap()
    }

    #[test]
    fn test_empty_text_and_empty_spans_are_identity() {
        let p = processor();
        let rules = Rule::builtin_defaults();

        assert_eq!(p.process("", &[], &rules), "");
        assert_eq!(p.process("原文不变", &[], &rules), "原文不变");
    }

    #[test]
    fn test_mask_phone_in_place() {
        let p = processor();
        let text = "张三的手机号是13812345678";
        let spans = vec![span(Category::Phone, "13812345678", 7, 18)];

        let result = p.process(text, &spans, &Rule::builtin_defaults());
        assert_eq!(result, "张三的手机号是138****5678");
    }

    #[test]
    fn test_no_rule_leaves_span_untouched() {
        let p = processor();
        let text = "电话13812345678";
        let spans = vec![span(Category::Phone, "13812345678", 2, 13)];
        let rules = vec![Rule::new("r1", "name mask", Category::Name, Strategy::Mask)];

        assert_eq!(p.process(text, &spans, &rules), text);
    }

    #[test]
    fn test_disabled_rule_is_a_no_op() {
        let p = processor();
        let text = "电话13812345678";
        let spans = vec![span(Category::Phone, "13812345678", 2, 13)];
        let rules = vec![
            Rule::new("r1", "phone mask", Category::Phone, Strategy::Mask).disabled(),
        ];

        assert_eq!(p.process(text, &spans, &rules), text);
    }

    #[test]
    fn test_delete_strategy_removes_value() {
        let p = processor();
        let text = "邮箱a@b.cn完";
        let spans = vec![span(Category::Email, "a@b.cn", 2, 8)];
        let rules = vec![Rule::new("r1", "email delete", Category::Email, Strategy::Delete)];

        assert_eq!(p.process(text, &spans, &rules), "邮箱完");
    }

    #[test]
    fn test_replace_strategy_changes_length_safely() {
        let p = processor();
        let text = "先是13812345678然后110101199001011234结束";
        let spans = vec![
            span(Category::Phone, "13812345678", 2, 13),
            span(Category::IdCard, "110101199001011234", 15, 33),
        ];
        let rules = vec![
            Rule::new("r1", "phone replace", Category::Phone, Strategy::Replace),
            Rule::new("r2", "id replace", Category::IdCard, Strategy::Replace),
        ];

        assert_eq!(p.process(text, &spans, &rules), "先是[电话]然后[身份证]结束");
    }

    #[test]
    fn test_consistency_for_repeated_values() {
        let p = processor();
        let text = "110101199001011234和110101199001011234";
        let spans = vec![
            span(Category::IdCard, "110101199001011234", 0, 18),
            span(Category::IdCard, "110101199001011234", 19, 37),
        ];

        let result = p.process(text, &spans, &Rule::builtin_defaults());
        assert_eq!(result, "110101********1234和110101********1234");
        assert_eq!(result.matches("110101********1234").count(), 2);
        assert!(!result.contains("110101199001011234"));
    }

    #[test]
    fn test_span_order_does_not_matter() {
        let p = processor();
        let text = "a@b.cn和13812345678";
        let forward = vec![
            span(Category::Email, "a@b.cn", 0, 6),
            span(Category::Phone, "13812345678", 7, 18),
        ];
        let backward: Vec<Span> = forward.iter().rev().cloned().collect();
        let rules = Rule::builtin_defaults();

        assert_eq!(p.process(text, &forward, &rules), p.process(text, &backward, &rules));
    }

    #[test]
    fn test_out_of_range_span_is_skipped() {
        let p = processor();
        let text = "短文本";
        let spans = vec![span(Category::Phone, "13812345678", 10, 21)];

        assert_eq!(p.process(text, &spans, &Rule::builtin_defaults()), text);
    }

    #[test]
    fn test_duplicate_enabled_rules_first_wins() {
        let p = processor();
        let text = "电话13812345678";
        let spans = vec![span(Category::Phone, "13812345678", 2, 13)];
        let rules = vec![
            Rule::new("r1", "phone delete", Category::Phone, Strategy::Delete),
            Rule::new("r2", "phone mask", Category::Phone, Strategy::Mask),
        ];

        assert_eq!(p.process(text, &spans, &rules), "电话");
    }
}
