//! Rule resolver
//!
//! Maps a span's category to the single applicable configured rule.

use std::collections::HashSet;

use tracing::warn;

use crate::domain::{Category, Rule};

/// Returns the first rule in input order matching the category and enabled
///
/// `None` means the category is left untouched by the processor.
pub fn resolve(category: Category, rules: &[Rule]) -> Option<&Rule> {
    rules
        .iter()
        .find(|rule| rule.category == category && rule.enabled)
}

/// Flags categories with more than one enabled rule
///
/// Category exclusivity is a caller precondition, not engine-enforced; this
/// surfaces violations instead of silently accepting them. First-in-order
/// still wins.
pub fn warn_on_duplicate_rules(rules: &[Rule]) {
    let mut seen: HashSet<Category> = HashSet::new();
    let mut warned: HashSet<Category> = HashSet::new();

    for rule in rules.iter().filter(|r| r.enabled) {
        if !seen.insert(rule.category) && warned.insert(rule.category) {
            warn!(
                category = %rule.category,
                "multiple enabled rules for category, first in input order wins"
            );
        }
    }
}
