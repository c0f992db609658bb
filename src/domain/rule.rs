//! Desensitization rule data model
//!
//! Rules are external configuration consumed, not owned, by this crate: the
//! caller's rule store decides which categories are transformed and how. At
//! most one rule per category should be enabled for a given `process` call;
//! when several are, the first in input order wins (see
//! [`crate::desensitization::resolver`]).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::span::Category;

/// Named transformation applied to a span's value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Category-specific partial redaction, preserving length where feasible
    Mask,
    /// Fixed placeholder token per category
    Replace,
    /// Remove the value entirely
    Delete,
}

impl Strategy {
    /// Wire name used by rule stores and structured logs
    pub fn label(&self) -> &'static str {
        match self {
            Self::Mask => "mask",
            Self::Replace => "replace",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Binding of a sensitive data category to a transformation strategy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rule {
    /// Identifier assigned by the rule store
    pub id: String,
    /// Human-readable rule label
    pub name: String,
    /// Category this rule applies to
    pub category: Category,
    /// Transformation to apply
    pub strategy: Strategy,
    /// Disabled rules are ignored by the resolver
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl Rule {
    /// Creates an enabled rule
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: Category,
        strategy: Strategy,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            strategy,
            enabled: true,
        }
    }

    /// Marks the rule as disabled
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Pre-configured mask rules, one per category the engine produces
    ///
    /// Mirrors the rule set a fresh deployment starts from; callers with a
    /// rule store of their own will usually supply rules from there instead.
    pub fn builtin_defaults() -> Vec<Rule> {
        vec![
            Rule::new("rule-name-mask", "姓名脱敏（掩码）", Category::Name, Strategy::Mask),
            Rule::new(
                "rule-id-card-mask",
                "身份证脱敏（掩码）",
                Category::IdCard,
                Strategy::Mask,
            ),
            Rule::new("rule-phone-mask", "手机号脱敏（掩码）", Category::Phone, Strategy::Mask),
            Rule::new(
                "rule-address-mask",
                "地址脱敏（掩码）",
                Category::Address,
                Strategy::Mask,
            ),
            Rule::new(
                "rule-bank-card-mask",
                "银行卡脱敏（掩码）",
                Category::BankCard,
                Strategy::Mask,
            ),
            Rule::new("rule-email-mask", "邮箱脱敏（掩码）", Category::Email, Strategy::Mask),
        ]
    }
}
