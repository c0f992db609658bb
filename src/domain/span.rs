//! Sensitive span data model
//!
//! A [`Span`] identifies one occurrence of sensitive data inside a document
//! text. Spans are created by the recognition side, consumed read-only by the
//! desensitization side, and never mutated in between.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::domain::errors::Error;

/// Category of sensitive data carried by a [`Span`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Person names
    Name,
    /// National identity card numbers
    IdCard,
    /// Mobile phone numbers
    Phone,
    /// Postal / administrative addresses
    Address,
    /// Bank card numbers
    BankCard,
    /// Email addresses
    Email,
    /// Catch-all for rule records configured with a category this engine
    /// does not produce. Recognition never emits it.
    #[serde(other)]
    Other,
}

impl Category {
    /// Wire name used by rule stores and structured logs
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::IdCard => "id_card",
            Self::Phone => "phone",
            Self::Address => "address",
            Self::BankCard => "bank_card",
            Self::Email => "email",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "id_card" => Ok(Self::IdCard),
            "phone" => Ok(Self::Phone),
            "address" => Ok(Self::Address),
            "bank_card" => Ok(Self::BankCard),
            "email" => Ok(Self::Email),
            other => Err(Error::Configuration(format!(
                "unknown sensitive data category: {other}"
            ))),
        }
    }
}

/// One identified occurrence of sensitive data
///
/// `start` and `end` are zero-based codepoint offsets into the text the span
/// was recognized in, with `end` exclusive. The extent invariant `end > start`
/// is enforced at construction and never re-checked downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Span {
    /// Opaque unique identifier, assigned at creation
    pub id: Uuid,
    /// Category of the detected data
    pub category: Category,
    /// Exact substring of the source text covered by `[start, end)`
    pub value: String,
    /// Zero-based codepoint offset of the first covered character
    pub start: usize,
    /// Zero-based codepoint offset one past the last covered character
    pub end: usize,
    /// Confidence in (0.0, 1.0]; 1.0 for pattern matches
    pub confidence: f32,
}

impl Span {
    /// Creates a span, rejecting a non-positive extent
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSpan`] when `end <= start`.
    pub fn new(
        category: Category,
        value: impl Into<String>,
        start: usize,
        end: usize,
        confidence: f32,
    ) -> Result<Self, Error> {
        if end <= start {
            return Err(Error::InvalidSpan { start, end });
        }
        Ok(Self {
            id: Uuid::new_v4(),
            category,
            value: value.into(),
            start,
            end,
            confidence,
        })
    }

    /// Number of codepoints covered by the span
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Always false; spans cannot have zero extent
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether two spans cover at least one common codepoint
    pub fn overlaps(&self, other: &Span) -> bool {
        !(self.end <= other.start || self.start >= other.end)
    }
}
