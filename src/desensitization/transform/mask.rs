//! Masking transformation
//!
//! Category-specific partial redaction. The fixed-width schemes (identity
//! card, phone, bank card) preserve value length; values shorter than their
//! scheme's minimum pass through unchanged. All offsets count codepoints,
//! never bytes, since values are routinely CJK.

use regex::Regex;

use super::Transform;
use crate::domain::{Category, Result};

const MASK_CHAR: char = '*';

/// Replacement for an email local part past its first character
const EMAIL_MASK: &str = "***";

/// Suffix appended to a masked address
const ADDRESS_MASK: &str = "******";

/// Masking strategy
pub struct MaskTransform {
    // Administrative-division prefixes, most specific first
    address_prefixes: [Regex; 2],
}

impl MaskTransform {
    pub fn new() -> Result<Self> {
        Ok(Self {
            address_prefixes: [
                Regex::new(r"^(.*?[省市].*?[市区县])")?,
                Regex::new(r"^(.*?[市区县])")?,
            ],
        })
    }

    /// Keeps the administrative prefix, masks the detail
    fn mask_address(&self, value: &str) -> String {
        for pattern in &self.address_prefixes {
            if let Some(captures) = pattern.captures(value) {
                let prefix = captures.get(1).map(|m| m.as_str()).unwrap_or_default();
                return format!("{prefix}{ADDRESS_MASK}");
            }
        }

        let chars: Vec<char> = value.chars().collect();
        if chars.len() > 6 {
            let kept: String = chars[..6].iter().collect();
            return format!("{kept}{ADDRESS_MASK}");
        }
        ADDRESS_MASK.to_string()
    }
}

impl Transform for MaskTransform {
    fn apply(&self, value: &str, category: Category) -> String {
        if value.is_empty() {
            return String::new();
        }

        match category {
            Category::Name => mask_name(value),
            Category::IdCard => mask_fixed_width(value, 18, 6, 8, 4),
            Category::Phone => mask_fixed_width(value, 11, 3, 4, 4),
            Category::Address => self.mask_address(value),
            Category::BankCard => mask_bank_card(value),
            Category::Email => mask_email(value),
            Category::Other => mask_default(value),
        }
    }
}

/// Keeps the first character, masks the rest one-for-one
fn mask_name(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= 1 {
        return value.to_string();
    }

    let mut masked = String::with_capacity(value.len());
    masked.push(chars[0]);
    masked.extend(std::iter::repeat(MASK_CHAR).take(chars.len() - 1));
    masked
}

/// Keeps `head` and `tail` characters around a `masked`-wide middle
fn mask_fixed_width(value: &str, min_len: usize, head: usize, masked: usize, tail: usize) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() < min_len {
        return value.to_string();
    }

    let mut out: String = chars[..head].iter().collect();
    out.extend(std::iter::repeat(MASK_CHAR).take(masked));
    out.extend(&chars[chars.len() - tail..]);
    out
}

/// Keeps the first 4 and last 4, masks the variable-width middle
fn mask_bank_card(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() < 8 {
        return value.to_string();
    }

    let mut out: String = chars[..4].iter().collect();
    out.extend(std::iter::repeat(MASK_CHAR).take(chars.len() - 8));
    out.extend(&chars[chars.len() - 4..]);
    out
}

/// Keeps the domain verbatim, masks the local part past its first character
fn mask_email(value: &str) -> String {
    let Some((local, domain)) = value.split_once('@') else {
        return value.to_string();
    };

    let mut local_chars = local.chars();
    let masked_local = match local_chars.next() {
        Some(first) if local_chars.next().is_some() => format!("{first}{EMAIL_MASK}"),
        _ => MASK_CHAR.to_string(),
    };
    format!("{masked_local}@{domain}")
}

/// Keeps the first and last character, masks the middle
fn mask_default(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= 2 {
        return MASK_CHAR.to_string().repeat(chars.len());
    }

    let mut out = String::with_capacity(value.len());
    out.push(chars[0]);
    out.extend(std::iter::repeat(MASK_CHAR).take(chars.len() - 2));
    out.push(chars[chars.len() - 1]);
    out
}
