//! Placeholder replacement transformation

use super::Transform;
use crate::domain::Category;

/// Replaces a value with a fixed per-category placeholder token
///
/// Pure lookup; output length bears no relationship to input length.
pub struct ReplaceTransform;

impl Transform for ReplaceTransform {
    fn apply(&self, _value: &str, category: Category) -> String {
        let placeholder = match category {
            Category::Name => "[姓名]",
            Category::IdCard => "[身份证]",
            Category::Phone => "[电话]",
            Category::Address => "[地址]",
            Category::BankCard => "[银行卡]",
            Category::Email => "[邮箱]",
            Category::Other => "[敏感信息]",
        };
        placeholder.to_string()
    }
}
