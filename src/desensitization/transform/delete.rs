//! Deletion transformation

use super::Transform;
use crate::domain::Category;

/// Removes a value entirely, regardless of category
pub struct DeleteTransform;

impl Transform for DeleteTransform {
    fn apply(&self, _value: &str, _category: Category) -> String {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_always_yields_empty() {
        let transform = DeleteTransform;
        assert_eq!(transform.apply("13812345678", Category::Phone), "");
        assert_eq!(transform.apply("张三", Category::Name), "");
        assert_eq!(transform.apply("", Category::Other), "");
    }
}
