//! Transformation strategy set
//!
//! Pure value-to-value transformations, one per strategy name. Every
//! implementation is total over all input values: a category without a
//! dedicated scheme falls back to the documented default behavior instead of
//! failing.

pub mod delete;
pub mod mask;
pub mod replace;

use crate::domain::Category;

/// Trait for transformation strategy implementations
pub trait Transform: Send + Sync {
    /// Transforms a sensitive value
    fn apply(&self, value: &str, category: Category) -> String;
}

pub use delete::DeleteTransform;
pub use mask::MaskTransform;
pub use replace::ReplaceTransform;
