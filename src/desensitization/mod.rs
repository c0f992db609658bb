//! Sensitive data desensitization
//!
//! Applies category-specific, rule-driven transformation strategies to
//! recognized spans with a document-wide consistency guarantee.
//!
//! - [`transform`] - the Mask / Replace / Delete strategy set
//! - [`resolver`] - category-to-rule resolution
//! - [`processor`] - the public [`DesensitizationProcessor`] entry point

pub mod processor;
pub mod resolver;
pub mod transform;

pub use processor::DesensitizationProcessor;
