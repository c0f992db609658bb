//! Core domain types
//!
//! Data entities exchanged between the recognition and desensitization
//! subsystems and across the crate boundary: [`Span`], [`Rule`], the error
//! taxonomy and the crate [`Result`] alias.

pub mod errors;
pub mod result;
pub mod rule;
pub mod span;

pub use errors::{Error, LetheError};
pub use result::Result;
pub use rule::{Rule, Strategy};
pub use span::{Category, Span};
