//! Utility functions

pub mod pagination;
pub mod validation;

pub use pagination::Pagination;
pub use validation::{required_text, sanitize_string};
