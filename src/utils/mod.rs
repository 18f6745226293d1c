//! Utility modules

pub mod validation;

pub use validation::{BoundedInteger, IntegerRange};
