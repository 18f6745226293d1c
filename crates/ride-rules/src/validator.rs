//! Per-check limitation validator.

use crate::context::RiderContext;
use crate::limits::category_rule;
use crate::specification::Specification;
use ride_common::{AccessResult, RiderCategory};

/// Validates one rider against the limitation rule of a category.
///
/// A validator is built fresh for every access check from the visitor's
/// attributes and is never shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimitationValidator {
    pub category: RiderCategory,
    pub rider: RiderContext,
}

impl LimitationValidator {
    pub fn new(category: RiderCategory, age: i64, weight: i64, height: i64) -> Self {
        Self {
            category,
            rider: RiderContext::new(age, weight, height),
        }
    }

    /// Run the category rule, failing with the first band the rider misses.
    pub fn validate(&self) -> AccessResult<()> {
        let result = category_rule(self.category).evaluate(&self.rider);
        match &result {
            Ok(()) => tracing::trace!(category = %self.category, "Limitation check passed"),
            Err(e) => tracing::trace!(
                category = %self.category,
                error_code = e.error_code(),
                "Limitation check failed: {}",
                e
            ),
        }
        result
    }
}
