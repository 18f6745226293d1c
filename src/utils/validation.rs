//! Constrained integer fields
//!
//! A field that only ever holds an integer inside a closed range. Writes are
//! checked before storage and a rejected write leaves the old value in place.

use ride_common::{AccessError, AccessResult};
use serde_json::Value;

/// Named closed range `[min, max]` an integer field must stay within.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegerRange {
    pub name: String,
    pub min: i64,
    pub max: i64,
}

impl IntegerRange {
    /// `min <= max` is expected from the caller.
    pub fn new(name: impl Into<String>, min: i64, max: i64) -> Self {
        Self {
            name: name.into(),
            min,
            max,
        }
    }

    /// Check a value against the range
    pub fn check(&self, value: i64) -> AccessResult<i64> {
        if value < self.min || value > self.max {
            return Err(self.out_of_range());
        }
        Ok(value)
    }

    /// Check an untyped value: it must be an integer, then in range
    pub fn check_value(&self, value: &Value) -> AccessResult<i64> {
        match value.as_i64() {
            Some(n) => self.check(n),
            // integral but above i64::MAX
            None if value.is_u64() => Err(self.out_of_range()),
            None => Err(AccessError::TypeConstraint(format!(
                "The value of {} must be an integer",
                self.name
            ))),
        }
    }

    fn out_of_range(&self) -> AccessError {
        AccessError::range(
            self.name.clone(),
            format!(
                "{} must be between {} and {}",
                self.name, self.min, self.max
            ),
        )
    }
}

/// An integer field guarded by an [`IntegerRange`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedInteger {
    range: IntegerRange,
    value: Option<i64>,
}

impl BoundedInteger {
    /// Create an unset field
    pub fn new(name: impl Into<String>, min: i64, max: i64) -> Self {
        Self {
            range: IntegerRange::new(name, min, max),
            value: None,
        }
    }

    pub fn range(&self) -> &IntegerRange {
        &self.range
    }

    /// Last accepted value, `None` if never set
    pub fn get(&self) -> Option<i64> {
        self.value
    }

    pub fn set(&mut self, value: i64) -> AccessResult<()> {
        self.value = Some(self.range.check(value)?);
        Ok(())
    }

    /// Set from an untyped value, e.g. a field of a decoded JSON document
    pub fn set_value(&mut self, value: &Value) -> AccessResult<()> {
        self.value = Some(self.range.check_value(value)?);
        Ok(())
    }
}
