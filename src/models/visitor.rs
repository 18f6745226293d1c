//! Visitor model

use ride_rules::context::RiderContext;
use serde::{Deserialize, Serialize};

/// A park visitor asking to ride.
///
/// Attributes are taken as given; they are only checked against a slide's
/// limitation rule at access time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visitor {
    pub name: String,
    pub age: i64,
    pub weight: i64, // kg
    pub height: i64, // cm
}

impl Visitor {
    pub fn new(name: impl Into<String>, age: i64, weight: i64, height: i64) -> Self {
        Self {
            name: name.into(),
            age,
            weight,
            height,
        }
    }

    /// Copy of the attributes the limitation rules look at
    pub fn rider_context(&self) -> RiderContext {
        RiderContext::new(self.age, self.weight, self.height)
    }
}
