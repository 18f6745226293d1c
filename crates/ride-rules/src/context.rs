//! Context type for rider rule evaluation.

use ride_common::Measure;
use serde::{Deserialize, Serialize};

/// Physical attributes of a rider, copied from a visitor for one check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiderContext {
    pub age: i64,
    pub weight: i64, // kg
    pub height: i64, // cm
}

impl RiderContext {
    pub fn new(age: i64, weight: i64, height: i64) -> Self {
        Self {
            age,
            weight,
            height,
        }
    }

    /// Value of a single measure
    pub fn measure(&self, measure: Measure) -> i64 {
        match measure {
            Measure::Age => self.age,
            Measure::Weight => self.weight,
            Measure::Height => self.height,
        }
    }
}
