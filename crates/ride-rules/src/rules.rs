//! Band rules over rider measures.

use crate::context::RiderContext;
use crate::specification::Specification;
use ride_common::{AccessError, AccessResult, Measure, RiderCategory};
use serde::{Deserialize, Serialize};

/// Closed integer interval `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Band {
    pub min: i64,
    pub max: i64,
}

impl Band {
    /// Build a band from bounds known to be ordered.
    pub const fn inclusive(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Build a band, rejecting `min > max`.
    pub fn try_new(min: i64, max: i64) -> AccessResult<Self> {
        if min > max {
            return Err(AccessError::InvalidBand { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn contains(&self, value: i64) -> bool {
        self.min <= value && value <= self.max
    }
}

impl std::fmt::Display for Band {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// Requires one measure of the rider to lie within a category band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WithinBand {
    pub category: RiderCategory,
    pub measure: Measure,
    pub band: Band,
}

impl WithinBand {
    pub fn new(category: RiderCategory, measure: Measure, band: Band) -> Self {
        Self {
            category,
            measure,
            band,
        }
    }

    /// Rider-facing reason given when the measure is out of band.
    pub fn describe(&self) -> String {
        let Band { min, max } = self.band;
        match self.measure {
            Measure::Age => format!(
                "{} must be between {min} and {max} {} old",
                self.category.group_title(),
                self.measure.unit()
            ),
            Measure::Height => format!(
                "Height for {} should be between {min} and {max} {}",
                self.category.group_name(),
                self.measure.unit()
            ),
            Measure::Weight => format!(
                "Weight for {} should be between {min} and {max} {}",
                self.category.group_name(),
                self.measure.unit()
            ),
        }
    }
}

impl Specification<RiderContext> for WithinBand {
    fn evaluate(&self, ctx: &RiderContext) -> AccessResult<()> {
        if self.band.contains(ctx.measure(self.measure)) {
            Ok(())
        } else {
            Err(AccessError::range(self.measure.to_string(), self.describe()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_bounds_are_inclusive() {
        let band = Band::inclusive(4, 14);
        assert!(band.contains(4));
        assert!(band.contains(14));
        assert!(!band.contains(3));
        assert!(!band.contains(15));
    }

    #[test]
    fn test_try_new_rejects_inverted_band() {
        assert_eq!(Band::try_new(1, 1), Ok(Band::inclusive(1, 1)));
        assert_eq!(
            Band::try_new(9, 2),
            Err(AccessError::InvalidBand { min: 9, max: 2 })
        );
    }

    #[test]
    fn test_within_band_messages() {
        let rider = RiderContext::new(16, 10, 300);

        let age = WithinBand::new(RiderCategory::Children, Measure::Age, Band::inclusive(4, 14));
        let err = age.evaluate(&rider).unwrap_err();
        assert_eq!(err.to_string(), "Children must be between 4 and 14 years old");
        assert!(matches!(err, AccessError::RangeConstraint { ref field, .. } if field == "age"));

        let height =
            WithinBand::new(RiderCategory::Adult, Measure::Height, Band::inclusive(120, 220));
        assert_eq!(
            height.evaluate(&rider).unwrap_err().to_string(),
            "Height for adults should be between 120 and 220 cm"
        );

        let weight =
            WithinBand::new(RiderCategory::Children, Measure::Weight, Band::inclusive(20, 50));
        assert_eq!(
            weight.evaluate(&rider).unwrap_err().to_string(),
            "Weight for children should be between 20 and 50 kg"
        );
    }

    #[test]
    fn test_within_band_passes() {
        let rider = RiderContext::new(30, 80, 180);
        let rule = WithinBand::new(RiderCategory::Adult, Measure::Weight, Band::inclusive(50, 120));
        assert!(rule.is_satisfied_by(&rider));
    }
}
