//! Limitation bands per rider category.

use std::sync::Arc;

use crate::context::RiderContext;
use crate::operators::Spec;
use crate::rules::{Band, WithinBand};
use crate::specification::BoxedSpec;
use ride_common::{Measure, RiderCategory};
use serde::{Deserialize, Serialize};

/// Age, height and weight bands a rider category must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryLimits {
    pub age: Band,    // years
    pub height: Band, // cm
    pub weight: Band, // kg
}

impl CategoryLimits {
    pub const CHILDREN: CategoryLimits = CategoryLimits {
        age: Band::inclusive(4, 14),
        height: Band::inclusive(80, 120),
        weight: Band::inclusive(20, 50),
    };

    // Age 14 is also accepted for children.
    pub const ADULT: CategoryLimits = CategoryLimits {
        age: Band::inclusive(14, 60),
        height: Band::inclusive(120, 220),
        weight: Band::inclusive(50, 120),
    };

    pub fn for_category(category: RiderCategory) -> Self {
        match category {
            RiderCategory::Children => Self::CHILDREN,
            RiderCategory::Adult => Self::ADULT,
        }
    }
}

/// Build the limitation rule for a rider category.
///
/// Age is checked first, then height, then weight; the first failing band is
/// the one reported.
pub fn category_rule(category: RiderCategory) -> BoxedSpec<RiderContext> {
    let limits = CategoryLimits::for_category(category);
    let rule = Spec(WithinBand::new(category, Measure::Age, limits.age))
        & Spec(WithinBand::new(category, Measure::Height, limits.height))
        & Spec(WithinBand::new(category, Measure::Weight, limits.weight));
    Arc::new(rule)
}
