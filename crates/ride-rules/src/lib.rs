//! Specification Pattern rule engine for slide limitations.
//!
//! Rider checks are built from small, reusable predicates over a
//! [`RiderContext`](context::RiderContext) and chained with `&`. Every rule
//! reports *why* it failed, so a denial can be explained to the rider.
//!
//! # Example
//!
//! ```
//! use ride_rules::prelude::*;
//!
//! let rider = RiderContext::new(10, 30, 100);
//! let rule = category_rule(RiderCategory::Children);
//! assert!(rule.is_satisfied_by(&rider));
//!
//! let validator = LimitationValidator::new(RiderCategory::Adult, 10, 30, 100);
//! assert!(validator.validate().is_err());
//! ```

pub mod context;
pub mod limits;
pub mod operators;
pub mod rules;
pub mod specification;
pub mod validator;

/// Prelude module - import everything you need with `use ride_rules::prelude::*`
pub mod prelude {
    pub use crate::context::RiderContext;
    pub use crate::limits::{CategoryLimits, category_rule};
    pub use crate::operators::Spec;
    pub use crate::rules::{Band, WithinBand};
    pub use crate::specification::{And, BoxedSpec, Specification};
    pub use crate::validator::LimitationValidator;
    pub use ride_common::{AccessError, AccessResult, Measure, RiderCategory};
}
