//! Core Specification trait and combinators.

use ride_common::AccessResult;
use std::sync::Arc;

/// Core specification trait for composable rider rules.
///
/// `evaluate` either passes or fails with the reason the context was rejected.
/// Evaluation is synchronous and must not mutate shared state, so one rule can
/// be checked from any number of call sites.
pub trait Specification<Ctx>: Send + Sync {
    /// Check the context, returning the first reason it is rejected.
    fn evaluate(&self, ctx: &Ctx) -> AccessResult<()>;

    /// Check if the specification is satisfied by the given context.
    fn is_satisfied_by(&self, ctx: &Ctx) -> bool {
        self.evaluate(ctx).is_ok()
    }
}

/// AND combinator for specifications. Reports the left failure first.
#[derive(Debug, Clone)]
pub struct And<A, B>(pub A, pub B);

impl<Ctx, A, B> Specification<Ctx> for And<A, B>
where
    A: Specification<Ctx>,
    B: Specification<Ctx>,
{
    fn evaluate(&self, ctx: &Ctx) -> AccessResult<()> {
        self.0.evaluate(ctx)?;
        self.1.evaluate(ctx)
    }
}

/// A boxed specification for dynamic dispatch.
pub type BoxedSpec<Ctx> = Arc<dyn Specification<Ctx>>;

impl<Ctx> Specification<Ctx> for BoxedSpec<Ctx> {
    fn evaluate(&self, ctx: &Ctx) -> AccessResult<()> {
        self.as_ref().evaluate(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ride_common::AccessError;

    struct Positive;

    impl Specification<i64> for Positive {
        fn evaluate(&self, ctx: &i64) -> AccessResult<()> {
            if *ctx > 0 {
                Ok(())
            } else {
                Err(AccessError::range("value", "must be positive"))
            }
        }
    }

    struct Even;

    impl Specification<i64> for Even {
        fn evaluate(&self, ctx: &i64) -> AccessResult<()> {
            if ctx % 2 == 0 {
                Ok(())
            } else {
                Err(AccessError::range("value", "must be even"))
            }
        }
    }

    #[test]
    fn test_and_reports_first_failure() {
        let rule = And(Positive, Even);
        assert!(rule.is_satisfied_by(&4));

        // both fail, left wins
        let err = rule.evaluate(&-3).unwrap_err();
        assert_eq!(err.to_string(), "must be positive");

        let err = rule.evaluate(&3).unwrap_err();
        assert_eq!(err.to_string(), "must be even");
    }

    #[test]
    fn test_boxed_spec() {
        let spec: BoxedSpec<i64> = Arc::new(And(Even, Positive));
        assert!(spec.is_satisfied_by(&8));
        assert_eq!(spec.evaluate(&-3).unwrap_err().to_string(), "must be even");
    }
}
