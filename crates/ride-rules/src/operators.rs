//! `&` operator for chaining rider rules.
//!
//! `Spec(a) & Spec(b)` builds an [`And`], so a category rule reads in the
//! order its bands are checked.

use crate::specification::{And, Specification};
use ride_common::AccessResult;
use std::ops::BitAnd;

/// Wrapper that enables operator syntax on specifications.
#[derive(Debug, Clone)]
pub struct Spec<S>(pub S);

impl<A, B> BitAnd<Spec<B>> for Spec<A> {
    type Output = Spec<And<A, B>>;

    fn bitand(self, rhs: Spec<B>) -> Self::Output {
        Spec(And(self.0, rhs.0))
    }
}

impl<Ctx, S> Specification<Ctx> for Spec<S>
where
    S: Specification<Ctx>,
{
    fn evaluate(&self, ctx: &Ctx) -> AccessResult<()> {
        self.0.evaluate(ctx)
    }
}
