//! Slide model

use ride_common::{AccessResult, RiderCategory};
use serde::{Deserialize, Serialize};

use crate::models::{AccessDecision, Visitor};
use crate::services::AccessService;

/// A ride bound to the limitation rule of one rider category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub name: String,
    pub limitation: RiderCategory,
}

impl Slide {
    pub fn new(name: impl Into<String>, limitation: RiderCategory) -> Self {
        Self {
            name: name.into(),
            limitation,
        }
    }

    /// Create a slide from a limitation variant name such as `"children"`.
    ///
    /// Fails with a type constraint error when the name is not a known
    /// rider category.
    pub fn with_variant(name: impl Into<String>, variant: &str) -> AccessResult<Self> {
        let limitation = variant.parse::<RiderCategory>()?;
        Ok(Self::new(name, limitation))
    }

    /// Check a visitor, keeping the reason on denial
    pub fn check_access(&self, visitor: &Visitor) -> AccessDecision {
        AccessService::evaluate(self, visitor)
    }

    /// Whether the visitor may ride.
    ///
    /// A denial emits `Access denied: <reason>` as an info-level `tracing`
    /// event, which is only written out once a subscriber is installed
    /// (see [`crate::telemetry::init_tracing`]).
    pub fn can_access(&self, visitor: &Visitor) -> bool {
        self.check_access(visitor).granted
    }
}
