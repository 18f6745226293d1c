//! Access decision model

use ride_common::RiderCategory;
use serde::{Deserialize, Serialize};

use crate::constants::ACCESS_DENIED_PREFIX;

/// Outcome of one access check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessDecision {
    pub slide: String,
    pub visitor: String,
    pub category: RiderCategory,
    pub granted: bool,
    /// Why access was refused, `None` when granted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl AccessDecision {
    pub fn granted(slide: &str, visitor: &str, category: RiderCategory) -> Self {
        Self {
            slide: slide.to_string(),
            visitor: visitor.to_string(),
            category,
            granted: true,
            reason: None,
        }
    }

    pub fn denied(
        slide: &str,
        visitor: &str,
        category: RiderCategory,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            slide: slide.to_string(),
            visitor: visitor.to_string(),
            category,
            granted: false,
            reason: Some(reason.into()),
        }
    }

    /// Diagnostic shown to a visitor who was turned away
    pub fn denial_message(&self) -> Option<String> {
        self.reason
            .as_ref()
            .map(|reason| format!("{ACCESS_DENIED_PREFIX}: {reason}"))
    }
}
