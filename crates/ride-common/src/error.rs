//! Error types for slide access checks.

use thiserror::Error;

/// Error type shared by the rule engine and the access layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// A value of the wrong kind was supplied where an integer or a known
    /// rider category was required
    #[error("{0}")]
    TypeConstraint(String),

    /// A measure lies outside the band permitted for its rider category
    #[error("{message}")]
    RangeConstraint { field: String, message: String },

    /// A band was declared with its bounds the wrong way round
    #[error("Invalid band: minimum {min} is greater than maximum {max}")]
    InvalidBand { min: i64, max: i64 },
}

impl AccessError {
    /// Create a range error for the given field
    pub fn range(field: impl Into<String>, message: impl Into<String>) -> Self {
        AccessError::RangeConstraint {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Returns the error code string for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            AccessError::TypeConstraint(_) => "TYPE_CONSTRAINT",
            AccessError::RangeConstraint { .. } => "RANGE_CONSTRAINT",
            AccessError::InvalidBand { .. } => "INVALID_BAND",
        }
    }

    /// Whether an access check turns this error into a denial instead of
    /// handing it back to the caller.
    pub fn is_denial(&self) -> bool {
        matches!(
            self,
            AccessError::TypeConstraint(_) | AccessError::RangeConstraint { .. }
        )
    }
}

/// Result type alias using AccessError
pub type AccessResult<T> = Result<T, AccessError>;
