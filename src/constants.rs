//! Application-wide constants
//!
//! Defaults and environment variable names used by configuration and logging.

// =============================================================================
// LOGGING DEFAULTS
// =============================================================================

/// Default tracing filter when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "slide_access=info,ride_rules=warn";

/// Default log output format
pub const DEFAULT_LOG_FORMAT: &str = "pretty";

// =============================================================================
// ENVIRONMENT VARIABLES
// =============================================================================

pub mod env_vars {
    pub const RUST_LOG: &str = "RUST_LOG";
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
}

// =============================================================================
// ACCESS CHECKS
// =============================================================================

/// Prefix of the diagnostic emitted when a visitor is turned away
pub const ACCESS_DENIED_PREFIX: &str = "Access denied";
