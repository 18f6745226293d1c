//! Slide Access - amusement-park ride access control
//!
//! Decides whether a visitor may ride a slide from their age, weight and
//! height. Each slide is bound to the limitation rule of one rider category
//! (children or adults); a visitor outside any band of that rule is turned
//! away with a reason instead of an error.
//!
//! # Example
//!
//! ```
//! use slide_access::{RiderCategory, Slide, Visitor};
//!
//! let splash = Slide::new("Splash", RiderCategory::Children);
//! assert!(splash.can_access(&Visitor::new("Ann", 10, 30, 100)));
//! assert!(!splash.can_access(&Visitor::new("Tom", 16, 30, 100)));
//! ```
//!
//! # Architecture
//!
//! - **Models**: visitors, slides and access decisions
//! - **Services**: turn rule outcomes into decisions
//! - **Rules**: the `ride-rules` crate, composable limitation checks
//!
//! The `Access denied: <reason>` diagnostic is a `tracing` event; install a
//! subscriber with [`telemetry::init_tracing`] to see it, as the binary does.

pub mod app;
pub mod config;
pub mod constants;
pub mod models;
pub mod services;
pub mod telemetry;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use models::{AccessDecision, Slide, Visitor};
pub use ride_common::{AccessError, AccessResult, Measure, RiderCategory};
pub use services::AccessService;
