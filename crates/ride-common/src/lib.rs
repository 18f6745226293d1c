//! Common types and errors shared by the slide access crates.

pub mod error;
pub mod types;

pub use error::{AccessError, AccessResult};
pub use types::*;
