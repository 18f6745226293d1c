//! Domain models
//!
//! Visitors, slides and the decisions reached when one meets the other.

pub mod decision;
pub mod slide;
pub mod visitor;

pub use decision::*;
pub use slide::*;
pub use visitor::*;
