//! Domain enums shared across the slide access crates.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::AccessError;

/// Rider category selecting which limitation rule applies to a slide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiderCategory {
    /// Small riders, checked against the children bands
    Children,
    /// Teen and adult riders
    Adult,
}

impl RiderCategory {
    /// Every recognised category
    pub const ALL: [RiderCategory; 2] = [RiderCategory::Children, RiderCategory::Adult];

    /// Plural group name used in rider-facing messages
    pub fn group_name(&self) -> &'static str {
        match self {
            RiderCategory::Children => "children",
            RiderCategory::Adult => "adults",
        }
    }

    /// Group name with a leading capital, for sentence starts
    pub fn group_title(&self) -> &'static str {
        match self {
            RiderCategory::Children => "Children",
            RiderCategory::Adult => "Adults",
        }
    }
}

impl std::fmt::Display for RiderCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiderCategory::Children => write!(f, "children"),
            RiderCategory::Adult => write!(f, "adult"),
        }
    }
}

impl FromStr for RiderCategory {
    type Err = AccessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "children" | "child" | "childrenslidelimitationvalidator" => {
                Ok(RiderCategory::Children)
            }
            "adult" | "adults" | "adultslidelimitationvalidator" => Ok(RiderCategory::Adult),
            _ => Err(AccessError::TypeConstraint(format!(
                "{s} is not a recognized slide limitation variant"
            ))),
        }
    }
}

/// A physical attribute checked by the limitation rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Measure {
    Age,
    Weight,
    Height,
}

impl Measure {
    /// Unit the measure is expressed in
    pub fn unit(&self) -> &'static str {
        match self {
            Measure::Age => "years",
            Measure::Weight => "kg",
            Measure::Height => "cm",
        }
    }
}

impl std::fmt::Display for Measure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Measure::Age => write!(f, "age"),
            Measure::Weight => write!(f, "weight"),
            Measure::Height => write!(f, "height"),
        }
    }
}
