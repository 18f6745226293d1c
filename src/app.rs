//! Batch access checks behind the command-line entry point

use std::io::{Read, Write};

use anyhow::Context;
use serde::Deserialize;

use crate::models::{AccessDecision, Slide, Visitor};

/// One slide and the visitors queueing for it.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckRequest {
    pub slide: SlideRequest,
    #[serde(default)]
    pub visitors: Vec<Visitor>,
}

/// Slide as named in a request; the limitation is resolved by name.
#[derive(Debug, Clone, Deserialize)]
pub struct SlideRequest {
    pub name: String,
    pub limitation: String,
}

/// Counts of a finished run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub granted: usize,
    pub denied: usize,
}

/// Read a [`CheckRequest`] as JSON, check every visitor and write one
/// [`AccessDecision`] per line as JSON.
///
/// An unknown limitation name fails the whole run before any visitor is
/// checked.
pub fn run(input: impl Read, mut output: impl Write) -> anyhow::Result<RunSummary> {
    let request: CheckRequest =
        serde_json::from_reader(input).context("Failed to parse check request")?;
    let slide = Slide::with_variant(&request.slide.name, &request.slide.limitation)?;

    tracing::debug!(
        slide = %slide.name,
        category = %slide.limitation,
        visitors = request.visitors.len(),
        "Checking visitors"
    );

    let mut summary = RunSummary::default();
    for visitor in &request.visitors {
        let decision: AccessDecision = slide.check_access(visitor);
        if decision.granted {
            summary.granted += 1;
        } else {
            summary.denied += 1;
        }
        serde_json::to_writer(&mut output, &decision)?;
        writeln!(output)?;
    }
    output.flush()?;

    Ok(summary)
}
