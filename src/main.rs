//! Slide Access - command-line entry point
//!
//! Reads a check request (one slide, its visitors) as JSON on stdin and writes
//! one decision per visitor as a JSON line on stdout. Denials are also logged
//! as `Access denied: <reason>`.

use std::io;

use slide_access::{app, config::Config, telemetry};

fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    telemetry::init_tracing(&config.log)?;

    tracing::info!("Starting slide access checks");

    let summary = app::run(io::stdin().lock(), io::stdout())?;

    tracing::info!(
        granted = summary.granted,
        denied = summary.denied,
        "Slide access checks finished"
    );

    Ok(())
}
