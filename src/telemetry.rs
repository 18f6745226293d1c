//! Tracing subscriber setup

use std::io;

use tracing::Subscriber;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
};

use crate::config::{LogConfig, LogFormat};

/// Install the global tracing subscriber, writing to stdout.
///
/// `RUST_LOG` in the environment wins over the configured filter. Fails if a
/// global subscriber is already installed.
pub fn init_tracing(config: &LogConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.filter))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer(config.format, io::stdout))
        .try_init()?;

    tracing::debug!(format = ?config.format, "Tracing initialized");
    Ok(())
}

/// Formatting layer for the configured output format
pub fn fmt_layer<S, W>(format: LogFormat, writer: W) -> Box<dyn Layer<S> + Send + Sync + 'static>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    match format {
        LogFormat::Pretty => fmt::layer().pretty().with_writer(writer).boxed(),
        LogFormat::Json => fmt::layer().json().with_writer(writer).boxed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Slide, Visitor};
    use ride_common::RiderCategory;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_default_filter_lets_denials_through() {
        let buffer = SharedBuffer::default();
        let writer = buffer.clone();
        let config = LogConfig::default();
        let subscriber = tracing_subscriber::registry()
            .with(EnvFilter::try_new(&config.filter).unwrap())
            .with(fmt_layer(config.format, move || writer.clone()));

        tracing::subscriber::with_default(subscriber, || {
            let splash = Slide::new("Splash", RiderCategory::Children);
            assert!(!splash.can_access(&Visitor::new("Tom", 16, 30, 100)));
        });

        let output = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("Access denied: Children must be between 4 and 14 years old"));
        // pretty output carries the source location, the default formatter does not
        assert!(output.contains("access_service.rs"));
    }

    #[test]
    fn test_json_format_writes_json_lines() {
        let buffer = SharedBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::registry()
            .with(fmt_layer(LogFormat::Json, move || writer.clone()));

        tracing::subscriber::with_default(subscriber, || {
            let drop = Slide::new("Drop", RiderCategory::Adult);
            assert!(!drop.can_access(&Visitor::new("Kid", 8, 30, 100)));
        });

        let output = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        // unfiltered, so rule trace events come first
        let line = output
            .lines()
            .find(|line| line.contains("Access denied"))
            .unwrap();
        let event: serde_json::Value = serde_json::from_str(line).unwrap();
        assert_eq!(
            event["fields"]["message"],
            "Access denied: Adults must be between 14 and 60 years old"
        );
        assert_eq!(event["fields"]["visitor"], "Kid");
    }

    #[test]
    fn test_second_install_is_rejected() {
        let config = LogConfig::default();
        assert!(init_tracing(&config).is_ok());
        assert!(init_tracing(&config).is_err());
    }
}
