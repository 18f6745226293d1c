//! Access service

use ride_rules::validator::LimitationValidator;

use crate::constants::ACCESS_DENIED_PREFIX;
use crate::models::{AccessDecision, Slide, Visitor};

/// Decides whether visitors may ride
pub struct AccessService;

impl AccessService {
    /// Check a visitor against the slide's limitation rule.
    ///
    /// A fresh validator is built from the visitor for every call. Constraint
    /// failures become a denial carrying the reason and are reported through
    /// tracing; they never reach the caller as errors.
    pub fn evaluate(slide: &Slide, visitor: &Visitor) -> AccessDecision {
        let validator = LimitationValidator::new(
            slide.limitation,
            visitor.age,
            visitor.weight,
            visitor.height,
        );

        match validator.validate() {
            Ok(()) => {
                tracing::debug!(
                    slide = %slide.name,
                    visitor = %visitor.name,
                    category = %slide.limitation,
                    "Access granted"
                );
                AccessDecision::granted(&slide.name, &visitor.name, slide.limitation)
            }
            Err(e) => {
                debug_assert!(e.is_denial(), "unexpected error from limitation check: {e}");
                tracing::info!(
                    slide = %slide.name,
                    visitor = %visitor.name,
                    category = %slide.limitation,
                    error_code = e.error_code(),
                    "{ACCESS_DENIED_PREFIX}: {e}"
                );
                AccessDecision::denied(&slide.name, &visitor.name, slide.limitation, e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ride_common::RiderCategory;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct CapturedOutput(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedOutput {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_granted_decision() {
        let slide = Slide::new("Drop", RiderCategory::Adult);
        let decision = AccessService::evaluate(&slide, &Visitor::new("Max", 30, 80, 180));

        assert!(decision.granted);
        assert_eq!(decision.slide, "Drop");
        assert_eq!(decision.visitor, "Max");
        assert_eq!(decision.category, RiderCategory::Adult);
    }

    #[test]
    fn test_denied_decision_carries_reason() {
        let slide = Slide::new("Splash", RiderCategory::Children);
        let decision = AccessService::evaluate(&slide, &Visitor::new("Tall", 10, 30, 130));

        assert!(!decision.granted);
        assert_eq!(
            decision.reason.as_deref(),
            Some("Height for children should be between 80 and 120 cm")
        );
    }

    #[test]
    fn test_denial_is_reported() {
        let captured = CapturedOutput::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        let slide = Slide::new("Splash", RiderCategory::Children);
        tracing::subscriber::with_default(subscriber, || {
            AccessService::evaluate(&slide, &Visitor::new("Ann", 10, 30, 100));
            AccessService::evaluate(&slide, &Visitor::new("Tom", 16, 30, 100));
        });

        let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("Access denied: Children must be between 4 and 14 years old"));
        assert!(output.contains("visitor=Tom"));
        assert!(!output.contains("visitor=Ann"));
    }
}
