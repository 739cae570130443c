// xbind/xbind-testkit
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use parking_lot::RwLock;
use strum_macros::Display;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "snake_case")]
pub enum AssertionKind {
    Creation,
    Run,
    ExpectedError,
    Comparison,
}

/// One named pass/fail record emitted by a helper.
#[derive(Debug, Clone, PartialEq)]
pub struct Assertion {
    pub label: String,
    pub kind: AssertionKind,
    pub passed: bool,
    pub detail: Option<String>,
}

/// Sink for the records the helpers emit.
pub trait TestReporter {
    fn record(&self, assertion: Assertion);
    fn warn(&self, message: &str);
}

/// Collects assertions and warnings instead of acting on them.
#[derive(Default)]
pub struct RecordingReporter {
    assertions: RwLock<Vec<Assertion>>,
    warnings: RwLock<Vec<String>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assertions(&self) -> Vec<Assertion> {
        self.assertions.read().clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.warnings.read().clone()
    }

    pub fn failures(&self) -> Vec<Assertion> {
        self.assertions
            .read()
            .iter()
            .filter(|a| !a.passed)
            .cloned()
            .collect()
    }

    pub fn count_of(&self, kind: AssertionKind) -> usize {
        self.assertions
            .read()
            .iter()
            .filter(|a| a.kind == kind)
            .count()
    }
}

impl TestReporter for RecordingReporter {
    fn record(&self, assertion: Assertion) {
        self.assertions.write().push(assertion);
    }

    fn warn(&self, message: &str) {
        warn!("{}", message);
        self.warnings.write().push(message.to_string());
    }
}

/// Panics on the first failed assertion, which surfaces helper failures
/// through the standard test harness without further wiring.
#[derive(Debug, Default, Clone, Copy)]
pub struct PanicReporter;

impl TestReporter for PanicReporter {
    fn record(&self, assertion: Assertion) {
        if assertion.passed {
            return;
        }
        match &assertion.detail {
            Some(detail) => panic!(
                "Assertion '{}' ({}) failed: {}",
                assertion.label, assertion.kind, detail
            ),
            None => panic!("Assertion '{}' ({}) failed", assertion.label, assertion.kind),
        }
    }

    fn warn(&self, message: &str) {
        warn!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assertion(kind: AssertionKind, passed: bool) -> Assertion {
        Assertion {
            label: "label".to_string(),
            kind,
            passed,
            detail: None,
        }
    }

    #[test]
    fn test_recording_reporter_collects() {
        let reporter = RecordingReporter::new();
        reporter.record(assertion(AssertionKind::Creation, true));
        reporter.record(assertion(AssertionKind::Comparison, false));
        reporter.warn("odd state");

        assert_eq!(reporter.assertions().len(), 2);
        assert_eq!(reporter.failures().len(), 1);
        assert_eq!(reporter.count_of(AssertionKind::Creation), 1);
        assert_eq!(reporter.count_of(AssertionKind::Run), 0);
        assert_eq!(reporter.warnings(), vec!["odd state".to_string()]);
    }

    #[test]
    fn test_panic_reporter_ignores_passes() {
        PanicReporter.record(assertion(AssertionKind::Run, true));
    }

    #[test]
    #[should_panic(expected = "Assertion 'label' (comparison) failed")]
    fn test_panic_reporter_panics_on_failure() {
        PanicReporter.record(assertion(AssertionKind::Comparison, false));
    }
}
