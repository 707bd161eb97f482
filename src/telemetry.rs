//! Application telemetry events and sinks.
//!
//! Exports run unattended against large repositories, so each completed
//! export is summarised as a structured event that can be captured for
//! debugging without parsing log output.

use std::io;

use serde::{Deserialize, Serialize};

use crate::github::ExportReport;

/// A structured telemetry event emitted by prharvest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TelemetryEvent {
    /// Records the outcome of one repository export.
    ExportCompleted {
        /// `owner/repo` of the exported repository.
        repository: String,
        /// Pull request pages requested.
        pages_fetched: u32,
        /// CSV rows written.
        rows_written: usize,
        /// CSV rows that could not be written.
        rows_skipped: usize,
        /// Approvals beyond each pull request's first.
        additional_approvals: usize,
        /// True when the cutoff ended enumeration.
        reached_cutoff: bool,
    },
}

impl TelemetryEvent {
    /// Summarises an export report for `repository`.
    #[must_use]
    pub fn export_completed(repository: impl Into<String>, report: &ExportReport) -> Self {
        Self::ExportCompleted {
            repository: repository.into(),
            pages_fetched: report.pages_fetched,
            rows_written: report.rows_written,
            rows_skipped: report.rows_skipped,
            additional_approvals: report.additional_approvals,
            reached_cutoff: report.reached_cutoff,
        }
    }
}

/// A sink that can record telemetry events.
pub trait TelemetrySink: Send + Sync {
    /// Records a telemetry event.
    fn record(&self, event: TelemetryEvent);
}

/// Telemetry sink that drops all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTelemetrySink;

impl TelemetrySink for NoopTelemetrySink {
    fn record(&self, _event: TelemetryEvent) {}
}

/// Records telemetry events to stderr as JSON lines (JSONL).
///
/// This is intended for local debugging and is not transmitted anywhere.
#[derive(Debug, Default)]
pub struct StderrJsonlTelemetrySink;

impl TelemetrySink for StderrJsonlTelemetrySink {
    fn record(&self, event: TelemetryEvent) {
        let Ok(serialised) = serde_json::to_string(&event) else {
            return;
        };

        let _ignored = writeln_stderr(&serialised);
    }
}

fn writeln_stderr(message: &str) -> io::Result<()> {
    use io::Write;

    let mut stderr = io::stderr().lock();
    writeln!(stderr, "{message}")
}

/// In-memory sink for asserting on recorded events.
#[cfg(any(test, feature = "test-support"))]
pub mod test_support {
    use std::sync::{Mutex, PoisonError};

    use super::{TelemetryEvent, TelemetrySink};

    /// Sink that keeps every recorded event.
    #[derive(Debug, Default)]
    pub struct RecordingTelemetrySink {
        events: Mutex<Vec<TelemetryEvent>>,
    }

    impl RecordingTelemetrySink {
        /// Removes and returns the events recorded so far.
        #[must_use]
        pub fn take(&self) -> Vec<TelemetryEvent> {
            self.events
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .drain(..)
                .collect()
        }
    }

    impl TelemetrySink for RecordingTelemetrySink {
        fn record(&self, event: TelemetryEvent) {
            self.events
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(event);
        }
    }
}
