// crates/aggregate-calc-cli/src/audit.rs
// ============================================================================
// Module: Summation Audit Logging
// Description: Structured audit events for summation requests.
// Purpose: Emit JSON-lines audit logs without hard dependencies.
// Dependencies: aggregate-calc-core, aggregate-calc-config, serde, serde_json
// ============================================================================

//! ## Overview
//! Every summation the CLI performs is described by one [`SumAuditEvent`] and
//! handed to an [`AuditSink`]. Events carry classifications and counts only;
//! addend values are never logged.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::OpenOptions;
use std::io;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use aggregate_calc_config::AuditConfig;
use aggregate_calc_core::ErrorKind;
use aggregate_calc_core::SumError;
use serde::Serialize;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Summation request outcome classification.
///
/// # Invariants
/// - Variants are stable for audit labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SumOutcome {
    /// Summation produced a total.
    Ok,
    /// Summation failed.
    Error,
}

/// Summation audit event payload.
#[derive(Debug, Clone, Serialize)]
pub struct SumAuditEvent {
    /// Event identifier.
    pub event: &'static str,
    /// Event timestamp (milliseconds since epoch).
    pub timestamp_ms: u128,
    /// CLI command that triggered the summation.
    pub command: &'static str,
    /// Number of slots in the sequence; `None` when the sequence was absent.
    pub addend_count: Option<usize>,
    /// Number of empty slots in the sequence.
    pub missing_count: usize,
    /// Request outcome.
    pub outcome: SumOutcome,
    /// Error classification when the request failed.
    pub error_kind: Option<ErrorKind>,
    /// Cause classification for wrapped failures.
    pub cause_kind: Option<ErrorKind>,
    /// Total when the request succeeded.
    pub sum: Option<i64>,
}

impl SumAuditEvent {
    /// Creates a new audit event with a consistent timestamp.
    #[must_use]
    pub fn new(
        command: &'static str,
        addends: Option<&[Option<i32>]>,
        result: &Result<i64, SumError>,
    ) -> Self {
        let timestamp_ms =
            SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis();
        let missing_count =
            addends.map_or(0, |slots| slots.iter().filter(|slot| slot.is_none()).count());
        let (outcome, error_kind, cause_kind, sum) = match result {
            Ok(total) => (SumOutcome::Ok, None, None, Some(*total)),
            Err(error) => (SumOutcome::Error, Some(error.kind()), error.cause_kind(), None),
        };
        Self {
            event: "sum_audit",
            timestamp_ms,
            command,
            addend_count: addends.map(<[Option<i32>]>::len),
            missing_count,
            outcome,
            error_kind,
            cause_kind,
            sum,
        }
    }
}

// ============================================================================
// SECTION: Trait
// ============================================================================

/// Audit sink for summation events.
pub trait AuditSink: Send + Sync {
    /// Record an audit event.
    fn record(&self, event: &SumAuditEvent);
}

/// Audit sink that logs JSON lines to stderr.
pub struct StderrAuditSink;

impl AuditSink for StderrAuditSink {
    fn record(&self, event: &SumAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event) {
            let _ = writeln!(std::io::stderr(), "{payload}");
        }
    }
}

/// Audit sink that logs JSON lines to a file.
pub struct FileAuditSink {
    /// File handle used for append-only logging.
    file: Mutex<std::fs::File>,
}

impl FileAuditSink {
    /// Opens the audit log file in append mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn new(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

impl AuditSink for FileAuditSink {
    fn record(&self, event: &SumAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event)
            && let Ok(mut file) = self.file.lock()
        {
            let _ = writeln!(file, "{payload}");
            let _ = file.flush();
        }
    }
}

/// No-op audit sink.
pub struct NoopAuditSink;

impl AuditSink for NoopAuditSink {
    fn record(&self, _event: &SumAuditEvent) {}
}

// ============================================================================
// SECTION: Construction
// ============================================================================

/// Builds the audit sink described by `config`.
///
/// # Errors
///
/// Returns an error when a configured audit file cannot be opened.
pub fn audit_sink_from_config(config: &AuditConfig) -> io::Result<Box<dyn AuditSink>> {
    if !config.enabled {
        return Ok(Box::new(NoopAuditSink));
    }
    match &config.path {
        Some(path) => Ok(Box::new(FileAuditSink::new(Path::new(path.trim()))?)),
        None => Ok(Box::new(StderrAuditSink)),
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        reason = "Test-only assertions are permitted."
    )]

    use std::fs;

    use aggregate_calc_core::sum;
    use serde_json::Value;

    use super::*;

    fn read_events(path: &Path) -> Vec<Value> {
        fs::read_to_string(path)
            .expect("read audit log")
            .lines()
            .map(|line| serde_json::from_str(line).expect("audit line is json"))
            .collect()
    }

    #[test]
    fn success_event_records_total() {
        let addends = [Some(1), Some(2)];
        let event = SumAuditEvent::new("sum", Some(&addends[..]), &sum(Some(&addends[..])));
        assert_eq!(event.outcome, SumOutcome::Ok);
        assert_eq!(event.sum, Some(3));
        assert_eq!(event.addend_count, Some(2));
        assert!(event.error_kind.is_none());
    }

    #[test]
    fn wrapped_failure_event_records_cause() {
        let addends = [Some(1), None, None];
        let event = SumAuditEvent::new("sum", Some(&addends[..]), &sum(Some(&addends[..])));
        assert_eq!(event.outcome, SumOutcome::Error);
        assert_eq!(event.error_kind, Some(ErrorKind::CalculatorFailure));
        assert_eq!(event.cause_kind, Some(ErrorKind::InvalidOperation));
        assert_eq!(event.missing_count, 2);
        assert!(event.sum.is_none());
    }

    #[test]
    fn absent_sequence_event_has_no_count() {
        let event = SumAuditEvent::new("sum", None, &sum(None));
        assert!(event.addend_count.is_none());
        assert_eq!(event.error_kind, Some(ErrorKind::NullArgument));
    }

    #[test]
    fn file_sink_appends_json_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("audit.jsonl");
        let sink = FileAuditSink::new(&path).unwrap();
        sink.record(&SumAuditEvent::new("sum", None, &sum(None)));
        sink.record(&SumAuditEvent::new("series", Some(&[Some(0)][..]), &Ok(0)));

        let events = read_events(&path);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0]["event"], "sum_audit");
        assert_eq!(events[0]["error_kind"], "null_argument");
        assert_eq!(events[1]["command"], "series");
        assert_eq!(events[1]["outcome"], "ok");
    }

    #[test]
    fn disabled_config_builds_noop_sink() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("never.jsonl");
        let config = AuditConfig {
            enabled: false,
            path: Some(path.to_string_lossy().into_owned()),
        };
        let sink = audit_sink_from_config(&config).unwrap();
        sink.record(&SumAuditEvent::new("sum", None, &sum(None)));
        assert!(!path.exists());
    }

    #[test]
    fn enabled_config_with_path_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sum.jsonl");
        let config = AuditConfig {
            enabled: true,
            path: Some(path.to_string_lossy().into_owned()),
        };
        let sink = audit_sink_from_config(&config).unwrap();
        sink.record(&SumAuditEvent::new("sum", Some(&[Some(4)][..]), &Ok(4)));
        assert_eq!(read_events(&path).len(), 1);
    }
}
