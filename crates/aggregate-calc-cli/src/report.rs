// crates/aggregate-calc-cli/src/report.rs
// ============================================================================
// Module: Command Reports
// Description: Serializable and text renderings of summation results.
// Purpose: Give every command a stable JSON shape and a plain-text form.
// Dependencies: aggregate-calc-core, serde
// ============================================================================

//! ## Overview
//! Reports mirror the core's error taxonomy so JSON consumers can branch on
//! `kind` and, for wrapped failures, on `cause.kind` without parsing messages.

// ============================================================================
// SECTION: Imports
// ============================================================================

use aggregate_calc_core::CaseOutcome;
use aggregate_calc_core::ErrorKind;
use aggregate_calc_core::Expectation;
use aggregate_calc_core::InvalidOperationReason;
use aggregate_calc_core::SumError;
use aggregate_calc_core::SummationCase;
use serde::Serialize;

// ============================================================================
// SECTION: Sum Reports
// ============================================================================

/// Cause attached to a wrapped calculator failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CauseReport {
    /// Cause classification.
    pub kind: ErrorKind,
    /// Why the addend could not be summed.
    pub reason: InvalidOperationReason,
    /// Zero-based index of the offending slot.
    pub index: usize,
    /// Cause message.
    pub message: String,
}

/// Serializable view of a [`SumError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    /// Error classification.
    pub kind: ErrorKind,
    /// Error message.
    pub message: String,
    /// Parameter name for argument failures.
    pub parameter: Option<&'static str>,
    /// Cause for wrapped failures.
    pub cause: Option<CauseReport>,
}

impl From<&SumError> for ErrorReport {
    fn from(error: &SumError) -> Self {
        let cause = error.invalid_operation().map(|cause| CauseReport {
            kind: cause.kind(),
            reason: cause.reason(),
            index: cause.index(),
            message: cause.to_string(),
        });
        Self {
            kind: error.kind(),
            message: error.to_string(),
            parameter: error.parameter(),
            cause,
        }
    }
}

/// Outcome of one summation, as emitted by the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SumReport {
    /// Summation produced a total.
    Sum(i64),
    /// Summation failed.
    Error(ErrorReport),
}

impl SumReport {
    /// Builds a report from a summation result.
    #[must_use]
    pub fn from_result(result: &Result<i64, SumError>) -> Self {
        match result {
            Ok(total) => Self::Sum(*total),
            Err(error) => Self::Error(ErrorReport::from(error)),
        }
    }

    /// Returns true when the report carries a total.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Sum(_))
    }

    /// Renders the report as a single line of text.
    #[must_use]
    pub fn render_text(&self) -> String {
        match self {
            Self::Sum(total) => total.to_string(),
            Self::Error(error) => match &error.cause {
                Some(cause) => format!(
                    "error[{}]: {} (caused by {}: {})",
                    error.kind, error.message, cause.kind, cause.message
                ),
                None => format!("error[{}]: {}", error.kind, error.message),
            },
        }
    }
}

// ============================================================================
// SECTION: Case Reports
// ============================================================================

/// Result of evaluating one catalog scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseReport {
    /// Scenario name.
    pub name: &'static str,
    /// Whether the scenario matched its expectation.
    pub matched: bool,
    /// Expected outcome.
    pub expected: Expectation,
    /// Actual outcome when the scenario did not match.
    pub actual: Option<SumReport>,
}

impl CaseReport {
    /// Evaluates `case` and captures the result.
    #[must_use]
    pub fn evaluate(case: &SummationCase) -> Self {
        let (matched, actual) = match case.evaluate() {
            CaseOutcome::Matched => (true, None),
            CaseOutcome::Mismatched {
                actual,
            } => (false, Some(SumReport::from_result(&actual))),
        };
        Self {
            name: case.name,
            matched,
            expected: case.expected,
            actual,
        }
    }

    /// Renders the report as a single line of text.
    #[must_use]
    pub fn render_text(&self) -> String {
        let expected = render_expectation(&self.expected);
        match &self.actual {
            None => format!("PASS {} ({expected})", self.name),
            Some(actual) => {
                format!("FAIL {}: expected {expected}, got {}", self.name, actual.render_text())
            }
        }
    }
}

/// Summary of a full catalog run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CasesReport {
    /// Number of matching scenarios.
    pub passed: usize,
    /// Number of mismatching scenarios.
    pub failed: usize,
    /// Per-scenario results in catalog order.
    pub cases: Vec<CaseReport>,
}

impl CasesReport {
    /// Evaluates every case in `cases`.
    #[must_use]
    pub fn evaluate(cases: &[SummationCase]) -> Self {
        let cases: Vec<CaseReport> = cases.iter().map(CaseReport::evaluate).collect();
        let passed = cases.iter().filter(|case| case.matched).count();
        Self {
            passed,
            failed: cases.len() - passed,
            cases,
        }
    }

    /// Renders one line per case followed by a totals line.
    #[must_use]
    pub fn render_text(&self) -> String {
        let mut lines: Vec<String> = self.cases.iter().map(CaseReport::render_text).collect();
        lines.push(format!("{} passed, {} failed", self.passed, self.failed));
        lines.join("\n")
    }
}

/// Renders an expectation for text output.
fn render_expectation(expected: &Expectation) -> String {
    match expected {
        Expectation::Sum(total) => format!("sum {total}"),
        Expectation::Failure {
            kind,
            cause: Some(cause),
        } => format!("{kind} caused by {cause}"),
        Expectation::Failure {
            kind,
            cause: None,
        } => kind.to_string(),
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
