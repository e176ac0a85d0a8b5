// crates/aggregate-calc-core/src/fixtures.rs
// ============================================================================
// Module: Summation Fixtures
// Description: Sequential series generation and the canonical scenario catalog.
// Purpose: Share one set of summation scenarios across tests and tooling.
// Dependencies: crate::{error, summation}, serde, thiserror
// ============================================================================

//! ## Overview
//! Fixtures describe summation scenarios as data: the input sequence (which may
//! itself be absent) and the expected outcome, either a total or a failure
//! classification. [`standard_cases`] is the catalog every consumer checks
//! against.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Serialize;
use thiserror::Error;

use crate::error::ErrorKind;
use crate::error::SumError;
use crate::summation::sum;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while building fixtures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FixtureError {
    /// The series would contain values outside the `i32` range.
    #[error("series length {length} exceeds the i32 value range")]
    SeriesTooLong {
        /// Requested series length.
        length: usize,
    },
}

// ============================================================================
// SECTION: Series
// ============================================================================

/// Generates `[0, 1, ..., length - 1]` with every slot present.
///
/// # Errors
///
/// Returns [`FixtureError::SeriesTooLong`] when the last value would exceed
/// `i32::MAX`.
pub fn series(length: usize) -> Result<Vec<Option<i32>>, FixtureError> {
    let Some(last) = length.checked_sub(1) else {
        return Ok(Vec::new());
    };
    let last = i32::try_from(last).map_err(|_| FixtureError::SeriesTooLong {
        length,
    })?;
    Ok((0 ..= last).map(Some).collect())
}

// ============================================================================
// SECTION: Scenario Types
// ============================================================================

/// Expected outcome of a summation scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Expectation {
    /// Summation succeeds with this total.
    Sum(i64),
    /// Summation fails with this classification.
    Failure {
        /// Expected error kind.
        kind: ErrorKind,
        /// Expected cause kind, for wrapped failures.
        cause: Option<ErrorKind>,
    },
}

impl Expectation {
    /// Returns true when `actual` satisfies this expectation.
    #[must_use]
    pub fn matches(&self, actual: &Result<i64, SumError>) -> bool {
        match (self, actual) {
            (Self::Sum(expected), Ok(total)) => expected == total,
            (
                Self::Failure {
                    kind,
                    cause,
                },
                Err(error),
            ) => error.kind() == *kind && error.cause_kind() == *cause,
            _ => false,
        }
    }
}

/// A named summation scenario.
///
/// # Invariants
/// - `addends == None` models an absent sequence, distinct from an empty one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummationCase {
    /// Stable scenario name.
    pub name: &'static str,
    /// Input sequence, or `None` for an absent sequence.
    pub addends: Option<Vec<Option<i32>>>,
    /// Expected outcome.
    pub expected: Expectation,
}

/// Result of evaluating a [`SummationCase`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseOutcome {
    /// The actual outcome satisfied the expectation.
    Matched,
    /// The actual outcome differed from the expectation.
    Mismatched {
        /// What summation actually produced.
        actual: Result<i64, SumError>,
    },
}

impl CaseOutcome {
    /// Returns true when the case matched.
    #[must_use]
    pub const fn is_match(&self) -> bool {
        matches!(self, Self::Matched)
    }
}

impl SummationCase {
    /// Creates a scenario expecting a successful total.
    #[must_use]
    pub const fn total(name: &'static str, addends: Vec<Option<i32>>, expected: i64) -> Self {
        Self {
            name,
            addends: Some(addends),
            expected: Expectation::Sum(expected),
        }
    }

    /// Creates a scenario expecting a classified failure.
    #[must_use]
    pub const fn failure(
        name: &'static str,
        addends: Option<Vec<Option<i32>>>,
        kind: ErrorKind,
        cause: Option<ErrorKind>,
    ) -> Self {
        Self {
            name,
            addends,
            expected: Expectation::Failure {
                kind,
                cause,
            },
        }
    }

    /// Runs the scenario through [`sum`].
    #[must_use]
    pub fn evaluate(&self) -> CaseOutcome {
        let actual = sum(self.addends.as_deref());
        if self.expected.matches(&actual) {
            CaseOutcome::Matched
        } else {
            CaseOutcome::Mismatched {
                actual,
            }
        }
    }
}

// ============================================================================
// SECTION: Catalog
// ============================================================================

/// Returns the canonical summation scenarios.
#[must_use]
pub fn standard_cases() -> Vec<SummationCase> {
    vec![
        SummationCase::total("ascending_small", vec![Some(1), Some(2), Some(3), Some(4)], 10),
        SummationCase::total("mixed_signs", vec![Some(1), Some(-1), Some(2), Some(0)], 2),
        SummationCase::total("max_pair", vec![Some(i32::MAX), Some(i32::MAX)], 4_294_967_294),
        SummationCase::total(
            "series_100000",
            series(100_000).unwrap_or_default(),
            4_999_950_000,
        ),
        SummationCase::total("max_min_pair", vec![Some(i32::MAX), Some(i32::MIN)], -1),
        SummationCase::total("cancelling_pair", vec![Some(1), Some(-1)], 0),
        SummationCase::failure("null_series", None, ErrorKind::NullArgument, None),
        SummationCase::failure("empty_series", Some(Vec::new()), ErrorKind::InvalidArgument, None),
        SummationCase::failure(
            "null_value",
            Some(vec![Some(1), Some(2), None]),
            ErrorKind::CalculatorFailure,
            Some(ErrorKind::InvalidOperation),
        ),
    ]
}
