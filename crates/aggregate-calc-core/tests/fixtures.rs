// crates/aggregate-calc-core/tests/fixtures.rs
// ============================================================================
// Module: Fixture Tests
// Description: Coverage for series generation and the scenario catalog.
// Purpose: Keep the shared catalog consistent with the summation core.
// Dependencies: aggregate_calc_core::fixtures
// ============================================================================
//! ## Overview
//! Validates series bounds and that every catalog scenario matches.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

mod support;

use std::collections::BTreeSet;

use aggregate_calc_core::CaseOutcome;
use aggregate_calc_core::ErrorKind;
use aggregate_calc_core::Expectation;
use aggregate_calc_core::FixtureError;
use aggregate_calc_core::SummationCase;
use aggregate_calc_core::series;
use aggregate_calc_core::standard_cases;
use support::TestResult;
use support::ensure;

#[test]
fn series_counts_up_from_zero() -> TestResult {
    let values = series(5)?;
    ensure(values == vec![Some(0), Some(1), Some(2), Some(3), Some(4)], "unexpected series")
}

#[test]
fn empty_series_has_no_values() -> TestResult {
    ensure(series(0)?.is_empty(), "zero-length series should be empty")
}

#[test]
fn series_rejects_values_past_i32_range() -> TestResult {
    let Ok(too_long) = usize::try_from(i64::from(i32::MAX) + 2) else {
        // 32-bit targets cannot express the length; nothing to check.
        return Ok(());
    };
    let result = series(too_long);
    ensure(
        result
            == Err(FixtureError::SeriesTooLong {
                length: too_long,
            }),
        "series longer than i32 range should be rejected",
    )
}

#[test]
fn every_standard_case_matches() -> TestResult {
    for case in standard_cases() {
        let outcome = case.evaluate();
        ensure(outcome.is_match(), format!("case {} produced {outcome:?}", case.name))?;
    }
    Ok(())
}

#[test]
fn catalog_series_case_uses_generated_series() -> TestResult {
    let cases = standard_cases();
    let case = cases
        .iter()
        .find(|case| case.name == "series_100000")
        .ok_or("series_100000 case missing")?;
    ensure(case.addends == Some(series(100_000)?), "catalog series should match series(100000)")
}

#[test]
fn standard_case_names_are_unique() -> TestResult {
    let cases = standard_cases();
    let names: BTreeSet<&str> = cases.iter().map(|case| case.name).collect();
    ensure(names.len() == cases.len(), "case names must be unique")
}

#[test]
fn catalog_covers_every_failure_kind() -> TestResult {
    let kinds: BTreeSet<&str> = standard_cases()
        .iter()
        .filter_map(|case| match case.expected {
            Expectation::Failure {
                kind, ..
            } => Some(kind.as_str()),
            Expectation::Sum(_) => None,
        })
        .collect();
    for kind in [ErrorKind::NullArgument, ErrorKind::InvalidArgument, ErrorKind::CalculatorFailure]
    {
        ensure(kinds.contains(kind.as_str()), format!("catalog lacks {kind}"))?;
    }
    Ok(())
}

#[test]
fn wrong_expectation_reports_actual_outcome() -> TestResult {
    let case = SummationCase::total("deliberately_wrong", vec![Some(1), Some(-1)], -1);
    let outcome = case.evaluate();
    ensure(
        outcome
            == CaseOutcome::Mismatched {
                actual: Ok(0),
            },
        format!("unexpected outcome {outcome:?}"),
    )
}

#[test]
fn wrong_failure_kind_is_a_mismatch() -> TestResult {
    let case = SummationCase::failure(
        "wrong_outer_kind",
        Some(vec![Some(1), Some(2), None]),
        ErrorKind::InvalidArgument,
        None,
    );
    ensure(!case.evaluate().is_match(), "calculator failure must not match InvalidArgument")
}
