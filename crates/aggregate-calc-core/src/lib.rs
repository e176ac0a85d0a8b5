// crates/aggregate-calc-core/src/lib.rs
// ============================================================================
// Module: Aggregate Calculator Core Library
// Description: Public API surface for the aggregate calculator core.
// Purpose: Expose the summation entry points, error taxonomy, and fixtures.
// Dependencies: crate::{error, fixtures, summation}
// ============================================================================

//! ## Overview
//! The aggregate calculator sums a sequence of optional 32-bit integers into a
//! 64-bit total. Bad input is never coerced: an absent sequence, an empty
//! sequence, and a sequence holding an empty slot each fail with a distinct,
//! classifiable error so callers can tell bad arguments apart from bad data
//! discovered mid-computation.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod error;
pub mod fixtures;
pub mod summation;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use error::CalculatorError;
pub use error::ErrorKind;
pub use error::InvalidOperation;
pub use error::InvalidOperationReason;
pub use error::SumError;
pub use fixtures::CaseOutcome;
pub use fixtures::Expectation;
pub use fixtures::FixtureError;
pub use fixtures::SummationCase;
pub use fixtures::series;
pub use fixtures::standard_cases;
pub use summation::ADDENDS_PARAMETER;
pub use summation::sum;
pub use summation::sum_addends;
