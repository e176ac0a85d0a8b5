// crates/aggregate-calc-core/src/summation.rs
// ============================================================================
// Module: Summation Core
// Description: Validates and sums a sequence of optional 32-bit integers.
// Purpose: Produce an exact 64-bit total or a classified failure.
// Dependencies: crate::error
// ============================================================================

//! ## Overview
//! [`sum`] checks its input in a fixed order: absent sequence, then empty
//! sequence, then a left-to-right fold that widens each value into an `i64`
//! accumulator. The fold stops at the first empty slot and reports it as a
//! [`CalculatorError`] wrapping an [`InvalidOperation`].
//!
//! Invariants:
//! - Accumulation uses checked addition and never wraps or saturates.
//! - The function is pure; identical input always yields identical output.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::error::CalculatorError;
use crate::error::InvalidOperation;
use crate::error::SumError;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Parameter name reported by argument failures.
pub const ADDENDS_PARAMETER: &str = "addends";
/// Message carried by the empty-sequence failure.
pub const EMPTY_ADDENDS_MESSAGE: &str = "addends contain no values";

// ============================================================================
// SECTION: Summation
// ============================================================================

/// Sums the present values of `addends` into a 64-bit total.
///
/// # Errors
///
/// - [`SumError::NullArgument`] when `addends` is `None`.
/// - [`SumError::InvalidArgument`] when `addends` is empty.
/// - [`SumError::CalculatorFailure`] when any slot is `None`; the first such
///   slot in left-to-right order is reported.
pub fn sum(addends: Option<&[Option<i32>]>) -> Result<i64, SumError> {
    let Some(addends) = addends else {
        return Err(SumError::NullArgument {
            parameter: ADDENDS_PARAMETER,
        });
    };
    if addends.is_empty() {
        return Err(SumError::InvalidArgument {
            message: EMPTY_ADDENDS_MESSAGE.to_string(),
            parameter: ADDENDS_PARAMETER,
        });
    }
    let total = fold_addends(0, addends).map_err(CalculatorError::from)?;
    Ok(total)
}

/// Sums a present sequence. Equivalent to `sum(Some(addends))`.
///
/// # Errors
///
/// Returns [`SumError`] under the same rules as [`sum`], except that
/// [`SumError::NullArgument`] cannot occur.
pub fn sum_addends(addends: &[Option<i32>]) -> Result<i64, SumError> {
    sum(Some(addends))
}

/// Folds `addends` onto `initial`, stopping at the first unusable slot.
fn fold_addends(initial: i64, addends: &[Option<i32>]) -> Result<i64, InvalidOperation> {
    addends.iter().enumerate().try_fold(initial, |total, (index, addend)| {
        let value = addend.ok_or(InvalidOperation::missing_value(index))?;
        total.checked_add(i64::from(value)).ok_or(InvalidOperation::overflow(index))
    })
}

// ============================================================================
// SECTION: Tests
// ============================================================================
