// crates/aggregate-calc-core/src/error.rs
// ============================================================================
// Module: Summation Error Taxonomy
// Description: Classified failures raised by the summation core.
// Purpose: Let callers distinguish argument failures from data failures
//          without inspecting messages.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! Summation fails in exactly one of three ways, checked in priority order:
//! the sequence is absent ([`SumError::NullArgument`]), the sequence is empty
//! ([`SumError::InvalidArgument`]), or a slot holds no value
//! ([`SumError::CalculatorFailure`]). The last is a domain error that always
//! carries an [`InvalidOperation`] cause, reachable through
//! [`std::error::Error::source`].
//!
//! [`ErrorKind`] is the stable discriminator for all four error types.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Message carried by calculator failures built from a bare cause.
pub const CALCULATOR_FAILURE_MESSAGE: &str = "summation aborted on an invalid addend";

// ============================================================================
// SECTION: Error Kind
// ============================================================================

/// Stable classification for every error the core can produce.
///
/// # Invariants
/// - Labels returned by [`ErrorKind::as_str`] are stable for logging and
///   serialized output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The addend sequence itself was absent.
    NullArgument,
    /// The addend sequence was present but empty.
    InvalidArgument,
    /// Summation failed on the data; always wraps an invalid operation.
    CalculatorFailure,
    /// Low-level condition raised while reading an addend.
    InvalidOperation,
}

impl ErrorKind {
    /// Returns a stable label for the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NullArgument => "null_argument",
            Self::InvalidArgument => "invalid_argument",
            Self::CalculatorFailure => "calculator_failure",
            Self::InvalidOperation => "invalid_operation",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Invalid Operation
// ============================================================================

/// Why an addend could not be folded into the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidOperationReason {
    /// The slot held no value.
    MissingValue,
    /// Adding the value would leave the 64-bit range.
    Overflow,
}

impl fmt::Display for InvalidOperationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingValue => f.write_str("has no value"),
            Self::Overflow => f.write_str("overflows the 64-bit accumulator"),
        }
    }
}

/// Low-level failure raised while reading an addend during summation.
///
/// # Invariants
/// - `index` is the zero-based position of the offending slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("addend at index {index} {reason}")]
pub struct InvalidOperation {
    /// Zero-based position of the offending slot.
    index: usize,
    /// Why the slot could not be summed.
    reason: InvalidOperationReason,
}

impl InvalidOperation {
    /// Creates an invalid-operation error for an empty slot.
    #[must_use]
    pub const fn missing_value(index: usize) -> Self {
        Self {
            index,
            reason: InvalidOperationReason::MissingValue,
        }
    }

    /// Creates an invalid-operation error for an accumulator overflow.
    #[must_use]
    pub const fn overflow(index: usize) -> Self {
        Self {
            index,
            reason: InvalidOperationReason::Overflow,
        }
    }

    /// Returns the zero-based index of the offending slot.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns why the slot could not be summed.
    #[must_use]
    pub const fn reason(&self) -> InvalidOperationReason {
        self.reason
    }

    /// Returns [`ErrorKind::InvalidOperation`].
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidOperation
    }
}

// ============================================================================
// SECTION: Calculator Error
// ============================================================================

/// Domain failure raised when summation cannot complete on the given data.
///
/// # Invariants
/// - The cause is always an [`InvalidOperation`] and is exposed through
///   [`std::error::Error::source`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct CalculatorError {
    /// Human-readable failure message.
    message: String,
    /// Underlying low-level condition.
    #[source]
    cause: InvalidOperation,
}

impl CalculatorError {
    /// Wraps an invalid operation with a domain-specific message.
    #[must_use]
    pub fn new(message: impl Into<String>, cause: InvalidOperation) -> Self {
        Self {
            message: message.into(),
            cause,
        }
    }

    /// Returns the failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the wrapped invalid operation.
    #[must_use]
    pub const fn cause(&self) -> &InvalidOperation {
        &self.cause
    }

    /// Returns [`ErrorKind::CalculatorFailure`].
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        ErrorKind::CalculatorFailure
    }
}

impl From<InvalidOperation> for CalculatorError {
    fn from(cause: InvalidOperation) -> Self {
        Self::new(CALCULATOR_FAILURE_MESSAGE, cause)
    }
}

// ============================================================================
// SECTION: Sum Error
// ============================================================================

/// Errors returned by [`crate::sum`].
///
/// # Invariants
/// - Variants are mutually exclusive and stable for programmatic handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SumError {
    /// The addend sequence was absent.
    #[error("value cannot be null (parameter '{parameter}')")]
    NullArgument {
        /// Name of the absent parameter.
        parameter: &'static str,
    },
    /// The addend sequence was present but unusable.
    #[error("{message} (parameter '{parameter}')")]
    InvalidArgument {
        /// Description of the problem.
        message: String,
        /// Name of the offending parameter.
        parameter: &'static str,
    },
    /// Summation failed on the data itself.
    #[error("calculator failure")]
    CalculatorFailure(#[from] CalculatorError),
}

impl SumError {
    /// Returns the classification of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NullArgument {
                ..
            } => ErrorKind::NullArgument,
            Self::InvalidArgument {
                ..
            } => ErrorKind::InvalidArgument,
            Self::CalculatorFailure(_) => ErrorKind::CalculatorFailure,
        }
    }

    /// Returns the classification of the wrapped cause, if any.
    #[must_use]
    pub const fn cause_kind(&self) -> Option<ErrorKind> {
        match self {
            Self::CalculatorFailure(error) => Some(error.cause().kind()),
            Self::NullArgument {
                ..
            }
            | Self::InvalidArgument {
                ..
            } => None,
        }
    }

    /// Returns the parameter name for argument failures.
    #[must_use]
    pub const fn parameter(&self) -> Option<&'static str> {
        match self {
            Self::NullArgument {
                parameter,
            }
            | Self::InvalidArgument {
                parameter, ..
            } => Some(*parameter),
            Self::CalculatorFailure(_) => None,
        }
    }

    /// Returns the invalid operation behind a calculator failure.
    #[must_use]
    pub const fn invalid_operation(&self) -> Option<&InvalidOperation> {
        match self {
            Self::CalculatorFailure(error) => Some(error.cause()),
            Self::NullArgument {
                ..
            }
            | Self::InvalidArgument {
                ..
            } => None,
        }
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
