// crates/aggregate-calc-cli/src/input.rs
// ============================================================================
// Module: Addend Input Parsing
// Description: Parses addend sequences from CLI tokens or JSON documents.
// Purpose: Turn untrusted input into `Option<Vec<Option<i32>>>` under limits.
// Dependencies: aggregate-calc-config, serde_json, thiserror
// ============================================================================

//! ## Overview
//! Addends arrive either as positional tokens (`1 2 null`) or as a JSON
//! document read from a file or stdin. JSON can express all three input
//! shapes: `null` is an absent sequence, `[]` is an empty one, and `null`
//! inside an array is an empty slot. Reads are bounded by
//! `limits.max_input_bytes` and sequences by `limits.max_addends`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::File;
use std::io::Read;
use std::path::Path;

use aggregate_calc_config::LimitsConfig;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Token that denotes an empty slot in positional input.
pub const NULL_TOKEN: &str = "null";
/// Path argument that selects stdin for `--input`.
pub const STDIN_PATH: &str = "-";

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while reading addend input.
#[derive(Debug, Error)]
pub enum InputError {
    /// A positional token was neither an `i32` nor `null`.
    #[error("invalid addend '{token}' at position {position}: expected an i32 or 'null'")]
    InvalidToken {
        /// Offending token.
        token: String,
        /// Zero-based token position.
        position: usize,
    },
    /// The JSON document did not describe an addend sequence.
    #[error("addend input is not a valid json sequence: {0}")]
    Json(String),
    /// Input exceeded the configured byte limit.
    #[error("addend input exceeds size limit: {size} bytes (limit {limit})")]
    TooLarge {
        /// Observed size in bytes.
        size: u64,
        /// Allowed limit in bytes.
        limit: usize,
    },
    /// Input could not be read.
    #[error("addend input read failed: {0}")]
    Io(String),
    /// The sequence held more slots than allowed.
    #[error("too many addends: {count} (limit {limit})")]
    TooManyAddends {
        /// Number of slots supplied.
        count: usize,
        /// Allowed number of slots.
        limit: usize,
    },
}

// ============================================================================
// SECTION: Parsing
// ============================================================================

/// Parses positional tokens into a present sequence.
///
/// # Errors
///
/// Returns [`InputError::InvalidToken`] for the first token that is neither an
/// `i32` nor [`NULL_TOKEN`] (case-insensitive).
pub fn parse_tokens(tokens: &[String]) -> Result<Vec<Option<i32>>, InputError> {
    tokens
        .iter()
        .enumerate()
        .map(|(position, token)| {
            let trimmed = token.trim();
            if trimmed.eq_ignore_ascii_case(NULL_TOKEN) {
                return Ok(None);
            }
            trimmed.parse::<i32>().map(Some).map_err(|_| InputError::InvalidToken {
                token: token.clone(),
                position,
            })
        })
        .collect()
}

/// Parses a JSON addend document.
///
/// # Errors
///
/// Returns [`InputError::Json`] when the document is not `null` or an array of
/// `i32`/`null` values.
pub fn parse_addends_json(bytes: &[u8]) -> Result<Option<Vec<Option<i32>>>, InputError> {
    serde_json::from_slice(bytes).map_err(|err| InputError::Json(err.to_string()))
}

/// Rejects sequences longer than `limit`.
///
/// # Errors
///
/// Returns [`InputError::TooManyAddends`] when the sequence is too long.
pub fn enforce_addend_limit(
    addends: Option<&[Option<i32>]>,
    limit: usize,
) -> Result<(), InputError> {
    addends.map_or(Ok(()), |slots| enforce_addend_count(slots.len(), limit))
}

/// Rejects a slot count above `limit` before any slots are materialized.
///
/// # Errors
///
/// Returns [`InputError::TooManyAddends`] when `count` exceeds `limit`.
pub const fn enforce_addend_count(count: usize, limit: usize) -> Result<(), InputError> {
    if count > limit {
        return Err(InputError::TooManyAddends {
            count,
            limit,
        });
    }
    Ok(())
}

/// Resolves the addend sequence for a `sum` request.
///
/// `input` takes precedence over `tokens`; [`STDIN_PATH`] reads stdin.
///
/// # Errors
///
/// Returns [`InputError`] when reading, parsing, or limit checks fail.
pub fn load_addends(
    tokens: &[String],
    input: Option<&Path>,
    limits: &LimitsConfig,
) -> Result<Option<Vec<Option<i32>>>, InputError> {
    let addends = match input {
        Some(path) if path == Path::new(STDIN_PATH) => {
            let bytes = read_limited(std::io::stdin().lock(), limits.max_input_bytes)?;
            parse_addends_json(&bytes)?
        }
        Some(path) => {
            let bytes = read_bytes_with_limit(path, limits.max_input_bytes)?;
            parse_addends_json(&bytes)?
        }
        None => Some(parse_tokens(tokens)?),
    };
    enforce_addend_limit(addends.as_deref(), limits.max_addends)?;
    Ok(addends)
}

// ============================================================================
// SECTION: Bounded Reads
// ============================================================================

/// Reads a file from disk while enforcing a hard size limit.
///
/// # Errors
///
/// Returns [`InputError::TooLarge`] when the file exceeds `max_bytes` and
/// [`InputError::Io`] on read failures.
pub fn read_bytes_with_limit(path: &Path, max_bytes: usize) -> Result<Vec<u8>, InputError> {
    let file = File::open(path).map_err(|err| InputError::Io(err.to_string()))?;
    let size = file.metadata().map_err(|err| InputError::Io(err.to_string()))?.len();
    let limit = u64::try_from(max_bytes).unwrap_or(u64::MAX);
    if size > limit {
        return Err(InputError::TooLarge {
            size,
            limit: max_bytes,
        });
    }
    read_limited(file, max_bytes)
}

/// Reads at most `max_bytes` from `reader`, failing if more are available.
///
/// # Errors
///
/// Returns [`InputError::TooLarge`] when the reader yields more than
/// `max_bytes` and [`InputError::Io`] on read failures.
pub fn read_limited<R: Read>(reader: R, max_bytes: usize) -> Result<Vec<u8>, InputError> {
    let read_limit = u64::try_from(max_bytes).unwrap_or(u64::MAX).saturating_add(1);
    let mut bytes = Vec::new();
    reader
        .take(read_limit)
        .read_to_end(&mut bytes)
        .map_err(|err| InputError::Io(err.to_string()))?;
    if bytes.len() > max_bytes {
        return Err(InputError::TooLarge {
            size: u64::try_from(bytes.len()).unwrap_or(u64::MAX),
            limit: max_bytes,
        });
    }
    Ok(bytes)
}

// ============================================================================
// SECTION: Tests
// ============================================================================
