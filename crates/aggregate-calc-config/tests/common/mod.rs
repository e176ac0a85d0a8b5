// crates/aggregate-calc-config/tests/common/mod.rs
// =============================================================================
// Module: Config Test Helpers
// Description: Shared helpers for config validation tests.
// Purpose: Reduce duplication across integration tests for aggregate-calc-config.
// =============================================================================

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use std::io::Write;

use aggregate_calc_config::AggregateCalcConfig;
use aggregate_calc_config::ConfigError;
use tempfile::NamedTempFile;

/// Result alias for config integration tests.
pub type TestResult = Result<(), String>;

/// Writes `contents` to a temporary config file.
pub fn config_file(contents: &str) -> Result<NamedTempFile, String> {
    let mut file = NamedTempFile::new().map_err(|err| err.to_string())?;
    file.write_all(contents.as_bytes()).map_err(|err| err.to_string())?;
    Ok(file)
}

/// Parses and validates a TOML string as a config document.
pub fn config_from_toml(toml_str: &str) -> Result<AggregateCalcConfig, ConfigError> {
    AggregateCalcConfig::from_bytes(toml_str.as_bytes())
}

/// Asserts that `result` failed with a message containing `needle`.
pub fn assert_invalid(
    result: Result<AggregateCalcConfig, ConfigError>,
    needle: &str,
) -> TestResult {
    match result {
        Err(error) => {
            let message = error.to_string();
            if message.contains(needle) {
                Ok(())
            } else {
                Err(format!("error {message} did not contain {needle}"))
            }
        }
        Ok(_) => Err("expected invalid config".to_string()),
    }
}
