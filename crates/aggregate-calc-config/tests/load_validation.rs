//! Config load validation tests for aggregate-calc-config.
// crates/aggregate-calc-config/tests/load_validation.rs
// =============================================================================
// Module: Config Load Validation Tests
// Description: Validate config loading guards (path, size, encoding).
// Purpose: Ensure config input handling is strict and fail-closed.
// =============================================================================

mod common;

use std::io::Write;
use std::path::Path;

use aggregate_calc_config::AggregateCalcConfig;
use aggregate_calc_config::ConfigError;
use aggregate_calc_config::ConfigSource;
use aggregate_calc_config::DEFAULT_MAX_ADDENDS;
use aggregate_calc_config::OutputFormat;
use common::TestResult;
use common::assert_invalid;
use common::config_file;
use tempfile::NamedTempFile;

#[test]
fn load_rejects_path_too_long() -> TestResult {
    let long_path = "a".repeat(5_000);
    let path = Path::new(&long_path);
    assert_invalid(AggregateCalcConfig::load(Some(path)), "config path exceeds max length")
}

#[test]
fn load_rejects_path_component_too_long() -> TestResult {
    let long_component = "a".repeat(300);
    let path = Path::new(&long_component);
    assert_invalid(AggregateCalcConfig::load(Some(path)), "config path component too long")
}

#[test]
fn load_rejects_oversized_file() -> TestResult {
    let mut file = NamedTempFile::new().map_err(|err| err.to_string())?;
    let payload = vec![b'#'; 1_048_577];
    file.write_all(&payload).map_err(|err| err.to_string())?;
    assert_invalid(AggregateCalcConfig::load(Some(file.path())), "config file exceeds size limit")
}

#[test]
fn load_rejects_non_utf8_file() -> TestResult {
    let mut file = NamedTempFile::new().map_err(|err| err.to_string())?;
    file.write_all(&[0xFF, 0xFE, 0xFF]).map_err(|err| err.to_string())?;
    assert_invalid(AggregateCalcConfig::load(Some(file.path())), "config file must be utf-8")
}

#[test]
fn load_rejects_missing_explicit_path() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let missing = dir.path().join("absent.toml");
    match AggregateCalcConfig::load(Some(&missing)) {
        Err(ConfigError::Io(_)) => Ok(()),
        Err(other) => Err(format!("expected io error, got {other}")),
        Ok(_) => Err("missing explicit config must not load".to_string()),
    }
}

#[test]
fn load_rejects_malformed_toml() -> TestResult {
    let file = config_file("[limits\nmax_addends = 3")?;
    assert_invalid(AggregateCalcConfig::load(Some(file.path())), "config parse error")
}

#[test]
fn load_reads_explicit_file() -> TestResult {
    let file = config_file("[limits]\nmax_addends = 42\n\n[output]\nformat = \"text\"\n")?;
    let config = AggregateCalcConfig::load(Some(file.path())).map_err(|err| err.to_string())?;
    if config.limits.max_addends != 42 {
        return Err(format!("expected max_addends 42, got {}", config.limits.max_addends));
    }
    if config.output.format != OutputFormat::Text {
        return Err("expected text output".to_string());
    }
    if config.source != ConfigSource::Explicit {
        return Err("expected explicit source".to_string());
    }
    Ok(())
}

#[test]
fn empty_file_yields_defaults() -> TestResult {
    let file = config_file("")?;
    let config = AggregateCalcConfig::load(Some(file.path())).map_err(|err| err.to_string())?;
    if config.limits.max_addends != DEFAULT_MAX_ADDENDS {
        return Err("expected default max_addends".to_string());
    }
    if config.output.format != OutputFormat::Json || config.audit.enabled {
        return Err("expected default output and audit settings".to_string());
    }
    Ok(())
}
