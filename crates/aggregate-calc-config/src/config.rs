// crates/aggregate-calc-config/src/config.rs
// ============================================================================
// Module: Aggregate Calculator Configuration
// Description: Configuration loading and validation for the calculator tools.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: serde, thiserror, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path limits.
//! The path comes from the caller, then `AGGREGATE_CALC_CONFIG`, then
//! `aggregate-calc.toml` in the working directory. A caller or environment
//! path must exist; only the implicit default may be missing, in which case
//! built-in defaults apply.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
pub const DEFAULT_CONFIG_NAME: &str = "aggregate-calc.toml";
/// Environment variable used to override the config path.
pub const CONFIG_ENV_VAR: &str = "AGGREGATE_CALC_CONFIG";
/// Maximum configuration file size in bytes.
pub const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Default maximum number of addends accepted per summation request.
pub const DEFAULT_MAX_ADDENDS: usize = 1_000_000;
/// Upper bound for `limits.max_addends`.
pub const MAX_ADDENDS_CEILING: usize = 100_000_000;
/// Default maximum size of a JSON addend document in bytes.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 16 * 1024 * 1024;
/// Upper bound for `limits.max_input_bytes`.
pub const MAX_INPUT_BYTES_CEILING: usize = 256 * 1024 * 1024;

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Aggregate calculator configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AggregateCalcConfig {
    /// Input limits.
    #[serde(default)]
    pub limits: LimitsConfig,
    /// Output rendering configuration.
    #[serde(default)]
    pub output: OutputConfig,
    /// Audit logging configuration.
    #[serde(default)]
    pub audit: AuditConfig,
    /// Where the configuration came from (not serialized).
    #[serde(skip)]
    pub source: ConfigSource,
}

impl AggregateCalcConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (resolved, source) = resolve_path(path)?;
        validate_path(&resolved)?;
        if source == ConfigSource::Default && !resolved.exists() {
            let config = Self::default();
            config.validate()?;
            return Ok(config);
        }
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        let mut config = Self::from_bytes(&bytes)?;
        config.source = source;
        Ok(config)
    }

    /// Parses and validates configuration from raw file bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the bytes are oversized, not UTF-8,
    /// malformed, or invalid.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.limits.validate()?;
        self.audit.validate()?;
        Ok(())
    }
}

/// Origin of a loaded configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfigSource {
    /// Built-in defaults or the implicit default file.
    #[default]
    Default,
    /// Path supplied by the caller.
    Explicit,
    /// Path taken from [`CONFIG_ENV_VAR`].
    Environment,
}

/// Limits applied to summation inputs before they reach the core.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LimitsConfig {
    /// Maximum number of addends in one request.
    #[serde(default = "default_max_addends")]
    pub max_addends: usize,
    /// Maximum size of a JSON addend document in bytes.
    #[serde(default = "default_max_input_bytes")]
    pub max_input_bytes: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_addends: default_max_addends(),
            max_input_bytes: default_max_input_bytes(),
        }
    }
}

impl LimitsConfig {
    /// Validates limit ranges.
    fn validate(&self) -> Result<(), ConfigError> {
        validate_range("limits.max_addends", self.max_addends, MAX_ADDENDS_CEILING)?;
        validate_range("limits.max_input_bytes", self.max_input_bytes, MAX_INPUT_BYTES_CEILING)?;
        Ok(())
    }
}

/// Output rendering configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Default output format.
    #[serde(default)]
    pub format: OutputFormat,
}

/// Output formats for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Canonical JSON, one document per line.
    #[default]
    Json,
    /// Plain human-readable text.
    Text,
}

/// Audit logging configuration for summation requests.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuditConfig {
    /// Enable structured audit logging.
    #[serde(default)]
    pub enabled: bool,
    /// Optional audit log path (JSON lines); stderr when unset.
    #[serde(default)]
    pub path: Option<String>,
}

impl AuditConfig {
    /// Validates audit configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(path) = &self.path {
            validate_path_string("audit.path", path)?;
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading or validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the config path from caller or environment defaults.
fn resolve_path(path: Option<&Path>) -> Result<(PathBuf, ConfigSource), ConfigError> {
    if let Some(path) = path {
        return Ok((path.to_path_buf(), ConfigSource::Explicit));
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok((PathBuf::from(env_path), ConfigSource::Environment));
    }
    Ok((PathBuf::from(DEFAULT_CONFIG_NAME), ConfigSource::Default))
}

/// Validates the resolved path against security limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}

/// Validates a path string against length constraints.
fn validate_path_string(field: &str, value: &str) -> Result<(), ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Invalid(format!("{field} must be non-empty")));
    }
    if trimmed.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid(format!("{field} exceeds max length")));
    }
    let path = Path::new(trimmed);
    for component in path.components() {
        let component_value = component.as_os_str().to_string_lossy();
        if component_value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid(format!("{field} path component too long")));
        }
    }
    Ok(())
}

/// Validates that `value` lies in `1 ..= max`.
fn validate_range(field: &str, value: usize, max: usize) -> Result<(), ConfigError> {
    if value == 0 {
        return Err(ConfigError::Invalid(format!("{field} must be greater than zero")));
    }
    if value > max {
        return Err(ConfigError::Invalid(format!("{field} must be at most {max}")));
    }
    Ok(())
}

/// Default for `limits.max_addends`.
const fn default_max_addends() -> usize {
    DEFAULT_MAX_ADDENDS
}

/// Default for `limits.max_input_bytes`.
const fn default_max_input_bytes() -> usize {
    DEFAULT_MAX_INPUT_BYTES
}

// ============================================================================
// SECTION: Tests
// ============================================================================
