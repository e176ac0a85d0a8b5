// crates/aggregate-calc-cli/src/main.rs
// ============================================================================
// Module: Aggregate Calculator CLI Entry Point
// Description: Command dispatcher for summation and fixture workflows.
// Purpose: Expose the summation core, fixture catalog, and config checks.
// Dependencies: clap, aggregate-calc-core, aggregate-calc-config, serde,
//               serde_jcs, thiserror
// ============================================================================

//! ## Overview
//! `aggregate-calc` sums addends given on the command line or as JSON, sums
//! generated sequential series, evaluates the standard scenario catalog, and
//! validates configuration. Results are written to stdout as canonical JSON
//! or plain text; failures of the summation itself are reported as data and
//! produce a failure exit code.

// ============================================================================
// SECTION: Modules
// ============================================================================


// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use aggregate_calc_cli::audit::AuditSink;
use aggregate_calc_cli::audit::SumAuditEvent;
use aggregate_calc_cli::audit::audit_sink_from_config;
use aggregate_calc_cli::input::enforce_addend_count;
use aggregate_calc_cli::input::load_addends;
use aggregate_calc_cli::report::CasesReport;
use aggregate_calc_cli::report::SumReport;
use aggregate_calc_config::AggregateCalcConfig;
use aggregate_calc_config::ConfigSource;
use aggregate_calc_config::OutputFormat;
use aggregate_calc_core::series;
use aggregate_calc_core::standard_cases;
use aggregate_calc_core::sum;
use clap::Args;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "aggregate-calc", version, disable_help_subcommand = true)]
struct Cli {
    /// Config file path (overrides `AGGREGATE_CALC_CONFIG`).
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,
    /// Output format (overrides `output.format`).
    #[arg(long, value_enum, value_name = "FORMAT", global = true)]
    format: Option<FormatArg>,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Sum addends given as values or as a JSON document.
    Sum(SumCommand),
    /// Sum the sequential series `0 .. length`.
    Series(SeriesCommand),
    /// Evaluate the standard scenario catalog.
    Cases,
    /// Configuration utilities.
    Config {
        /// Selected config subcommand.
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Arguments for `sum`.
#[derive(Args, Debug)]
struct SumCommand {
    /// Addends: integers, or `null` for an empty slot.
    #[arg(value_name = "VALUE", allow_negative_numbers = true)]
    values: Vec<String>,
    /// JSON addend document (`null` or an array); `-` reads stdin.
    #[arg(long, value_name = "PATH", conflicts_with = "values")]
    input: Option<PathBuf>,
}

/// Arguments for `series`.
#[derive(Args, Debug)]
struct SeriesCommand {
    /// Number of values in the series.
    #[arg(long, value_name = "N")]
    length: usize,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Load and validate the configuration.
    Validate,
}

/// Output format selection.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum FormatArg {
    /// Canonical JSON.
    Json,
    /// Plain text.
    Text,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Json => Self::Json,
            FormatArg::Text => Self::Text,
        }
    }
}

/// Result of `config validate`.
#[derive(Debug, Serialize)]
struct ConfigStatus {
    /// Always `valid`; invalid configs fail before reaching output.
    status: &'static str,
    /// Where the configuration came from.
    source: &'static str,
    /// Effective addend limit.
    max_addends: usize,
    /// Effective input byte limit.
    max_input_bytes: usize,
    /// Whether audit logging is enabled.
    audit_enabled: bool,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for user-facing error messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();
    let config = AggregateCalcConfig::load(cli.config.as_deref())
        .map_err(|err| CliError::new(format!("failed to load config: {err}")))?;
    let format = resolve_format(cli.format, &config);

    match cli.command {
        Commands::Sum(command) => command_sum(&command, &config, format),
        Commands::Series(command) => command_series(&command, &config, format),
        Commands::Cases => command_cases(format),
        Commands::Config {
            command: ConfigCommand::Validate,
        } => command_config_validate(&config, format),
    }
}

/// Picks the CLI format override, falling back to the configured default.
fn resolve_format(arg: Option<FormatArg>, config: &AggregateCalcConfig) -> OutputFormat {
    arg.map_or(config.output.format, OutputFormat::from)
}

// ============================================================================
// SECTION: Commands
// ============================================================================

/// Executes `sum`.
fn command_sum(
    command: &SumCommand,
    config: &AggregateCalcConfig,
    format: OutputFormat,
) -> CliResult<ExitCode> {
    let addends = load_addends(&command.values, command.input.as_deref(), &config.limits)
        .map_err(|err| CliError::new(err.to_string()))?;
    let sink = open_audit_sink(config)?;
    let result = sum(addends.as_deref());
    sink.record(&SumAuditEvent::new("sum", addends.as_deref(), &result));
    emit_sum_report(&SumReport::from_result(&result), format)
}

/// Executes `series`.
fn command_series(
    command: &SeriesCommand,
    config: &AggregateCalcConfig,
    format: OutputFormat,
) -> CliResult<ExitCode> {
    enforce_addend_count(command.length, config.limits.max_addends)
        .map_err(|err| CliError::new(err.to_string()))?;
    let addends = series(command.length).map_err(|err| CliError::new(err.to_string()))?;
    let sink = open_audit_sink(config)?;
    let result = sum(Some(addends.as_slice()));
    sink.record(&SumAuditEvent::new("series", Some(addends.as_slice()), &result));
    emit_sum_report(&SumReport::from_result(&result), format)
}

/// Executes `cases`.
fn command_cases(format: OutputFormat) -> CliResult<ExitCode> {
    let report = CasesReport::evaluate(&standard_cases());
    emit(&report, format, report.render_text())?;
    Ok(if report.failed == 0 { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

/// Executes `config validate`.
fn command_config_validate(
    config: &AggregateCalcConfig,
    format: OutputFormat,
) -> CliResult<ExitCode> {
    let status = ConfigStatus {
        status: "valid",
        source: config_source_label(config.source),
        max_addends: config.limits.max_addends,
        max_input_bytes: config.limits.max_input_bytes,
        audit_enabled: config.audit.enabled,
    };
    let text = format!("config valid (source: {})", status.source);
    emit(&status, format, text)?;
    Ok(ExitCode::SUCCESS)
}

/// Returns a stable label for a config source.
const fn config_source_label(source: ConfigSource) -> &'static str {
    match source {
        ConfigSource::Default => "default",
        ConfigSource::Explicit => "explicit",
        ConfigSource::Environment => "environment",
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Opens the configured audit sink.
fn open_audit_sink(config: &AggregateCalcConfig) -> CliResult<Box<dyn AuditSink>> {
    audit_sink_from_config(&config.audit)
        .map_err(|err| CliError::new(format!("failed to open audit log: {err}")))
}

/// Emits a summation report and maps it to an exit code.
fn emit_sum_report(report: &SumReport, format: OutputFormat) -> CliResult<ExitCode> {
    emit(report, format, report.render_text())?;
    Ok(if report.is_success() { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

/// Emits a value as canonical JSON or as the provided text.
fn emit<T: Serialize>(value: &T, format: OutputFormat, text: String) -> CliResult<()> {
    match format {
        OutputFormat::Json => write_json(value),
        OutputFormat::Text => {
            write_stdout_line(&text).map_err(|err| CliError::new(output_error("stdout", &err)))
        }
    }
}

/// Writes canonical JSON followed by a newline to stdout.
fn write_json<T: Serialize>(value: &T) -> CliResult<()> {
    let mut bytes = serde_jcs::to_vec(value)
        .map_err(|err| CliError::new(format!("failed to encode json: {err}")))?;
    bytes.push(b'\n');
    let mut stdout = std::io::stdout();
    stdout.write_all(&bytes).map_err(|err| CliError::new(output_error("stdout", &err)))
}

/// Writes a line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes a line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats an output error message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    format!("failed to write to {stream}: {error}")
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
