//! CLI-specific error types
//!
//! Every CLI error ends the process with a non-zero exit code.

use std::fmt;
use std::io;

use crate::pathreg::PathRegError;
use crate::schema::SchemaError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// I/O error (files, stdin/stdout)
    IoError,
    /// Experiment name not known
    UnknownExperiment,
    /// At least one probe did not hold
    ProbesFailed,
    /// Schema unusable or document rejected
    SchemaError,
    /// Path-configuration file not written
    RegistrationFailed,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "PROBE_CLI_CONFIG_ERROR",
            Self::IoError => "PROBE_CLI_IO_ERROR",
            Self::UnknownExperiment => "PROBE_CLI_UNKNOWN_EXPERIMENT",
            Self::ProbesFailed => "PROBE_CLI_PROBES_FAILED",
            Self::SchemaError => "PROBE_CLI_SCHEMA_ERROR",
            Self::RegistrationFailed => "PROBE_CLI_REGISTRATION_FAILED",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Unknown experiment
    pub fn unknown_experiment(name: &str) -> Self {
        Self::new(
            CliErrorCode::UnknownExperiment,
            format!(
                "Unknown experiment '{}'. Run 'modelprobe list' to see the available ones.",
                name
            ),
        )
    }

    /// Probes failed
    pub fn probes_failed(count: usize) -> Self {
        let noun = if count == 1 { "probe" } else { "probes" };
        Self::new(
            CliErrorCode::ProbesFailed,
            format!("{} {} did not hold", count, noun),
        )
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::io_error(format!("JSON error: {}", e))
    }
}

impl From<SchemaError> for CliError {
    fn from(e: SchemaError) -> Self {
        Self::new(CliErrorCode::SchemaError, e.to_string())
    }
}

impl From<PathRegError> for CliError {
    fn from(e: PathRegError) -> Self {
        Self::new(CliErrorCode::RegistrationFailed, e.to_string())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
