//! CLI-specific error types
//!
//! Every failure of a command ends the process with a JSON error object.

use std::fmt;
use std::io;

use crate::export::ExportError;
use crate::query::QueryError;
use crate::views::ViewError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// I/O error (files, stdin/stdout)
    IoError,
    /// Records file is not a JSON array
    InvalidRecords,
    /// Query spec rejected
    InvalidQuery,
    /// View missing or malformed
    InvalidView,
    /// Export could not be written
    ExportFailed,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "SERVIJOY_CLI_CONFIG_ERROR",
            Self::IoError => "SERVIJOY_CLI_IO_ERROR",
            Self::InvalidRecords => "SERVIJOY_CLI_INVALID_RECORDS",
            Self::InvalidQuery => "SERVIJOY_CLI_INVALID_QUERY",
            Self::InvalidView => "SERVIJOY_CLI_INVALID_VIEW",
            Self::ExportFailed => "SERVIJOY_CLI_EXPORT_FAILED",
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
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    pub fn invalid_records(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::InvalidRecords, msg)
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

impl From<QueryError> for CliError {
    fn from(e: QueryError) -> Self {
        Self::new(CliErrorCode::InvalidQuery, format!("{} ({})", e, e.code()))
    }
}

impl From<ViewError> for CliError {
    fn from(e: ViewError) -> Self {
        Self::new(CliErrorCode::InvalidView, e.to_string())
    }
}

impl From<ExportError> for CliError {
    fn from(e: ExportError) -> Self {
        Self::new(CliErrorCode::ExportFailed, e.to_string())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
