//! Export errors

use thiserror::Error;

/// Result type for exports
pub type ExportResult<T> = Result<T, ExportError>;

/// Export errors
#[derive(Debug, Error)]
pub enum ExportError {
    /// Requested column has no accessor
    #[error("Unknown export column: {0}")]
    UnknownColumn(String),

    /// Nothing to put in the header row
    #[error("Export needs at least one column")]
    NoColumns,

    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON export failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Export I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Export produced invalid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

impl ExportError {
    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            ExportError::UnknownColumn(_) => "SERVIJOY_EXPORT_UNKNOWN_COLUMN",
            ExportError::NoColumns => "SERVIJOY_EXPORT_NO_COLUMNS",
            ExportError::Csv(_) | ExportError::Json(_) | ExportError::Encoding(_) => {
                "SERVIJOY_EXPORT_FAILED"
            }
            ExportError::Io(_) => "SERVIJOY_EXPORT_IO",
        }
    }
}
