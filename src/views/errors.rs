//! View profile errors

use thiserror::Error;

/// Result type for view operations
pub type ViewResult<T> = Result<T, ViewError>;

/// View profile errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    #[error("Unknown view: {0}")]
    UnknownView(String),

    #[error("View profile has an empty name")]
    EmptyName,

    #[error("View '{view}' declares field '{field}' twice")]
    DuplicateField { view: String, field: String },

    /// A search, date or id designation names an undeclared field
    #[error("View '{view}' uses undeclared {role} field '{field}'")]
    UndefinedField {
        view: String,
        field: String,
        role: &'static str,
    },

    #[error("View '{view}' date field '{field}' is not of kind date")]
    DateFieldNotDate { view: String, field: String },
}

impl ViewError {
    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            ViewError::UnknownView(_) => "SERVIJOY_UNKNOWN_VIEW",
            _ => "SERVIJOY_INVALID_VIEW",
        }
    }
}
