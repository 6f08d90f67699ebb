//! Query spec validation errors
//!
//! The engine itself cannot fail. These errors are raised only when a
//! `QuerySpec` is built from untrusted input.

use chrono::NaiveDate;
use thiserror::Error;

/// Result type for query spec construction
pub type QueryResult<T> = Result<T, QueryError>;

/// Query spec errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// Page size of zero
    #[error("Page size must be positive, got {0}")]
    InvalidPageSize(usize),

    /// `from` after `to`
    #[error("Date range is inverted: from {from} is after to {to}")]
    InvertedDateRange { from: NaiveDate, to: NaiveDate },

    /// Unparsable date literal
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// JSON that does not describe a query spec
    #[error("Invalid query spec: {0}")]
    Malformed(String),
}

impl QueryError {
    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            QueryError::InvalidPageSize(_) => "SERVIJOY_INVALID_PAGE_SIZE",
            QueryError::InvertedDateRange { .. } => "SERVIJOY_INVERTED_DATE_RANGE",
            QueryError::InvalidDate(_) => "SERVIJOY_INVALID_DATE",
            QueryError::Malformed(_) => "SERVIJOY_MALFORMED_QUERY",
        }
    }
}

impl From<serde_json::Error> for QueryError {
    fn from(e: serde_json::Error) -> Self {
        QueryError::Malformed(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(QueryError::InvalidPageSize(0).code(), "SERVIJOY_INVALID_PAGE_SIZE");
        assert_eq!(
            QueryError::Malformed("x".into()).code(),
            "SERVIJOY_MALFORMED_QUERY"
        );
    }

    #[test]
    fn test_error_display() {
        let err = QueryError::InvertedDateRange {
            from: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            to: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        };
        let display = err.to_string();
        assert!(display.contains("2024-02-01"));
        assert!(display.contains("2024-01-01"));
    }
}
