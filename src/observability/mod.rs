//! Observability for the servijoy binary
//!
//! - Structured logging (JSON lines on stderr)
//! - Begin/complete scopes around commands
//!
//! The engine never logs; only the surrounding commands do.
//!
//! ```ignore
//! use servijoy::observability::{Logger, ObservationScope};
//!
//! Logger::info("RECORDS_LOADED", &[("count", "120")]);
//!
//! let scope = ObservationScope::new("EXPORT");
//! // ... do work ...
//! scope.complete();
//! ```

mod logger;
mod scope;

pub use logger::{Logger, Severity};
pub use scope::ObservationScope;

/// Environment variable overriding the configured log level
pub const LOG_ENV: &str = "SERVIJOY_LOG";

/// Sets the minimum severity from `SERVIJOY_LOG`, falling back to the
/// configured level. An unparsable environment value is reported and
/// ignored.
pub fn init(configured: Severity) {
    let severity = match std::env::var(LOG_ENV) {
        Ok(raw) => match raw.parse::<Severity>() {
            Ok(severity) => severity,
            Err(reason) => {
                Logger::set_min_severity(configured);
                Logger::warn("LOG_LEVEL_IGNORED", &[("reason", reason.as_str())]);
                return;
            }
        },
        Err(_) => configured,
    };
    Logger::set_min_severity(severity);
}
