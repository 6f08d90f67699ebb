//! Configuration file for the servijoy binary
//!
//! Every key is optional:
//!
//! ```json
//! {
//!   "default_page_size": 10,
//!   "log_level": "info",
//!   "debounce_ms": 300,
//!   "views": []
//! }
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::errors::{CliError, CliResult};
use crate::debounce::DEFAULT_WINDOW;
use crate::observability::Severity;
use crate::query::DEFAULT_PAGE_SIZE;
use crate::views::{ViewProfile, ViewRegistry};

/// Config file read when no `--config` is given, if present
pub const DEFAULT_CONFIG_PATH: &str = "./servijoy.json";

/// Longest accepted debounce window
const MAX_DEBOUNCE_MS: u64 = 10_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Page size for query specs that do not carry a `page`
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,

    /// Minimum log severity (`trace` through `error`)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Quiet period before `watch` runs a query
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Extra view profiles; same-named built-ins are replaced
    #[serde(default)]
    pub views: Vec<ViewProfile>,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_debounce_ms() -> u64 {
    DEFAULT_WINDOW.as_millis() as u64
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            log_level: default_log_level(),
            debounce_ms: default_debounce_ms(),
            views: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Loads the given file, else `./servijoy.json` if it exists, else
    /// defaults
    pub fn load_or_default(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::load(Path::new(DEFAULT_CONFIG_PATH))
            }
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> CliResult<()> {
        if self.default_page_size == 0 {
            return Err(CliError::config_error("default_page_size must be > 0"));
        }

        if self.debounce_ms > MAX_DEBOUNCE_MS {
            return Err(CliError::config_error(format!(
                "debounce_ms must be <= {}, got {}",
                MAX_DEBOUNCE_MS, self.debounce_ms
            )));
        }

        self.log_level
            .parse::<Severity>()
            .map_err(|e| CliError::config_error(format!("Invalid log_level: {}", e)))?;

        for view in &self.views {
            view.validate()
                .map_err(|e| CliError::config_error(format!("Invalid view: {}", e)))?;
        }

        Ok(())
    }

    /// Configured log severity
    pub fn severity(&self) -> Severity {
        self.log_level.parse().unwrap_or(Severity::Info)
    }

    pub fn debounce_window(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Built-in views plus the configured ones
    pub fn registry(&self) -> CliResult<ViewRegistry> {
        let mut registry = ViewRegistry::with_builtins();
        for view in &self.views {
            registry.register(view.clone())?;
        }
        Ok(registry)
    }
}
