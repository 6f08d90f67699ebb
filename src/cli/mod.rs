//! CLI module for servijoy
//!
//! Provides command-line interface for:
//! - query: one page of a query over a records file
//! - export: every matching record as CSV or JSON
//! - watch: debounced re-querying driven by stdin
//! - views: list view profiles

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{
    export, load_records, parse_spec, query, run, run_command, views, watch, watch_loop,
};
pub use config::{Config, DEFAULT_CONFIG_PATH};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{
    read_document, read_request, read_requests_from, write_error, write_error_to, write_response,
    write_response_to,
};
