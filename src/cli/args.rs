//! CLI argument definitions using clap
//!
//! Commands:
//! - servijoy query --records <path> [--view <name>] [--spec <path>]
//! - servijoy export --records <path> [--view <name>] [--spec <path>] --format csv|json
//! - servijoy watch --records <path> [--view <name>]
//! - servijoy views

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::export::ExportFormat;
use crate::views::USERS_VENDORS;

/// ServiJoy admin table queries over JSON record files
#[derive(Parser, Debug)]
#[command(name = "servijoy")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run one query and print the resulting page
    Query {
        /// JSON array of records
        #[arg(long)]
        records: PathBuf,

        /// View profile the records belong to
        #[arg(long, default_value = USERS_VENDORS)]
        view: String,

        /// Query spec file; read from stdin when omitted
        #[arg(long)]
        spec: Option<PathBuf>,

        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Write every matching record, unpaginated
    Export {
        /// JSON array of records
        #[arg(long)]
        records: PathBuf,

        /// View profile the records belong to
        #[arg(long, default_value = USERS_VENDORS)]
        view: String,

        /// Query spec file; read from stdin when omitted
        #[arg(long)]
        spec: Option<PathBuf>,

        /// Output format
        #[arg(long, default_value = "csv")]
        format: ExportFormat,

        /// CSV columns; all view fields when omitted
        #[arg(long, value_delimiter = ',')]
        columns: Vec<String>,

        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Read query specs line by line from stdin and print a page for each
    /// pause in input
    Watch {
        /// JSON array of records
        #[arg(long)]
        records: PathBuf,

        /// View profile the records belong to
        #[arg(long, default_value = USERS_VENDORS)]
        view: String,

        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List the available view profiles
    Views {
        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
