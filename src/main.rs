//! servijoy CLI entry point
//!
//! Parses arguments, dispatches to the CLI module, prints a JSON error
//! object and exits non-zero on failure.

use servijoy::cli;

fn main() {
    if let Err(e) = cli::run() {
        let _ = cli::write_error(e.code_str(), e.message());
        std::process::exit(1);
    }
}
