//! JSON I/O handling for the CLI
//!
//! - Input: one JSON document on stdin, or one JSON object per line for
//!   `watch`
//! - Output: one JSON object per line on stdout
//! - UTF-8 only

use std::io::{self, BufRead, Read, Write};

use serde_json::Value;

use super::errors::{CliError, CliResult};

/// Read a single JSON request from all of stdin
pub fn read_request() -> CliResult<Value> {
    read_document(io::stdin().lock())
}

/// Read one JSON document spanning the whole input. Pretty-printed input
/// is accepted.
pub fn read_document<R: Read>(mut input: R) -> CliResult<Value> {
    let mut content = String::new();
    input.read_to_string(&mut content)?;

    if content.trim().is_empty() {
        return Err(CliError::io_error("Empty input"));
    }

    let value: Value = serde_json::from_str(&content)?;
    Ok(value)
}

/// Line-delimited JSON requests until the input closes. Blank lines are
/// skipped.
pub fn read_requests_from<B: BufRead>(input: B) -> impl Iterator<Item = CliResult<Value>> {
    input
        .lines()
        .filter(|line| !matches!(line, Ok(l) if l.trim().is_empty()))
        .map(|line| {
            let line = line.map_err(CliError::from)?;
            serde_json::from_str(&line).map_err(CliError::from)
        })
}

/// Write a success response to stdout
pub fn write_response(data: Value) -> CliResult<()> {
    write_response_to(&mut io::stdout().lock(), data)
}

/// Write a success response line
pub fn write_response_to<W: Write>(out: &mut W, data: Value) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "ok",
        "data": data
    });
    write_line(out, &response)
}

/// Write an error response to stdout
pub fn write_error(code: &str, message: &str) -> CliResult<()> {
    write_error_to(&mut io::stdout().lock(), code, message)
}

/// Write an error response line
pub fn write_error_to<W: Write>(out: &mut W, code: &str, message: &str) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "error",
        "code": code,
        "message": message
    });
    write_line(out, &response)
}

fn write_line<W: Write>(out: &mut W, response: &Value) -> CliResult<()> {
    serde_json::to_writer(&mut *out, response)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
