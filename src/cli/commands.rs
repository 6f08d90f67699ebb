//! CLI command implementations
//!
//! Each command loads config and records, runs the engine and writes JSON
//! to stdout. Logs go to stderr.

use std::fs;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

use serde_json::Value;

use crate::debounce::debounce;
use crate::engine::ListQueryEngine;
use crate::export::{write_csv, write_json, ExportFormat};
use crate::observability::{self, Logger, ObservationScope};
use crate::query::QuerySpec;
use crate::record::FieldAccessors;
use crate::views::ViewRegistry;

use super::args::Command;
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::{
    read_request, read_requests_from, write_error_to, write_response,
    write_response_to,
};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Query {
            records,
            view,
            spec,
            config,
        } => query(&records, &view, spec.as_deref(), config.as_deref()),
        Command::Export {
            records,
            view,
            spec,
            format,
            columns,
            config,
        } => export(
            &records,
            &view,
            spec.as_deref(),
            format,
            &columns,
            config.as_deref(),
        ),
        Command::Watch {
            records,
            view,
            config,
        } => watch(&records, &view, config.as_deref()),
        Command::Views { config } => views(config.as_deref()),
    }
}

/// Run one query and print its page
pub fn query(
    records_path: &Path,
    view: &str,
    spec_path: Option<&Path>,
    config_path: Option<&Path>,
) -> CliResult<()> {
    let (config, registry) = open(config_path)?;
    let profile = registry.get(view)?;
    let records = load_records(records_path)?;
    let spec = load_spec(spec_path, &config)?;

    let scope = ObservationScope::with_fields("QUERY", &[("view", view)]);
    let accessors = profile.accessors();
    let engine = ListQueryEngine::new(&accessors);
    let page = engine.run_query(&records, &spec);

    let matched = page.total_matched.to_string();
    let page_index = page.page_index.to_string();
    scope.complete_with_fields(&[("matched", matched.as_str()), ("page", page_index.as_str())]);

    write_response(serde_json::to_value(&page)?)
}

/// Write every matching record in the requested format
pub fn export(
    records_path: &Path,
    view: &str,
    spec_path: Option<&Path>,
    format: ExportFormat,
    columns: &[String],
    config_path: Option<&Path>,
) -> CliResult<()> {
    let (config, registry) = open(config_path)?;
    let profile = registry.get(view)?;
    let records = load_records(records_path)?;
    let spec = load_spec(spec_path, &config)?;

    let scope = ObservationScope::with_fields(
        "EXPORT",
        &[("format", format.as_str()), ("view", view)],
    );
    let accessors = profile.accessors();
    let engine = ListQueryEngine::new(&accessors);
    let matched = engine.matched(&records, &spec);

    let mut stdout = io::stdout().lock();
    let written = match format {
        ExportFormat::Csv => {
            let columns = export_columns(columns, &accessors);
            write_csv(&mut stdout, &matched, &columns, &accessors)
        }
        ExportFormat::Json => write_json(&mut stdout, &matched),
    };

    if let Err(e) = written {
        scope.fail(&e.to_string());
        return Err(e.into());
    }
    if format == ExportFormat::Json {
        writeln!(stdout)?;
    }
    stdout.flush()?;

    let rows = matched.len().to_string();
    scope.complete_with_fields(&[("rows", rows.as_str())]);
    Ok(())
}

/// Re-run the query each time stdin goes quiet for the debounce window
pub fn watch(records_path: &Path, view: &str, config_path: Option<&Path>) -> CliResult<()> {
    let (config, registry) = open(config_path)?;
    let profile = registry.get(view)?;
    let records = load_records(records_path)?;
    let accessors = profile.accessors();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    let scope = ObservationScope::with_fields("WATCH", &[("view", view)]);
    let input = BufReader::new(io::stdin());
    let out = Arc::new(Mutex::new(io::stdout()));
    match runtime.block_on(watch_loop(input, out, &records, &accessors, &config)) {
        Ok(runs) => {
            let runs = runs.to_string();
            scope.complete_with_fields(&[("runs", runs.as_str())]);
            Ok(())
        }
        Err(e) => {
            scope.fail(e.message());
            Err(e)
        }
    }
}

/// Feeds line-delimited specs through the debouncer and writes one page
/// per settled spec.
///
/// Lines that are not JSON are answered with an error line as soon as they
/// are read, so they are never lost to coalescing. Returns the number of
/// pages written.
pub async fn watch_loop<I, W>(
    input: I,
    out: Arc<Mutex<W>>,
    records: &[Value],
    accessors: &FieldAccessors<Value>,
    config: &Config,
) -> CliResult<usize>
where
    I: BufRead + Send + 'static,
    W: Write + Send + 'static,
{
    let (tx, mut debouncer) = debounce::<Value>(config.debounce_window());

    let reader_out = Arc::clone(&out);
    let reader = tokio::task::spawn_blocking(move || {
        for request in read_requests_from(input) {
            match request {
                Ok(raw) => {
                    if !tx.send(raw) {
                        break;
                    }
                }
                Err(e) => {
                    Logger::warn("WATCH_INPUT_SKIPPED", &[("reason", e.message())]);
                    if let Ok(mut out) = reader_out.lock() {
                        let _ = write_error_to(&mut *out, e.code_str(), e.message());
                    }
                }
            }
        }
    });

    let engine = ListQueryEngine::new(accessors);
    let mut runs = 0;

    while let Some(raw) = debouncer.next_settled().await {
        let mut out = out
            .lock()
            .map_err(|_| CliError::io_error("output lock poisoned"))?;

        match parse_spec(raw, config) {
            Ok(spec) => {
                let page = engine.run_query(records, &spec);
                let matched = page.total_matched.to_string();
                Logger::debug("WATCH_QUERY_RUN", &[("matched", matched.as_str())]);
                write_response_to(&mut *out, serde_json::to_value(&page)?)?;
                runs += 1;
            }
            Err(e) => write_error_to(&mut *out, e.code_str(), e.message())?,
        }
    }

    reader
        .await
        .map_err(|e| CliError::io_error(format!("stdin reader failed: {}", e)))?;

    Ok(runs)
}

/// Print the available view profiles
pub fn views(config_path: Option<&Path>) -> CliResult<()> {
    let (_, registry) = open(config_path)?;
    let profiles: Vec<_> = registry.profiles().collect();
    write_response(serde_json::to_value(profiles)?)
}

/// Loads config, applies its log level and builds the view registry
fn open(config_path: Option<&Path>) -> CliResult<(Config, ViewRegistry)> {
    let config = Config::load_or_default(config_path)?;
    observability::init(config.severity());
    let registry = config.registry()?;
    Ok((config, registry))
}

/// Reads a JSON array of records
pub fn load_records(path: &Path) -> CliResult<Vec<Value>> {
    let content = fs::read_to_string(path).map_err(|e| {
        CliError::io_error(format!("Failed to read records {}: {}", path.display(), e))
    })?;

    let records = match serde_json::from_str::<Value>(&content)? {
        Value::Array(items) => items,
        other => {
            return Err(CliError::invalid_records(format!(
                "expected a JSON array of records, got {}",
                json_kind(&other)
            )))
        }
    };

    let count = records.len().to_string();
    let shown = path.display().to_string();
    Logger::debug(
        "RECORDS_LOADED",
        &[("count", count.as_str()), ("path", shown.as_str())],
    );

    Ok(records)
}

fn load_spec(spec_path: Option<&Path>, config: &Config) -> CliResult<QuerySpec> {
    let raw = match spec_path {
        Some(path) => serde_json::from_str::<Value>(&fs::read_to_string(path)?)?,
        None => read_request()?,
    };
    parse_spec(raw, config)
}

/// Validates a raw spec; a spec without `page` gets the configured size
pub fn parse_spec(raw: Value, config: &Config) -> CliResult<QuerySpec> {
    let has_page = raw.get("page").is_some();
    let spec = QuerySpec::from_value(raw)?;

    if has_page {
        Ok(spec)
    } else {
        Ok(spec.with_page_size(config.default_page_size))
    }
}

/// Requested columns, or every field of the view
fn export_columns(requested: &[String], accessors: &FieldAccessors<Value>) -> Vec<String> {
    if requested.is_empty() {
        accessors.field_names().map(str::to_string).collect()
    } else {
        requested.to_vec()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
