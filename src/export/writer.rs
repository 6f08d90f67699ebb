//! CSV and JSON writers for matched records
//!
//! Exports always receive the filtered and sorted set from
//! `ListQueryEngine::matched`, never a single page.

use std::io::Write;

use serde::Serialize;

use super::errors::{ExportError, ExportResult};
use crate::record::FieldAccessors;

/// Writes a header row then one row per record.
///
/// Every column must have an accessor; missing values become empty cells.
pub fn write_csv<W, R, S>(
    writer: W,
    records: &[&R],
    columns: &[S],
    accessors: &FieldAccessors<R>,
) -> ExportResult<()>
where
    W: Write,
    S: AsRef<str>,
{
    if columns.is_empty() {
        return Err(ExportError::NoColumns);
    }
    if let Some(unknown) = columns.iter().find(|c| !accessors.has_field(c.as_ref())) {
        return Err(ExportError::UnknownColumn(unknown.as_ref().to_string()));
    }

    let header: Vec<&str> = columns.iter().map(|c| c.as_ref()).collect();

    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(&header)?;

    for record in records {
        let row = columns
            .iter()
            .map(|column| accessors.value(record, column.as_ref()).render());
        csv_writer.write_record(row)?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// CSV export as a string
pub fn to_csv<R, S: AsRef<str>>(
    records: &[&R],
    columns: &[S],
    accessors: &FieldAccessors<R>,
) -> ExportResult<String> {
    let mut buffer = Vec::new();
    write_csv(&mut buffer, records, columns, accessors)?;
    Ok(String::from_utf8(buffer)?)
}

/// Writes records as a pretty-printed JSON array
pub fn write_json<W: Write, R: Serialize>(writer: W, records: &[&R]) -> ExportResult<()> {
    serde_json::to_writer_pretty(writer, records)?;
    Ok(())
}

/// JSON export as a string
pub fn to_json<R: Serialize>(records: &[&R]) -> ExportResult<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::FieldValue;
    use serde_json::{json, Value};

    fn accessors() -> FieldAccessors<Value> {
        FieldAccessors::new()
            .field("id", |v: &Value| v["id"].as_f64().into())
            .field("name", |v: &Value| v["name"].as_str().map(FieldValue::text).into())
            .field("joined", |v: &Value| {
                v["joined"]
                    .as_str()
                    .map(FieldValue::date_from_str)
                    .unwrap_or(FieldValue::Missing)
            })
    }

    #[test]
    fn test_csv_header_and_rows() {
        let rows = [
            json!({"id": 1, "name": "Ngozi, Ltd", "joined": "2024-01-02"}),
            json!({"id": 2}),
        ];
        let records: Vec<&Value> = rows.iter().collect();

        let csv = to_csv(&records, &["id", "name", "joined"], &accessors()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "id,name,joined");
        assert_eq!(lines[1], "1,\"Ngozi, Ltd\",2024-01-02 00:00:00");
        assert_eq!(lines[2], "2,,");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_csv_unknown_column() {
        let records: Vec<&Value> = Vec::new();
        let err = to_csv(&records, &["city"], &accessors()).unwrap_err();
        assert!(matches!(err, ExportError::UnknownColumn(ref c) if c == "city"));
        assert_eq!(err.code(), "SERVIJOY_EXPORT_UNKNOWN_COLUMN");
    }

    #[test]
    fn test_csv_requires_columns() {
        let records: Vec<&Value> = Vec::new();
        let columns: [&str; 0] = [];
        assert!(matches!(
            to_csv(&records, &columns, &accessors()),
            Err(ExportError::NoColumns)
        ));
    }

    #[test]
    fn test_json_export() {
        let rows = [json!({"id": 1}), json!({"id": 2})];
        let records: Vec<&Value> = rows.iter().collect();

        let out = to_json(&records).unwrap();
        let parsed: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, json!([{"id": 1}, {"id": 2}]));
    }
}
