//! Accessors over JSON records
//!
//! Records fetched from the backend arrive as JSON objects. Each logical
//! field is declared with a key path and a kind; the accessor converts the
//! raw JSON into a `FieldValue` of that kind.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::accessor::Accessor;
use super::value::FieldValue;

/// Declared kind of a JSON field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Free text or enum-like string
    #[default]
    Text,
    /// Integer or decimal
    Number,
    /// Date or timestamp string
    Date,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Number => "number",
            FieldKind::Date => "date",
        }
    }

    /// Converts a raw JSON value into a field value of this kind
    pub fn convert(&self, raw: Option<&Value>) -> FieldValue {
        let raw = match raw {
            Some(Value::Null) | None => return FieldValue::Missing,
            Some(v) => v,
        };

        match self {
            FieldKind::Text => match raw {
                Value::String(s) => FieldValue::text(s.as_str()),
                Value::Number(n) => FieldValue::text(n.to_string()),
                Value::Bool(b) => FieldValue::text(b.to_string()),
                _ => FieldValue::Missing,
            },
            FieldKind::Number => match raw {
                Value::Number(n) => n.as_f64().into(),
                Value::String(s) => s.trim().parse::<f64>().ok().into(),
                _ => FieldValue::Missing,
            },
            FieldKind::Date => match raw {
                Value::String(s) => FieldValue::date_from_str(s),
                _ => FieldValue::Missing,
            },
        }
    }
}

/// Looks up a dotted key path (`"address.city"`) inside a JSON value
pub fn lookup_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(value, |current, segment| current.get(segment))
}

/// Builds an accessor reading `path` as `kind`
pub fn json_accessor(path: impl Into<String>, kind: FieldKind) -> Accessor<Value> {
    let path = path.into();
    Box::new(move |record: &Value| kind.convert(lookup_path(record, &path)))
}
