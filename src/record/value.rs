//! Typed field values extracted from records
//!
//! Every accessor yields a `FieldValue`. Comparison over `FieldValue` is
//! total so sorting never has to give up on a pair of records.

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Accepted textual date layouts, tried in order after RFC 3339.
const DATE_TIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// String comparison policy for sorting text fields.
///
/// The default folds case, which differs from a plain `str` comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collation {
    /// "ann" and "Bob" order alphabetically regardless of case
    #[default]
    CaseInsensitive,
    /// Raw code point order, uppercase before lowercase
    CaseSensitive,
}

/// A comparable value read from a record
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Field absent, null, or unparsable for its declared kind
    Missing,
    /// Numeric value
    Number(f64),
    /// Date or timestamp
    Date(NaiveDateTime),
    /// Free text or enum-like string
    Text(String),
}

impl FieldValue {
    /// Create a text value
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    /// Create a date value from a textual representation.
    ///
    /// Unparsable input becomes `Missing`.
    pub fn date_from_str(value: &str) -> Self {
        match parse_date_time(value) {
            Some(dt) => FieldValue::Date(dt),
            None => FieldValue::Missing,
        }
    }

    /// Returns true if this is the neutral missing value
    pub fn is_missing(&self) -> bool {
        matches!(self, FieldValue::Missing)
    }

    /// Returns the calendar day of a date value
    pub fn calendar_day(&self) -> Option<NaiveDate> {
        match self {
            FieldValue::Date(dt) => Some(dt.date()),
            _ => None,
        }
    }

    /// Lower-cased text used for free-text search.
    ///
    /// Returns `None` for missing values.
    pub fn search_text(&self) -> Option<String> {
        match self {
            FieldValue::Missing => None,
            FieldValue::Number(n) => Some(format_number(*n)),
            FieldValue::Date(dt) => Some(dt.format("%Y-%m-%d").to_string()),
            FieldValue::Text(s) => Some(s.to_lowercase()),
        }
    }

    /// Exact match against a filter literal.
    ///
    /// Text is compared case-sensitively, numbers numerically, dates by
    /// calendar day. A literal that does not parse as the value's kind
    /// never matches, and neither does a missing value.
    pub fn matches_literal(&self, literal: &str) -> bool {
        match self {
            FieldValue::Missing => false,
            FieldValue::Text(s) => s == literal,
            FieldValue::Number(n) => literal
                .trim()
                .parse::<f64>()
                .map(|expected| expected == *n)
                .unwrap_or(false),
            FieldValue::Date(dt) => parse_date_time(literal)
                .map(|expected| expected.date() == dt.date())
                .unwrap_or(false),
        }
    }

    /// Applies a collation so that plain comparison honours it
    pub fn collated(self, collation: Collation) -> Self {
        match (self, collation) {
            (FieldValue::Text(s), Collation::CaseInsensitive) => FieldValue::Text(s.to_lowercase()),
            (other, _) => other,
        }
    }

    /// Total ordering across kinds.
    ///
    /// Ordering rules:
    /// - Missing < Number < Date < Text
    /// - For same kinds, natural ordering
    pub fn total_cmp(&self, other: &FieldValue) -> Ordering {
        let rank_order = self.kind_rank().cmp(&other.kind_rank());
        if rank_order != Ordering::Equal {
            return rank_order;
        }

        match (self, other) {
            (FieldValue::Number(a), FieldValue::Number(b)) => a.total_cmp(b),
            (FieldValue::Date(a), FieldValue::Date(b)) => a.cmp(b),
            (FieldValue::Text(a), FieldValue::Text(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }

    /// Display form used by exports
    pub fn render(&self) -> String {
        match self {
            FieldValue::Missing => String::new(),
            FieldValue::Number(n) => format_number(*n),
            FieldValue::Date(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
            FieldValue::Text(s) => s.clone(),
        }
    }

    fn kind_rank(&self) -> u8 {
        match self {
            FieldValue::Missing => 0,
            FieldValue::Number(_) => 1,
            FieldValue::Date(_) => 2,
            FieldValue::Text(_) => 3,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value as f64)
    }
}

impl From<NaiveDateTime> for FieldValue {
    fn from(value: NaiveDateTime) -> Self {
        FieldValue::Date(value)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(value: NaiveDate) -> Self {
        FieldValue::Date(value.and_time(chrono::NaiveTime::MIN))
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(FieldValue::Missing)
    }
}

/// Parses a date or timestamp in any of the accepted layouts.
///
/// Offsets in RFC 3339 input are normalised to UTC.
pub fn parse_date_time(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }

    for format in DATE_TIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .map(|d| d.and_time(chrono::NaiveTime::MIN))
}

/// Integral values print without a fractional part
fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}
