//! Query value types: search, filters, date range, sort and page
//!
//! A `QuerySpec` is an immutable snapshot of a table's view parameters.
//! Every change produces a new value; narrowing changes (search, filters,
//! date range, sort) return to the first page so a narrowed result never
//! lands on an empty page.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::{QueryError, QueryResult};
use crate::record::{parse_date_time, Collation};

/// Filter value that matches every record
pub const ALL: &str = "All";

/// Page size used when none is given
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    /// The opposite direction
    pub fn reversed(&self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Sort key, direction and string collation
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortSpec {
    /// Field to sort by; `None` keeps input order
    #[serde(default)]
    pub key: Option<String>,
    /// Only meaningful when `key` is set
    #[serde(default)]
    pub direction: SortDirection,
    /// Comparison policy for text fields. Defaults to case-insensitive,
    /// unlike a raw string comparison; send `"collation": "case_sensitive"`
    /// for code point order.
    #[serde(default)]
    pub collation: Collation,
}

impl SortSpec {
    /// No sorting
    pub fn none() -> Self {
        Self::default()
    }

    /// Ascending sort on a field
    pub fn asc(key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            direction: SortDirection::Asc,
            collation: Collation::default(),
        }
    }

    /// Descending sort on a field
    pub fn desc(key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            direction: SortDirection::Desc,
            collation: Collation::default(),
        }
    }

    pub fn with_collation(mut self, collation: Collation) -> Self {
        self.collation = collation;
        self
    }

    /// Returns true if a sort key is set
    pub fn is_active(&self) -> bool {
        self.key.is_some()
    }
}

/// One-based page index and page size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Requested page, clamped by the engine into `[1, total_pages]`
    #[serde(default = "default_page_index")]
    pub index: i64,
    /// Records per page
    #[serde(default = "default_page_size")]
    pub size: usize,
}

fn default_page_index() -> i64 {
    1
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl PageRequest {
    /// Creates a page request. A zero size is raised to 1.
    pub fn new(index: i64, size: usize) -> Self {
        Self {
            index,
            size: size.max(1),
        }
    }

    /// First page at the given size
    pub fn first(size: usize) -> Self {
        Self::new(1, size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first(DEFAULT_PAGE_SIZE)
    }
}

/// Inclusive calendar-day bounds on the designated date field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(default)]
    pub from: Option<NaiveDate>,
    #[serde(default)]
    pub to: Option<NaiveDate>,
}

impl DateRange {
    /// Both bounds set
    pub fn between(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
        }
    }

    /// Lower bound only
    pub fn since(from: NaiveDate) -> Self {
        Self {
            from: Some(from),
            to: None,
        }
    }

    /// Upper bound only
    pub fn until(to: NaiveDate) -> Self {
        Self {
            from: None,
            to: Some(to),
        }
    }

    /// Builds a range from the raw text of two date inputs.
    ///
    /// Empty strings leave the bound unset.
    pub fn parse(from: Option<&str>, to: Option<&str>) -> QueryResult<Self> {
        let range = Self {
            from: parse_bound(from)?,
            to: parse_bound(to)?,
        };
        range.validate()?;
        Ok(range)
    }

    /// Returns true if either bound is set
    pub fn is_active(&self) -> bool {
        self.from.is_some() || self.to.is_some()
    }

    /// Inclusive containment check
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.from.map_or(true, |from| day >= from) && self.to.map_or(true, |to| day <= to)
    }

    /// Rejects ranges whose lower bound is after the upper bound
    pub fn validate(&self) -> QueryResult<()> {
        if let (Some(from), Some(to)) = (self.from, self.to) {
            if from > to {
                return Err(QueryError::InvertedDateRange { from, to });
            }
        }
        Ok(())
    }
}

fn parse_bound(raw: Option<&str>) -> QueryResult<Option<NaiveDate>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => parse_date_time(text)
            .map(|dt| Some(dt.date()))
            .ok_or_else(|| QueryError::InvalidDate(text.to_string())),
    }
}

/// Exact-match filters keyed by field name
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldFilters(BTreeMap<String, String>);

impl FieldFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the value matches everything
    pub fn is_inert(value: &str) -> bool {
        value.is_empty() || value == ALL
    }

    /// Sets the expected value for a field
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.0.insert(field.into(), value.into());
    }

    /// Removes the filter on a field
    pub fn remove(&mut self, field: &str) -> Option<String> {
        self.0.remove(field)
    }

    /// Expected value for a field, inert values included
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Filters that actually constrain the result, in field order
    pub fn active(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .filter(|(_, value)| !Self::is_inert(value))
            .map(|(field, value)| (field.as_str(), value.as_str()))
    }

    /// Number of constraining filters
    pub fn active_count(&self) -> usize {
        self.active().count()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldFilters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Full set of view parameters for one table
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuerySpec {
    /// Case-insensitive substring matched against the searchable fields
    #[serde(default)]
    pub search_term: String,
    /// Exact-match filters; "All" or empty is inert
    #[serde(default)]
    pub field_filters: FieldFilters,
    /// Inclusive bounds on the designated date field
    #[serde(default)]
    pub date_range: DateRange,
    #[serde(default)]
    pub sort: SortSpec,
    #[serde(default)]
    pub page: PageRequest,
}

impl QuerySpec {
    /// Default view parameters: first page of ten, nothing applied
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and validates a JSON query spec
    pub fn from_json(json: &str) -> QueryResult<Self> {
        let spec: QuerySpec = serde_json::from_str(json)?;
        spec.validate()?;
        Ok(spec)
    }

    /// Parses and validates an already decoded JSON value
    pub fn from_value(value: Value) -> QueryResult<Self> {
        let spec: QuerySpec = serde_json::from_value(value)?;
        spec.validate()?;
        Ok(spec)
    }

    /// Checks the invariants the engine relies on
    pub fn validate(&self) -> QueryResult<()> {
        if self.page.size == 0 {
            return Err(QueryError::InvalidPageSize(self.page.size));
        }
        self.date_range.validate()
    }

    /// Replaces the search term and returns to page 1
    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self.reset_page()
    }

    /// Sets a field filter and returns to page 1
    pub fn with_filter(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.field_filters.set(field, value);
        self.reset_page()
    }

    /// Drops a field filter and returns to page 1
    pub fn clear_filter(mut self, field: &str) -> Self {
        self.field_filters.remove(field);
        self.reset_page()
    }

    /// Replaces the date range and returns to page 1
    pub fn with_date_range(mut self, range: DateRange) -> Self {
        self.date_range = range;
        self.reset_page()
    }

    /// Replaces the sort and returns to page 1
    pub fn with_sort(mut self, sort: SortSpec) -> Self {
        self.sort = sort;
        self.reset_page()
    }

    /// Column-header click: same key flips direction, a new key sorts
    /// ascending. Returns to page 1.
    pub fn toggle_sort(mut self, key: &str) -> Self {
        let direction = match self.sort.key.as_deref() {
            Some(current) if current == key => self.sort.direction.reversed(),
            _ => SortDirection::Asc,
        };
        self.sort.key = Some(key.to_string());
        self.sort.direction = direction;
        self.reset_page()
    }

    /// Moves to another page, keeping everything else
    pub fn with_page(mut self, index: i64) -> Self {
        self.page.index = index;
        self
    }

    /// Changes the page size and returns to page 1
    pub fn with_page_size(mut self, size: usize) -> Self {
        self.page = PageRequest::first(size);
        self
    }

    fn reset_page(mut self) -> Self {
        self.page.index = 1;
        self
    }
}
