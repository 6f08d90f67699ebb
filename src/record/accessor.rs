//! Field accessors
//!
//! Decouples the query engine from concrete record shapes. Callers register
//! one pure function per logical field and designate which fields take part
//! in free-text search and which one carries the record date.

use std::collections::HashMap;
use std::fmt;

use super::value::FieldValue;

/// A pure function extracting one logical field from a record
pub type Accessor<R> = Box<dyn Fn(&R) -> FieldValue + Send + Sync>;

/// Mapping from logical field name to accessor
pub struct FieldAccessors<R> {
    /// Accessors in registration order
    accessors: Vec<(String, Accessor<R>)>,
    /// Field name to position in `accessors`
    positions: HashMap<String, usize>,
    /// Fields matched by the search term
    search_fields: Vec<String>,
    /// Field the date range applies to
    date_field: Option<String>,
}

impl<R> FieldAccessors<R> {
    /// Creates an empty accessor set
    pub fn new() -> Self {
        Self {
            accessors: Vec::new(),
            positions: HashMap::new(),
            search_fields: Vec::new(),
            date_field: None,
        }
    }

    /// Registers an accessor. Registering the same name twice replaces the
    /// earlier accessor but keeps its position.
    pub fn field<F>(mut self, name: impl Into<String>, accessor: F) -> Self
    where
        F: Fn(&R) -> FieldValue + Send + Sync + 'static,
    {
        self.insert(name, Box::new(accessor));
        self
    }

    /// Registers a boxed accessor in place
    pub fn insert(&mut self, name: impl Into<String>, accessor: Accessor<R>) {
        let name = name.into();
        match self.positions.get(&name) {
            Some(&pos) => self.accessors[pos].1 = accessor,
            None => {
                self.positions.insert(name.clone(), self.accessors.len());
                self.accessors.push((name, accessor));
            }
        }
    }

    /// Designates the fields matched by the search term
    pub fn searchable<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.search_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Designates the field the date range applies to
    pub fn date_field(mut self, name: impl Into<String>) -> Self {
        self.date_field = Some(name.into());
        self
    }

    /// Reads a field from a record.
    ///
    /// An unregistered field reads as `Missing`.
    pub fn value(&self, record: &R, field: &str) -> FieldValue {
        match self.positions.get(field) {
            Some(&pos) => (self.accessors[pos].1)(record),
            None => FieldValue::Missing,
        }
    }

    /// Returns true if an accessor is registered for the field
    pub fn has_field(&self, field: &str) -> bool {
        self.positions.contains_key(field)
    }

    /// Registered field names in registration order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.accessors.iter().map(|(name, _)| name.as_str())
    }

    /// Fields matched by the search term
    pub fn search_fields(&self) -> &[String] {
        &self.search_fields
    }

    /// Field the date range applies to
    pub fn date_field_name(&self) -> Option<&str> {
        self.date_field.as_deref()
    }

    /// Number of registered fields
    pub fn len(&self) -> usize {
        self.accessors.len()
    }

    /// Returns true if no field is registered
    pub fn is_empty(&self) -> bool {
        self.accessors.is_empty()
    }
}

impl<R> Default for FieldAccessors<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> fmt::Debug for FieldAccessors<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldAccessors")
            .field("fields", &self.field_names().collect::<Vec<_>>())
            .field("search_fields", &self.search_fields)
            .field("date_field", &self.date_field)
            .finish()
    }
}
