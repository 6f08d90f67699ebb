//! View profiles
//!
//! A view profile is the field catalogue of one admin table: which JSON
//! keys it reads, as what kind, which fields the search box covers and
//! which field the date pickers bound.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::{ViewError, ViewResult};
use crate::record::{json_accessor, lookup_path, FieldAccessors, FieldKind};

fn default_id_field() -> String {
    "id".to_string()
}

/// One logical field of a view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Logical name used by filters, sorts and exports
    pub name: String,
    /// Dotted JSON key path; defaults to `name`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default)]
    pub kind: FieldKind,
}

impl FieldDef {
    fn new(name: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            path: None,
            kind,
        }
    }

    pub fn text(name: &str) -> Self {
        Self::new(name, FieldKind::Text)
    }

    pub fn number(name: &str) -> Self {
        Self::new(name, FieldKind::Number)
    }

    pub fn date(name: &str) -> Self {
        Self::new(name, FieldKind::Date)
    }

    /// Reads the field from a different JSON key path
    pub fn at(mut self, path: &str) -> Self {
        self.path = Some(path.to_string());
        self
    }

    /// Effective JSON key path
    pub fn path(&self) -> &str {
        self.path.as_deref().unwrap_or(&self.name)
    }
}

/// Field catalogue of one table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewProfile {
    pub name: String,
    /// Field holding the stable record identifier
    #[serde(default = "default_id_field")]
    pub id_field: String,
    pub fields: Vec<FieldDef>,
    #[serde(default)]
    pub search_fields: Vec<String>,
    #[serde(default)]
    pub date_field: Option<String>,
}

impl ViewProfile {
    /// Checks that every designation refers to a declared field
    pub fn validate(&self) -> ViewResult<()> {
        if self.name.trim().is_empty() {
            return Err(ViewError::EmptyName);
        }

        let mut seen = HashSet::new();
        for field in &self.fields {
            if !seen.insert(field.name.as_str()) {
                return Err(ViewError::DuplicateField {
                    view: self.name.clone(),
                    field: field.name.clone(),
                });
            }
        }

        self.require_field(&self.id_field, "id")?;
        for field in &self.search_fields {
            self.require_field(field, "search")?;
        }

        if let Some(date_field) = &self.date_field {
            let def = self.require_field(date_field, "date")?;
            if def.kind != FieldKind::Date {
                return Err(ViewError::DateFieldNotDate {
                    view: self.name.clone(),
                    field: date_field.clone(),
                });
            }
        }

        Ok(())
    }

    /// Looks up a field definition by logical name
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Declared field names in order
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    /// Builds accessors over JSON records for this view
    pub fn accessors(&self) -> FieldAccessors<Value> {
        let mut accessors = FieldAccessors::new().searchable(self.search_fields.iter().cloned());
        if let Some(date_field) = &self.date_field {
            accessors = accessors.date_field(date_field.clone());
        }
        for field in &self.fields {
            accessors.insert(field.name.clone(), json_accessor(field.path(), field.kind));
        }
        accessors
    }

    /// Stable identifier of a record, as text
    pub fn record_id(&self, record: &Value) -> Option<String> {
        let path = self
            .field(&self.id_field)
            .map(FieldDef::path)
            .unwrap_or(&self.id_field);

        match lookup_path(record, path)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    fn require_field(&self, name: &str, role: &'static str) -> ViewResult<&FieldDef> {
        self.field(name).ok_or_else(|| ViewError::UndefinedField {
            view: self.name.clone(),
            field: name.to_string(),
            role,
        })
    }
}
