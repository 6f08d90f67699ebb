//! Built-in profiles for the admin dashboard tables

use super::profile::{FieldDef, ViewProfile};

pub const USERS_VENDORS: &str = "users_vendors";
pub const ACTIVITY_LOGS: &str = "activity_logs";

/// Users and vendors table: searchable by name and email, bounded by
/// join date, filterable by role and status.
pub fn users_vendors() -> ViewProfile {
    ViewProfile {
        name: USERS_VENDORS.to_string(),
        id_field: "id".to_string(),
        fields: vec![
            FieldDef::number("id"),
            FieldDef::text("name"),
            FieldDef::text("email"),
            FieldDef::text("role"),
            FieldDef::text("status"),
            FieldDef::date("joined"),
            FieldDef::number("bookings"),
        ],
        search_fields: vec!["name".to_string(), "email".to_string()],
        date_field: Some("joined".to_string()),
    }
}

/// Activity log section: searchable by user and action, bounded by
/// timestamp, filterable by type.
pub fn activity_logs() -> ViewProfile {
    ViewProfile {
        name: ACTIVITY_LOGS.to_string(),
        id_field: "id".to_string(),
        fields: vec![
            FieldDef::number("id"),
            FieldDef::text("user"),
            FieldDef::text("action"),
            FieldDef::text("type"),
            FieldDef::date("timestamp"),
        ],
        search_fields: vec!["user".to_string(), "action".to_string()],
        date_field: Some("timestamp".to_string()),
    }
}

/// All built-in profiles
pub fn builtin_profiles() -> Vec<ViewProfile> {
    vec![users_vendors(), activity_logs()]
}
