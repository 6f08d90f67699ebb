//! Bulk selection and export against live query results
//!
//! Selection is keyed by record id and reconciled against whatever page
//! the engine returns. Exports always take the whole matched set.

use serde_json::{json, Value};

use servijoy::engine::ListQueryEngine;
use servijoy::export::{to_csv, to_json, ExportError};
use servijoy::query::{QuerySpec, SortSpec};
use servijoy::selection::{Selection, SelectionPolicy};
use servijoy::views::{users_vendors, ViewProfile};

// =============================================================================
// Helpers
// =============================================================================

fn vendors() -> Vec<Value> {
    (1..=7)
        .map(|id| {
            json!({
                "id": id,
                "name": format!("Vendor {}", id),
                "email": format!("v{}@servijoy.io", id),
                "role": "Vendor",
                "status": if id % 2 == 0 { "Suspended" } else { "Active" },
                "joined": format!("2024-02-{:02}", id),
                "bookings": id * 3,
            })
        })
        .collect()
}

fn page_ids(profile: &ViewProfile, items: &[&Value]) -> Vec<String> {
    items.iter().filter_map(|r| profile.record_id(r)).collect()
}

// =============================================================================
// Selection
// =============================================================================

#[test]
fn test_persistent_selection_survives_filter() {
    let profile = users_vendors();
    let accessors = profile.accessors();
    let engine = ListQueryEngine::new(&accessors);
    let records = vendors();

    let spec = QuerySpec::new().with_page_size(3);
    let page = engine.run_query(&records, &spec);
    let visible = page_ids(&profile, &page.items);
    assert_eq!(visible, vec!["1", "2", "3"]);

    let mut selection = Selection::new(SelectionPolicy::Persistent);
    assert!(selection.toggle_page(&visible));
    assert!(selection.is_page_fully_selected(&visible));

    let narrowed = spec.with_filter("status", "Active");
    let page = engine.run_query(&records, &narrowed);
    let visible = page_ids(&profile, &page.items);
    assert_eq!(visible, vec!["1", "3", "5"]);

    assert_eq!(selection.reconcile(&visible), 0);
    assert!(selection.is_selected(&"2".to_string()));
    assert_eq!(selection.len(), 3);
    assert!(!selection.is_page_fully_selected(&visible));
}

#[test]
fn test_page_local_selection_drops_hidden_ids() {
    let profile = users_vendors();
    let accessors = profile.accessors();
    let engine = ListQueryEngine::new(&accessors);
    let records = vendors();

    let spec = QuerySpec::new().with_page_size(3);
    let page = engine.run_query(&records, &spec);
    let visible = page_ids(&profile, &page.items);

    let mut selection = Selection::new(SelectionPolicy::PageLocal);
    selection.select_page(visible.iter().cloned());

    let next = spec.with_page(2);
    let page = engine.run_query(&records, &next);
    let visible = page_ids(&profile, &page.items);
    assert_eq!(visible, vec!["4", "5", "6"]);

    assert_eq!(selection.reconcile(&visible), 3);
    assert!(selection.is_empty());
}

#[test]
fn test_toggle_page_clears_a_fully_selected_page() {
    let ids: Vec<String> = vec!["1".into(), "2".into()];
    let mut selection = Selection::default();

    assert!(selection.toggle_page(&ids));
    assert!(!selection.toggle_page(&ids));
    assert!(selection.is_empty());
}

// =============================================================================
// Export
// =============================================================================

#[test]
fn test_csv_export_covers_every_page() {
    let profile = users_vendors();
    let accessors = profile.accessors();
    let engine = ListQueryEngine::new(&accessors);
    let records = vendors();

    let spec = QuerySpec::new()
        .with_filter("status", "Active")
        .with_sort(SortSpec::desc("bookings"))
        .with_page_size(2);

    let page = engine.run_query(&records, &spec);
    assert_eq!(page.len(), 2);

    let matched = engine.matched(&records, &spec);
    let csv = to_csv(&matched, &["id", "name", "bookings"], &accessors).unwrap();

    assert_eq!(
        csv,
        "id,name,bookings\n7,Vendor 7,21\n5,Vendor 5,15\n3,Vendor 3,9\n1,Vendor 1,3\n"
    );
}

#[test]
fn test_csv_export_renders_missing_as_empty() {
    let profile = users_vendors();
    let accessors = profile.accessors();
    let records = vec![json!({"id": 9, "name": "No Date"})];
    let refs: Vec<&Value> = records.iter().collect();

    let csv = to_csv(&refs, &["id", "joined"], &accessors).unwrap();
    assert_eq!(csv, "id,joined\n9,\n");
}

#[test]
fn test_csv_export_rejects_unknown_column() {
    let accessors = users_vendors().accessors();
    let records = vendors();
    let refs: Vec<&Value> = records.iter().collect();

    let err = to_csv(&refs, &["id", "rating"], &accessors).unwrap_err();
    assert!(matches!(err, ExportError::UnknownColumn(ref c) if c == "rating"));
}

#[test]
fn test_json_export_keeps_result_order() {
    let profile = users_vendors();
    let accessors = profile.accessors();
    let engine = ListQueryEngine::new(&accessors);
    let records = vendors();

    let spec = QuerySpec::new().with_search_term("vendor 1");
    let matched = engine.matched(&records, &spec);
    let exported: Vec<Value> = serde_json::from_str(&to_json(&matched).unwrap()).unwrap();

    assert_eq!(exported, vec![records[0].clone()]);
}
