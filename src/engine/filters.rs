//! Record filtering
//!
//! A record passes when it satisfies the search term, every active field
//! filter and the date range. All predicates are ANDed, so the order they
//! are checked in never changes the result.

use crate::query::{DateRange, FieldFilters, QuerySpec};
use crate::record::FieldAccessors;

/// Evaluates a query spec's predicates against records
pub struct RecordFilter<'a, R> {
    accessors: &'a FieldAccessors<R>,
}

impl<'a, R> RecordFilter<'a, R> {
    pub fn new(accessors: &'a FieldAccessors<R>) -> Self {
        Self { accessors }
    }

    /// Checks if a record matches all predicates of the query
    pub fn matches(&self, record: &R, spec: &QuerySpec) -> bool {
        self.matches_search(record, &spec.search_term)
            && self.matches_filters(record, &spec.field_filters)
            && self.matches_date_range(record, &spec.date_range)
    }

    /// Case-insensitive substring match over the searchable fields.
    ///
    /// A blank term matches everything.
    pub fn matches_search(&self, record: &R, term: &str) -> bool {
        let term = term.trim();
        if term.is_empty() {
            return true;
        }

        let needle = term.to_lowercase();
        self.accessors.search_fields().iter().any(|field| {
            self.accessors
                .value(record, field)
                .search_text()
                .is_some_and(|haystack| haystack.contains(&needle))
        })
    }

    /// Exact match for every non-inert filter
    pub fn matches_filters(&self, record: &R, filters: &FieldFilters) -> bool {
        filters
            .active()
            .all(|(field, expected)| self.accessors.value(record, field).matches_literal(expected))
    }

    /// Inclusive day bounds on the designated date field.
    ///
    /// With any bound set, a record without a readable date is excluded.
    pub fn matches_date_range(&self, record: &R, range: &DateRange) -> bool {
        if !range.is_active() {
            return true;
        }

        let day = self
            .accessors
            .date_field_name()
            .and_then(|field| self.accessors.value(record, field).calendar_day());

        match day {
            Some(day) => range.contains(day),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::FieldValue;
    use chrono::NaiveDate;

    struct User {
        name: &'static str,
        email: &'static str,
        status: &'static str,
        joined: &'static str,
    }

    fn accessors() -> FieldAccessors<User> {
        FieldAccessors::new()
            .field("name", |u: &User| FieldValue::text(u.name))
            .field("email", |u: &User| FieldValue::text(u.email))
            .field("status", |u: &User| FieldValue::text(u.status))
            .field("joined", |u: &User| FieldValue::date_from_str(u.joined))
            .searchable(["name", "email"])
            .date_field("joined")
    }

    fn user(name: &'static str, status: &'static str, joined: &'static str) -> User {
        User {
            name,
            email: "hello@servijoy.test",
            status,
            joined,
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let acc = accessors();
        let filter = RecordFilter::new(&acc);
        let record = user("Amara Obi", "Active", "2024-01-10");

        assert!(filter.matches_search(&record, "amara"));
        assert!(filter.matches_search(&record, "OBI"));
        assert!(filter.matches_search(&record, "servijoy"));
        assert!(!filter.matches_search(&record, "zed"));
    }

    #[test]
    fn test_blank_search_matches_all() {
        let acc = accessors();
        let filter = RecordFilter::new(&acc);
        let record = user("Amara", "Active", "2024-01-10");

        assert!(filter.matches_search(&record, ""));
        assert!(filter.matches_search(&record, "   "));
    }

    #[test]
    fn test_search_ignores_unsearchable_fields() {
        let acc = accessors();
        let filter = RecordFilter::new(&acc);
        let record = user("Amara", "Suspended", "2024-01-10");

        assert!(!filter.matches_search(&record, "suspended"));
    }

    #[test]
    fn test_field_filter_exact_and_inert() {
        let acc = accessors();
        let filter = RecordFilter::new(&acc);
        let record = user("Amara", "Active", "2024-01-10");

        let spec = QuerySpec::new().with_filter("status", "Active");
        assert!(filter.matches(&record, &spec));

        let spec = QuerySpec::new().with_filter("status", "active");
        assert!(!filter.matches(&record, &spec));

        let spec = QuerySpec::new().with_filter("status", "All");
        assert!(filter.matches(&record, &spec));
    }

    #[test]
    fn test_filter_on_unknown_field_excludes() {
        let acc = accessors();
        let filter = RecordFilter::new(&acc);
        let record = user("Amara", "Active", "2024-01-10");

        let spec = QuerySpec::new().with_filter("city", "Lagos");
        assert!(!filter.matches(&record, &spec));
    }

    #[test]
    fn test_date_range_inclusive() {
        let acc = accessors();
        let filter = RecordFilter::new(&acc);
        let range = DateRange::between(day(2024, 1, 10), day(2024, 1, 20));

        assert!(filter.matches_date_range(&user("a", "Active", "2024-01-10 00:00:00"), &range));
        assert!(filter.matches_date_range(&user("a", "Active", "2024-01-20 23:59:59"), &range));
        assert!(!filter.matches_date_range(&user("a", "Active", "2024-01-09"), &range));
        assert!(!filter.matches_date_range(&user("a", "Active", "2024-01-21"), &range));
    }

    #[test]
    fn test_unparsable_date_excluded_only_when_range_active() {
        let acc = accessors();
        let filter = RecordFilter::new(&acc);
        let record = user("a", "Active", "not a date");

        assert!(filter.matches_date_range(&record, &DateRange::default()));
        assert!(!filter.matches_date_range(&record, &DateRange::since(day(2020, 1, 1))));
    }

    #[test]
    fn test_all_predicates_anded() {
        let acc = accessors();
        let filter = RecordFilter::new(&acc);
        let record = user("Amara", "Active", "2024-01-10");

        let spec = QuerySpec::new()
            .with_search_term("amara")
            .with_filter("status", "Active")
            .with_date_range(DateRange::until(day(2024, 1, 9)));
        assert!(!filter.matches(&record, &spec));
    }
}
