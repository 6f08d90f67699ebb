//! Record sorting
//!
//! Sort is stable in both directions: records comparing equal keep their
//! input order.

use std::cmp::Ordering;

use crate::query::{SortDirection, SortSpec};
use crate::record::{FieldAccessors, FieldValue};

/// Sorts records by one accessor
pub struct RecordSorter<'a, R> {
    accessors: &'a FieldAccessors<R>,
}

impl<'a, R> RecordSorter<'a, R> {
    pub fn new(accessors: &'a FieldAccessors<R>) -> Self {
        Self { accessors }
    }

    /// Sorts records by key, direction and collation.
    ///
    /// Without a key the input is returned unchanged.
    pub fn sort<'r>(&self, records: Vec<&'r R>, sort_spec: &SortSpec) -> Vec<&'r R> {
        let Some(key) = sort_spec.key.as_deref() else {
            return records;
        };

        // Read every key once; text is collated up front so the comparator
        // stays allocation-free.
        let mut keyed: Vec<(FieldValue, &'r R)> = records
            .into_iter()
            .map(|record| {
                let value = self.accessors.value(record, key).collated(sort_spec.collation);
                (value, record)
            })
            .collect();

        keyed.sort_by(|(a, _), (b, _)| Self::directed(a.total_cmp(b), sort_spec.direction));

        keyed.into_iter().map(|(_, record)| record).collect()
    }

    fn directed(ordering: Ordering, direction: SortDirection) -> Ordering {
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Collation;

    struct Vendor {
        id: u32,
        name: &'static str,
        rating: Option<f64>,
    }

    fn vendor(id: u32, name: &'static str, rating: Option<f64>) -> Vendor {
        Vendor { id, name, rating }
    }

    fn accessors() -> FieldAccessors<Vendor> {
        FieldAccessors::new()
            .field("name", |v: &Vendor| FieldValue::text(v.name))
            .field("rating", |v: &Vendor| v.rating.into())
    }

    fn ids(records: &[&Vendor]) -> Vec<u32> {
        records.iter().map(|v| v.id).collect()
    }

    #[test]
    fn test_no_key_keeps_order() {
        let vendors = vec![vendor(3, "c", None), vendor(1, "a", None), vendor(2, "b", None)];
        let acc = accessors();
        let sorted = RecordSorter::new(&acc).sort(vendors.iter().collect(), &SortSpec::none());
        assert_eq!(ids(&sorted), vec![3, 1, 2]);
    }

    #[test]
    fn test_sort_ascending_and_descending() {
        let vendors = vec![
            vendor(1, "x", Some(4.0)),
            vendor(2, "x", Some(2.5)),
            vendor(3, "x", Some(10.0)),
        ];
        let acc = accessors();
        let sorter = RecordSorter::new(&acc);

        let asc = sorter.sort(vendors.iter().collect(), &SortSpec::asc("rating"));
        assert_eq!(ids(&asc), vec![2, 1, 3]);

        let desc = sorter.sort(vendors.iter().collect(), &SortSpec::desc("rating"));
        assert_eq!(ids(&desc), vec![3, 1, 2]);
    }

    #[test]
    fn test_sort_stable_both_directions() {
        let vendors = vec![
            vendor(1, "same", None),
            vendor(2, "same", None),
            vendor(3, "same", None),
        ];
        let acc = accessors();
        let sorter = RecordSorter::new(&acc);

        let asc = sorter.sort(vendors.iter().collect(), &SortSpec::asc("name"));
        assert_eq!(ids(&asc), vec![1, 2, 3]);

        let desc = sorter.sort(vendors.iter().collect(), &SortSpec::desc("name"));
        assert_eq!(ids(&desc), vec![1, 2, 3]);
    }

    #[test]
    fn test_missing_values_sort_first_ascending() {
        let vendors = vec![
            vendor(1, "a", Some(3.0)),
            vendor(2, "b", None),
            vendor(3, "c", Some(1.0)),
        ];
        let acc = accessors();
        let sorted = RecordSorter::new(&acc).sort(vendors.iter().collect(), &SortSpec::asc("rating"));
        assert_eq!(ids(&sorted), vec![2, 3, 1]);
    }

    #[test]
    fn test_collation_policies() {
        let vendors = vec![vendor(1, "Bob", None), vendor(2, "ann", None)];
        let acc = accessors();
        let sorter = RecordSorter::new(&acc);

        let insensitive = sorter.sort(vendors.iter().collect(), &SortSpec::asc("name"));
        assert_eq!(ids(&insensitive), vec![2, 1]);

        let sensitive = sorter.sort(
            vendors.iter().collect(),
            &SortSpec::asc("name").with_collation(Collation::CaseSensitive),
        );
        assert_eq!(ids(&sensitive), vec![1, 2]);
    }

    #[test]
    fn test_case_variants_are_ties_when_insensitive() {
        let vendors = vec![vendor(1, "bob", None), vendor(2, "Bob", None), vendor(3, "BOB", None)];
        let acc = accessors();
        let sorted = RecordSorter::new(&acc).sort(vendors.iter().collect(), &SortSpec::desc("name"));
        assert_eq!(ids(&sorted), vec![1, 2, 3]);
    }

    #[test]
    fn test_unknown_key_keeps_order() {
        let vendors = vec![vendor(2, "b", None), vendor(1, "a", None)];
        let acc = accessors();
        let sorted = RecordSorter::new(&acc).sort(vendors.iter().collect(), &SortSpec::asc("city"));
        assert_eq!(ids(&sorted), vec![2, 1]);
    }
}
