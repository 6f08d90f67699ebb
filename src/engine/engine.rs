//! List query engine
//!
//! Runs a query spec over a caller-owned record collection.
//!
//! Execution flow (strict order):
//! 1. Filter records by search term, field filters and date range
//! 2. Sort the survivors (if a key is set)
//! 3. Count matches
//! 4. Clamp the page index and slice the page
//!
//! The engine holds no state besides the accessors. Identical inputs give
//! identical outputs, and records are only ever borrowed.

use crate::query::{PageRequest, QuerySpec, SortSpec};
use crate::record::FieldAccessors;

use super::filters::RecordFilter;
use super::paginator::{PageWindow, Paginator};
use super::result::ResultPage;
use super::sorter::RecordSorter;

/// Filter, sort and paginate pipeline over records of type `R`
pub struct ListQueryEngine<'a, R> {
    accessors: &'a FieldAccessors<R>,
}

impl<'a, R> ListQueryEngine<'a, R> {
    /// Creates an engine over the given accessors
    pub fn new(accessors: &'a FieldAccessors<R>) -> Self {
        Self { accessors }
    }

    /// Accessors this engine reads records through
    pub fn accessors(&self) -> &'a FieldAccessors<R> {
        self.accessors
    }

    /// Records matching every predicate of the query, in input order
    pub fn filter<'r>(&self, records: &'r [R], spec: &QuerySpec) -> Vec<&'r R> {
        let filter = RecordFilter::new(self.accessors);
        records
            .iter()
            .filter(|record| filter.matches(record, spec))
            .collect()
    }

    /// Stable sort by the given key
    pub fn sort<'r>(&self, records: Vec<&'r R>, sort: &SortSpec) -> Vec<&'r R> {
        RecordSorter::new(self.accessors).sort(records, sort)
    }

    /// Slices one page out of already filtered and sorted records
    pub fn paginate<'r>(&self, records: Vec<&'r R>, page: &PageRequest) -> (Vec<&'r R>, PageWindow) {
        Paginator::paginate(records, page)
    }

    /// Filtered and sorted records without pagination.
    ///
    /// Exports consume this rather than a single page.
    pub fn matched<'r>(&self, records: &'r [R], spec: &QuerySpec) -> Vec<&'r R> {
        let filtered = self.filter(records, spec);
        self.sort(filtered, &spec.sort)
    }

    /// Runs the full pipeline and packages the visible page
    pub fn run_query<'r>(&self, records: &'r [R], spec: &QuerySpec) -> ResultPage<'r, R> {
        let matched = self.matched(records, spec);
        let total_matched = matched.len();
        let (items, window) = self.paginate(matched, &spec.page);

        ResultPage {
            items,
            total_matched,
            total_pages: window.total_pages,
            page_index: window.index,
            page_size: window.size,
        }
    }
}
