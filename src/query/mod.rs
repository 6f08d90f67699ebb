//! Queries over the admin tables
//!
//! A `QuerySpec` carries the search term, field filters, date range, sort
//! and page of one table view. Callers own it and replace it on every
//! interaction; the engine only reads it.

mod errors;
mod spec;

pub use errors::{QueryError, QueryResult};
pub use spec::{
    DateRange, FieldFilters, PageRequest, QuerySpec, SortDirection, SortSpec, ALL,
    DEFAULT_PAGE_SIZE,
};
