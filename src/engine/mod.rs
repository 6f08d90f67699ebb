//! List query engine for the admin tables
//!
//! Consumes a record collection and a query spec, produces the visible page.
//!
//! # Execution Flow (strict order)
//!
//! 1. Filter records (search term, field filters, date range)
//! 2. Sort (if a key is set), stable in both directions
//! 3. Count matches
//! 4. Clamp the page index and slice the page
//!
//! # Guarantees
//!
//! - Pure: no hidden state, identical inputs give identical pages
//! - Never fails: out-of-range pages clamp, missing values are neutral
//! - Never mutates or copies records

mod engine;
mod filters;
mod paginator;
mod result;
mod sorter;

pub use engine::ListQueryEngine;
pub use filters::RecordFilter;
pub use paginator::{PageWindow, Paginator};
pub use result::ResultPage;
pub use sorter::RecordSorter;
