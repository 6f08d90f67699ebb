//! servijoy - filter, sort and paginate engine for the ServiJoy admin tables
//!
//! The engine turns a record collection plus a query spec into the visible
//! page of an admin table. Selection, debouncing and export sit around it
//! as caller-side helpers.

pub mod cli;
pub mod debounce;
pub mod engine;
pub mod export;
pub mod observability;
pub mod query;
pub mod record;
pub mod selection;
pub mod views;

pub use engine::{ListQueryEngine, ResultPage};
pub use query::{DateRange, PageRequest, QuerySpec, SortDirection, SortSpec};
pub use record::{Collation, FieldAccessors, FieldValue};
