//! Record model for the list query engine
//!
//! Records are opaque to the engine. Everything it needs to know about a
//! record goes through a caller-supplied `FieldAccessors`, which turns a
//! logical field name into a typed `FieldValue`.

mod accessor;
mod json;
mod value;

pub use accessor::{Accessor, FieldAccessors};
pub use json::{json_accessor, lookup_path, FieldKind};
pub use value::{parse_date_time, Collation, FieldValue};
