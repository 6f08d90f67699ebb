//! View profiles for the admin tables
//!
//! Each admin table (users/vendors, activity logs) reads JSON records with
//! its own field catalogue. A `ViewProfile` describes that catalogue and
//! builds the `FieldAccessors` the engine runs on.

mod builtin;
mod errors;
mod profile;
mod registry;

pub use builtin::{activity_logs, builtin_profiles, users_vendors, ACTIVITY_LOGS, USERS_VENDORS};
pub use errors::{ViewError, ViewResult};
pub use profile::{FieldDef, ViewProfile};
pub use registry::ViewRegistry;
