//! Loading a roster from outside the crate.
//!
//! The recipes normally run against [`crate::sample::employees`]; [`json`] lets callers supply
//! another roster in the same shape.

pub mod json;

pub use json::{ingest_employees_from_path, ingest_employees_from_str};
