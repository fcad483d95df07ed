//! `employee-streams` demonstrates functional-style collection recipes (map, filter, sort,
//! limit/skip, short-circuiting matches, reduce) over a small in-memory roster of
//! [`types::Employee`] records.
//!
//! The roster is built by [`sample::employees`], which returns a fresh `Vec` on every call. Each
//! recipe in [`processing`] borrows that roster and returns a derived value: a view of borrowed
//! records, a lazy iterator, a count, a single record, a boolean or a string.
//!
//! ## Modules
//!
//! - [`types`]: the employee record
//! - [`sample`]: the eight seeded employees
//! - [`processing`]: the sequential recipes
//! - [`execution`]: rayon-backed parallel traversal, find-any and reduction, with observer hooks
//! - [`ingestion`]: loading a roster from JSON
//! - [`scenarios`]: one runnable, printable demonstration per recipe
//! - [`error`]: error types
//!
//! ## Failure model
//!
//! Recipes that must produce one element (min/max, find-first/find-any) or that reduce without a
//! seed return [`RecipeResult`] and fail with [`RecipeError::NotFound`] when nothing qualifies.
//! Filters, maps, counts and boolean matches are total and return empty/`false` results instead.
//!
//! ```rust
//! use employee_streams::processing::{reduce, search};
//! use employee_streams::{sample, RecipeError};
//!
//! let employees = sample::employees();
//! assert_eq!(search::youngest(&employees).unwrap().age(), 12);
//! assert_eq!(reduce::sum_ages_unseeded(&employees), Ok(277));
//!
//! // Seeded and unseeded sums disagree on empty input.
//! assert_eq!(reduce::sum_ages_seeded(&[]), 0);
//! assert_eq!(
//!     reduce::sum_ages_unseeded(&[]),
//!     Err(RecipeError::NotFound { operation: "sum_ages_unseeded" })
//! );
//! ```
//!
//! ## Mutation during traversal
//!
//! [`processing::peek::peek_and_mutate`] is the one recipe that writes. The view it returns and
//! the caller's roster are the same records:
//!
//! ```rust
//! use employee_streams::processing::peek::peek_and_mutate;
//! use employee_streams::sample;
//!
//! let mut employees = sample::employees();
//! let view = peek_and_mutate(&mut employees, "Kamil");
//! assert_eq!(view.len(), 8);
//! assert!(employees.iter().all(|e| e.first_name() == "Kamil"));
//! ```

pub mod error;
pub mod execution;
pub mod ingestion;
pub mod processing;
pub mod sample;
pub mod scenarios;
pub mod types;

pub use error::{IngestionError, IngestionResult, RecipeError, RecipeResult, ScenarioError};
