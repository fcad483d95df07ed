//! Reductions over employees.
//!
//! The three age sums deliberately differ in how they treat empty input:
//!
//! - [`sum_ages_unseeded`] has no seed and fails with [`RecipeError::NotFound`] when empty.
//! - [`sum_ages_seeded`] folds from `0` and returns `0` when empty.
//! - [`sum_ages_combined`] folds each partition from `0` and merges partial sums with a combiner;
//!   it also returns `0` when empty.
//!
//! Ages are `u32`; every sum accumulates in `u64`, which cannot overflow for any roster that
//! fits in memory.

use crate::error::{RecipeError, RecipeResult};
use crate::types::Employee;

/// Number of employees folded together before [`sum_ages_combined`] merges a partial result.
pub const DEFAULT_PARTITION_SIZE: usize = 3;

/// Count employees matching `predicate`.
pub fn count_matching<F>(employees: &[Employee], mut predicate: F) -> usize
where
    F: FnMut(&Employee) -> bool,
{
    employees.iter().filter(|e| predicate(e)).count()
}

/// Sum of ages with no seed value.
pub fn sum_ages_unseeded(employees: &[Employee]) -> RecipeResult<u64> {
    employees
        .iter()
        .map(|e| u64::from(e.age()))
        .reduce(|a, b| a + b)
        .ok_or(RecipeError::not_found("sum_ages_unseeded"))
}

/// Sum of ages folded from `0`.
pub fn sum_ages_seeded(employees: &[Employee]) -> u64 {
    employees.iter().map(|e| u64::from(e.age())).fold(0, |a, b| a + b)
}

/// Sum of ages using an identity, an accumulator and a combiner.
pub fn sum_ages_combined(employees: &[Employee]) -> u64 {
    reduce_partitioned(
        employees,
        DEFAULT_PARTITION_SIZE,
        0,
        |acc, e| acc + u64::from(e.age()),
        |a, b| a + b,
    )
}

/// Fold each run of `partition_size` employees from `identity` with `accumulator`, then merge
/// the partial results (in order) with `combiner`.
///
/// `identity` must be a neutral element for `combiner`, otherwise the result depends on the
/// partition size. Empty input returns `identity`.
///
/// # Panics
///
/// Panics if `partition_size == 0`.
pub fn reduce_partitioned<A, F, C>(
    employees: &[Employee],
    partition_size: usize,
    identity: A,
    mut accumulator: F,
    mut combiner: C,
) -> A
where
    A: Clone,
    F: FnMut(A, &Employee) -> A,
    C: FnMut(A, A) -> A,
{
    assert!(partition_size > 0, "partition_size must be > 0");
    employees
        .chunks(partition_size)
        .map(|part| part.iter().fold(identity.clone(), &mut accumulator))
        .fold(identity.clone(), &mut combiner)
}

/// All first names joined with `", "`, in input order.
///
/// Like [`sum_ages_unseeded`], there is no seed: empty input fails with
/// [`RecipeError::NotFound`].
pub fn concat_first_names(employees: &[Employee]) -> RecipeResult<String> {
    employees
        .iter()
        .map(|e| e.first_name().to_owned())
        .reduce(|mut joined, name| {
            joined.push_str(", ");
            joined.push_str(&name);
            joined
        })
        .ok_or(RecipeError::not_found("concat_first_names"))
}
