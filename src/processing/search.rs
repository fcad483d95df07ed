//! Single-element lookups and short-circuiting boolean matches.

use crate::error::{RecipeError, RecipeResult};
use crate::types::Employee;

/// The employee with the smallest key.
///
/// Ties resolve to the earliest employee. Fails with [`RecipeError::NotFound`] on empty input.
pub fn min_by_key<K, F>(employees: &[Employee], mut key: F) -> RecipeResult<&Employee>
where
    F: FnMut(&Employee) -> K,
    K: Ord,
{
    employees
        .iter()
        .min_by_key(|e| key(e))
        .ok_or(RecipeError::not_found("min_by_key"))
}

/// The employee with the largest key.
///
/// Ties resolve to the earliest employee (unlike [`Iterator::max_by_key`], which keeps the last).
/// Fails with [`RecipeError::NotFound`] on empty input.
pub fn max_by_key<K, F>(employees: &[Employee], mut key: F) -> RecipeResult<&Employee>
where
    F: FnMut(&Employee) -> K,
    K: Ord,
{
    employees
        .iter()
        .map(|e| (key(e), e))
        .reduce(|best, next| if next.0 > best.0 { next } else { best })
        .map(|(_, e)| e)
        .ok_or(RecipeError::not_found("max_by_key"))
}

/// Youngest employee.
pub fn youngest(employees: &[Employee]) -> RecipeResult<&Employee> {
    min_by_key(employees, Employee::age)
}

/// Employee with the most skills.
pub fn most_skilled(employees: &[Employee]) -> RecipeResult<&Employee> {
    max_by_key(employees, |e| e.skills().len())
}

/// First employee, in input order, matching `predicate`.
pub fn find_first<F>(employees: &[Employee], mut predicate: F) -> RecipeResult<&Employee>
where
    F: FnMut(&Employee) -> bool,
{
    employees
        .iter()
        .find(|e| predicate(e))
        .ok_or(RecipeError::not_found("find_first"))
}

/// Some employee matching `predicate`.
///
/// Callers must not rely on which match is returned. This sequential version happens to agree
/// with [`find_first`]; the parallel
/// [`ExecutionEngine::find_any`](crate::execution::ExecutionEngine::find_any) can return any match.
pub fn find_any<F>(employees: &[Employee], predicate: F) -> RecipeResult<&Employee>
where
    F: FnMut(&Employee) -> bool,
{
    find_first(employees, predicate).map_err(|_| RecipeError::not_found("find_any"))
}

/// `true` if every employee matches. Vacuously `true` on empty input.
pub fn all_match<F>(employees: &[Employee], mut predicate: F) -> bool
where
    F: FnMut(&Employee) -> bool,
{
    employees.iter().all(|e| predicate(e))
}

/// `true` if at least one employee matches. `false` on empty input.
pub fn any_match<F>(employees: &[Employee], mut predicate: F) -> bool
where
    F: FnMut(&Employee) -> bool,
{
    employees.iter().any(|e| predicate(e))
}

/// `true` if no employee matches. Vacuously `true` on empty input.
pub fn none_match<F>(employees: &[Employee], mut predicate: F) -> bool
where
    F: FnMut(&Employee) -> bool,
{
    !employees.iter().any(|e| predicate(e))
}
