//! Employee filtering.

use crate::types::Employee;

/// Returns the employees for which `predicate` returns `true`, preserving input order.
///
/// The result borrows from `employees`; nothing is cloned.
pub fn filter<F>(employees: &[Employee], mut predicate: F) -> Vec<&Employee>
where
    F: FnMut(&Employee) -> bool,
{
    employees.iter().filter(|e| predicate(e)).collect()
}

/// Employees whose first name starts with `prefix`.
///
/// No match yields an empty `Vec`, not an error.
pub fn by_first_name_prefix(employees: &[Employee], prefix: char) -> Vec<&Employee> {
    filter(employees, |e| e.first_name().starts_with(prefix))
}
