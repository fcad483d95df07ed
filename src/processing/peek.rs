//! Mutation during traversal.
//!
//! This is the one recipe that writes to the records it visits. It mirrors a "peek" stage used
//! for more than debugging: the returned view and the caller's collection refer to the same
//! records, so the caller's collection is changed too. Do not use this as a way to update data.

use crate::types::Employee;

/// Visit every employee, overwriting its first name with `first_name` on the way through, and
/// collect the visited records.
///
/// The returned view borrows the same records as `employees`; once it is dropped, `employees`
/// shows the overwritten names.
pub fn peek_and_mutate<'a>(employees: &'a mut [Employee], first_name: &str) -> Vec<&'a Employee> {
    employees
        .iter_mut()
        .map(|e| {
            e.set_first_name(first_name);
            &*e
        })
        .collect()
}
