//! Projections of employees into names and skills.

use std::collections::HashSet;

use crate::types::Employee;

/// Lazily yields each first name, in input order.
pub fn first_names(employees: &[Employee]) -> impl Iterator<Item = &str> + '_ {
    employees.iter().map(Employee::first_name)
}

/// Lazily yields `"first last"` for each employee, in input order.
pub fn full_names(employees: &[Employee]) -> impl Iterator<Item = String> + '_ {
    employees.iter().map(Employee::full_name)
}

/// One skill list per employee.
///
/// Per-employee order and duplicates across employees are preserved.
pub fn skills_per_employee(employees: &[Employee]) -> Vec<&[String]> {
    employees.iter().map(Employee::skills).collect()
}

/// Every skill across all employees, flattened, keeping only the first occurrence of each.
pub fn distinct_skills(employees: &[Employee]) -> Vec<&str> {
    let mut seen = HashSet::new();
    employees
        .iter()
        .flat_map(|e| e.skills())
        .map(String::as_str)
        .filter(|skill| seen.insert(*skill))
        .collect()
}
