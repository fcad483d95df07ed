//! Stateless recipes over a slice of employees.
//!
//! Every recipe borrows its input; sequence results are `Vec<&Employee>` views or lazy
//! iterators, so nothing is copied and nothing is mutated. [`peek::peek_and_mutate`] is the
//! single exception and takes `&mut [Employee]`.
//!
//! - [`map`]: names, per-employee skills, flattened distinct skills
//! - [`filter`]: predicate and first-name-prefix filters
//! - [`sort`]: stable sorts, limit/skip, take-while/drop-while
//! - [`search`]: min/max, find-first/find-any, all/any/none-match
//! - [`reduce`]: counting, the three age sums, name concatenation
//! - [`peek`]: mutation during traversal
//!
//! Operations that need at least one qualifying element return
//! [`RecipeResult`](crate::error::RecipeResult) and fail with
//! [`RecipeError::NotFound`](crate::error::RecipeError::NotFound); everything else is total.
//!
//! ## Example: filter → sort → reduce
//!
//! ```rust
//! use employee_streams::processing::{filter, reduce, sort};
//! use employee_streams::sample;
//!
//! let employees = sample::employees();
//!
//! let with_b = filter::filter(&employees, |e| e.first_name().starts_with('B'));
//! let n = reduce::count_matching(&employees, |e| e.first_name().starts_with('B'));
//! assert_eq!(with_b.len(), n);
//!
//! let youngest_two = sort::limit_after_sort(&employees, |e| e.age(), 2);
//! let ages: Vec<u32> = youngest_two.iter().map(|e| e.age()).collect();
//! assert_eq!(ages, vec![12, 18]);
//!
//! assert_eq!(reduce::sum_ages_seeded(&employees), 277);
//! ```

pub mod filter;
pub mod map;
pub mod peek;
pub mod reduce;
pub mod search;
pub mod sort;

use std::io::{self, Write};

use crate::types::Employee;

pub use filter::filter;
pub use reduce::count_matching;

/// Write one line per employee, in input order, using its `Display` form.
pub fn print_all<W: Write>(employees: &[Employee], out: &mut W) -> io::Result<()> {
    employees.iter().try_for_each(|e| writeln!(out, "{e}"))
}

#[cfg(test)]
mod tests {
    use super::print_all;
    use crate::sample;

    #[test]
    fn print_all_writes_one_line_per_employee() {
        let employees = sample::employees();
        let mut out = Vec::new();
        print_all(&employees, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "Oscarbait Custardbath, age 18, skills [PHP, Java]");
        assert_eq!(lines[7], "Boilerdang Vegemite, age 51, skills [PHP]");
    }
}
