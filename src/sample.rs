//! The fixed sample roster every scenario runs against.

use crate::types::Employee;

/// Name written over every first name by [`crate::processing::peek::peek_and_mutate`] in the
/// sample scenario.
pub const PEEK_FIRST_NAME: &str = "Kamil";

/// Sentence traversed by the ordered-vs-unordered character scenario.
pub const SAMPLE_SENTENCE: &str = "Hello world";

/// Build the eight sample employees.
///
/// A new `Vec` is returned on every call, so a scenario that mutates its copy cannot affect the
/// next one.
pub fn employees() -> Vec<Employee> {
    vec![
        Employee::new("Oscarbait", "Custardbath", 18, ["PHP", "Java"]),
        Employee::new("Billybong", "Stinkyrash", 24, ["Python", "JavaScript"]),
        Employee::new("Benadryl", "Claritin", 30, ["HTML", "C++", "Java"]),
        Employee::new("Butercup", "Scratchnsniff", 12, ["PHP", "Java", "CSS", "HTML"]),
        Employee::new("Benadryl", "Humperdinck", 76, ["Ruby", "C#"]),
        Employee::new("Whippersnatch", "Scratchnsniff", 23, ["C++"]),
        Employee::new("Budapest", "Upperclass", 43, ["Python", "Java", "Ruby", "C#", "C++"]),
        Employee::new("Boilerdang", "Vegemite", 51, ["PHP"]),
    ]
}
