//! Relationships that must hold between recipes, checked exhaustively over the sample roster.

use std::collections::HashSet;

use employee_streams::processing::{filter, map, reduce, search, sort};
use employee_streams::sample;
use employee_streams::types::Employee;

fn same_records(a: &[&Employee], b: &[&Employee]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| std::ptr::eq(*x, *y))
}

type Predicate = Box<dyn Fn(&Employee) -> bool>;

fn named(name: &'static str, p: impl Fn(&Employee) -> bool + 'static) -> (&'static str, Predicate) {
    (name, Box::new(p))
}

fn predicates() -> Vec<(&'static str, Predicate)> {
    vec![
        named("starts with B", |e| e.first_name().starts_with('B')),
        named("contains a", |e| e.first_name().contains('a')),
        named("older than 40", |e| e.age() > 40),
        named("knows Java", |e| e.skills().iter().any(|s| s == "Java")),
        named("always", |_| true),
        named("never", |_| false),
    ]
}

#[test]
fn limit_then_skip_partitions_the_sorted_view() {
    let employees = sample::employees();
    let sorted = sort::sorted_by_first_name(&employees);

    for n in 0..=sorted.len() {
        let head = sort::limit(&sorted, n);
        let tail = sort::skip(&sorted, n);

        let mut joined = head.clone();
        joined.extend(tail.iter().copied());
        assert!(same_records(&joined, &sorted), "n={n}");

        let head_ptrs: HashSet<*const Employee> =
            head.iter().map(|e| *e as *const Employee).collect();
        assert!(
            tail.iter().all(|e| !head_ptrs.contains(&(*e as *const Employee))),
            "n={n}"
        );
    }
}

#[test]
fn limit_after_sort_agrees_with_limit_of_sorted() {
    let employees = sample::employees();
    let sorted = sort::sorted_by_age(&employees);
    for n in 0..=employees.len() + 1 {
        assert!(same_records(
            &sort::limit_after_sort(&employees, Employee::age, n),
            &sort::limit(&sorted, n)
        ));
        assert!(same_records(
            &sort::skip_after_sort(&employees, Employee::age, n),
            &sort::skip(&sorted, n)
        ));
    }
}

#[test]
fn distinct_skills_is_first_occurrence_dedupe_of_per_employee_skills() {
    let employees = sample::employees();
    let per_employee = map::skills_per_employee(&employees);

    let mut seen = HashSet::new();
    let expected: Vec<&str> = per_employee
        .iter()
        .flat_map(|skills| skills.iter())
        .map(String::as_str)
        .filter(|s| seen.insert(*s))
        .collect();

    let distinct = map::distinct_skills(&employees);
    assert_eq!(distinct, expected);

    let total: usize = per_employee.iter().map(|s| s.len()).sum();
    assert!(distinct.len() <= total);
    assert_eq!(total, 20);
}

#[test]
fn count_matches_filter_length() {
    let employees = sample::employees();
    for (name, p) in predicates() {
        assert_eq!(
            reduce::count_matching(&employees, |e| p(e)),
            filter::filter(&employees, |e| p(e)).len(),
            "{name}"
        );
    }
}

#[test]
fn matches_are_vacuous_on_empty_input() {
    let empty: Vec<Employee> = Vec::new();
    for (name, p) in predicates() {
        assert!(search::all_match(&empty, |e| p(e)), "{name}");
        assert!(search::none_match(&empty, |e| p(e)), "{name}");
        assert!(!search::any_match(&empty, |e| p(e)), "{name}");
    }
}

#[test]
fn take_while_then_drop_while_reconstructs_sorted_view() {
    let employees = sample::employees();
    let sorted = sort::sorted_by_age(&employees);

    for threshold in 0..=100 {
        let prefix = sort::take_while_age_below(&employees, threshold);
        let suffix = sort::drop_while_age_below(&employees, threshold);

        let mut joined = prefix.clone();
        joined.extend(suffix.iter().copied());
        assert!(same_records(&joined, &sorted), "threshold={threshold}");
    }
}

#[test]
fn take_and_drop_while_reconstruct_any_order() {
    let employees = sample::employees();
    let unsorted: Vec<&Employee> = employees.iter().collect();

    for (name, p) in predicates() {
        let mut joined = sort::take_while(&unsorted, |e| p(e));
        joined.extend(sort::drop_while(&unsorted, |e| p(e)));
        assert!(same_records(&joined, &unsorted), "{name}");
    }
}

#[test]
fn find_any_agrees_with_a_match_but_not_necessarily_with_find_first() {
    let employees = sample::employees();
    for (name, p) in predicates() {
        let first = search::find_first(&employees, |e| p(e));
        let any = search::find_any(&employees, |e| p(e));
        assert_eq!(first.is_ok(), any.is_ok(), "{name}");
        if let Ok(e) = any {
            assert!(p(e), "{name}");
        }
    }
}
