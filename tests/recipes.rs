//! The concrete scenarios over the seeded roster.

use employee_streams::processing::{filter, map, peek, reduce, search, sort};
use employee_streams::sample::{self, PEEK_FIRST_NAME};
use employee_streams::types::Employee;
use employee_streams::RecipeError;

fn ages(view: &[&Employee]) -> Vec<u32> {
    view.iter().map(|e| e.age()).collect()
}

#[test]
fn sort_by_age_ascending() {
    let employees = sample::employees();
    assert_eq!(
        ages(&sort::sorted_by_age(&employees)),
        vec![12, 18, 23, 24, 30, 43, 51, 76]
    );
}

#[test]
fn sorting_does_not_reorder_the_roster() {
    let employees = sample::employees();
    let _ = sort::sorted_by_age(&employees);
    let original: Vec<u32> = employees.iter().map(Employee::age).collect();
    assert_eq!(original, vec![18, 24, 30, 12, 76, 23, 43, 51]);
}

#[test]
fn every_sum_variant_is_277() {
    let employees = sample::employees();
    assert_eq!(reduce::sum_ages_unseeded(&employees).unwrap(), 277);
    assert_eq!(reduce::sum_ages_seeded(&employees), 277);
    assert_eq!(reduce::sum_ages_combined(&employees), 277);
}

#[test]
fn min_and_max() {
    let employees = sample::employees();
    assert_eq!(search::youngest(&employees).unwrap().age(), 12);

    let skill_counts: Vec<usize> = employees.iter().map(|e| e.skills().len()).collect();
    assert_eq!(skill_counts, vec![2, 2, 3, 4, 2, 1, 5, 1]);
    assert_eq!(search::most_skilled(&employees).unwrap().skills().len(), 5);
}

#[test]
fn prefix_filters() {
    let employees = sample::employees();

    let o = filter::by_first_name_prefix(&employees, 'O');
    assert_eq!(o.len(), 1);
    assert!(o[0].first_name().starts_with('O'));

    assert!(filter::by_first_name_prefix(&employees, 'Z').is_empty());
}

#[test]
fn map_recipes_are_lazy_and_ordered() {
    let employees = sample::employees();
    let mut names = map::first_names(&employees);
    assert_eq!(names.next(), Some("Oscarbait"));
    assert_eq!(names.next(), Some("Billybong"));

    let last = map::full_names(&employees).last();
    assert_eq!(last.as_deref(), Some("Boilerdang Vegemite"));
}

#[test]
fn not_found_on_empty_roster() {
    let empty: Vec<Employee> = Vec::new();
    let is_not_found =
        |r: Result<&Employee, RecipeError>| matches!(r, Err(RecipeError::NotFound { .. }));

    assert!(is_not_found(search::youngest(&empty)));
    assert!(is_not_found(search::most_skilled(&empty)));
    assert!(is_not_found(search::find_first(&empty, |_| true)));
    assert!(is_not_found(search::find_any(&empty, |_| true)));
    assert!(reduce::sum_ages_unseeded(&empty).is_err());
    assert!(reduce::concat_first_names(&empty).is_err());

    // Total operations stay total.
    assert_eq!(reduce::sum_ages_seeded(&empty), 0);
    assert_eq!(reduce::sum_ages_combined(&empty), 0);
    assert_eq!(reduce::count_matching(&empty, |_| true), 0);
    assert!(filter::filter(&empty, |_| true).is_empty());
    assert!(sort::sorted_by_age(&empty).is_empty());
}

#[test]
fn not_found_message_names_the_operation() {
    let err = reduce::concat_first_names(&[]).unwrap_err();
    assert_eq!(err.to_string(), "not found: concat_first_names produced no element");
}

#[test]
fn peek_mutates_the_backing_roster() {
    let mut employees = sample::employees();
    let view_len = peek::peek_and_mutate(&mut employees, PEEK_FIRST_NAME).len();

    assert_eq!(view_len, employees.len());
    assert!(employees.iter().all(|e| e.first_name() == PEEK_FIRST_NAME));
}

#[test]
fn peek_on_a_slice_only_touches_that_slice() {
    let mut employees = sample::employees();
    let _ = peek::peek_and_mutate(&mut employees[..2], PEEK_FIRST_NAME);

    assert_eq!(employees[0].first_name(), PEEK_FIRST_NAME);
    assert_eq!(employees[1].first_name(), PEEK_FIRST_NAME);
    assert_eq!(employees[2].first_name(), "Benadryl");
}
