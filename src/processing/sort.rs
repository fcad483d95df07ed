//! Sorting plus the positional and short-circuiting slices taken after a sort.
//!
//! All sorts are stable: employees with equal keys keep their original relative order.
//!
//! [`limit`]/[`skip`] and [`take_while`]/[`drop_while`] work on any already-sorted view, so for
//! the same `n` (or the same predicate) the two halves always concatenate back to the input.

use std::cmp::Ordering;

use crate::types::Employee;

/// Returns a new view of `employees` ordered by `compare`.
pub fn sorted_by<F>(employees: &[Employee], mut compare: F) -> Vec<&Employee>
where
    F: FnMut(&Employee, &Employee) -> Ordering,
{
    let mut out: Vec<&Employee> = employees.iter().collect();
    out.sort_by(|a, b| compare(a, b));
    out
}

/// Returns a new view of `employees` ordered by the key extracted with `key`.
pub fn sorted_by_key<K, F>(employees: &[Employee], mut key: F) -> Vec<&Employee>
where
    F: FnMut(&Employee) -> K,
    K: Ord,
{
    sorted_by(employees, |a, b| key(a).cmp(&key(b)))
}

/// Youngest first.
pub fn sorted_by_age(employees: &[Employee]) -> Vec<&Employee> {
    sorted_by_key(employees, Employee::age)
}

/// Alphabetical by first name.
pub fn sorted_by_first_name(employees: &[Employee]) -> Vec<&Employee> {
    sorted_by(employees, |a, b| a.first_name().cmp(b.first_name()))
}

/// The first `n` elements of `sorted` (all of them if there are fewer).
pub fn limit<'a>(sorted: &[&'a Employee], n: usize) -> Vec<&'a Employee> {
    sorted.iter().copied().take(n).collect()
}

/// Everything after the first `n` elements of `sorted` (empty if `n >= len`).
pub fn skip<'a>(sorted: &[&'a Employee], n: usize) -> Vec<&'a Employee> {
    sorted.iter().copied().skip(n).collect()
}

/// Sort by `key`, then keep the first `n`.
pub fn limit_after_sort<K, F>(employees: &[Employee], key: F, n: usize) -> Vec<&Employee>
where
    F: FnMut(&Employee) -> K,
    K: Ord,
{
    limit(&sorted_by_key(employees, key), n)
}

/// Sort by `key`, then drop the first `n`.
pub fn skip_after_sort<K, F>(employees: &[Employee], key: F, n: usize) -> Vec<&Employee>
where
    F: FnMut(&Employee) -> K,
    K: Ord,
{
    skip(&sorted_by_key(employees, key), n)
}

/// Longest prefix of `sorted` whose elements all satisfy `predicate`.
///
/// Stops at the first non-matching element, even if later elements would match.
pub fn take_while<'a, F>(sorted: &[&'a Employee], mut predicate: F) -> Vec<&'a Employee>
where
    F: FnMut(&Employee) -> bool,
{
    sorted.iter().copied().take_while(|e| predicate(e)).collect()
}

/// Suffix of `sorted` starting at the first element that fails `predicate`.
///
/// Once started, every remaining element is kept, even one that would satisfy `predicate`.
pub fn drop_while<'a, F>(sorted: &[&'a Employee], mut predicate: F) -> Vec<&'a Employee>
where
    F: FnMut(&Employee) -> bool,
{
    sorted.iter().copied().skip_while(|e| predicate(e)).collect()
}

/// Sort by age, then take while `age < threshold`.
pub fn take_while_age_below(employees: &[Employee], threshold: u32) -> Vec<&Employee> {
    take_while(&sorted_by_age(employees), |e| e.age() < threshold)
}

/// Sort by age, then drop while `age < threshold`.
pub fn drop_while_age_below(employees: &[Employee], threshold: u32) -> Vec<&Employee> {
    drop_while(&sorted_by_age(employees), |e| e.age() < threshold)
}
