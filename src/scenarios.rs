//! Named, independently runnable scenarios.
//!
//! Each [`Scenario`] rebuilds the sample roster, applies one recipe and writes the result as
//! human-readable lines. Nothing is shared between scenarios, so the peek-and-mutate scenario
//! cannot leak its renamed employees into any other.

use std::fmt;
use std::io::Write;

use crate::error::ScenarioError;
use crate::execution::ExecutionEngine;
use crate::processing::{self, filter, map, peek, reduce, search, sort};
use crate::sample::{self, PEEK_FIRST_NAME, SAMPLE_SENTENCE};
use crate::types::Employee;

/// Age threshold used by the take-while/drop-while scenarios.
pub const AGE_THRESHOLD: u32 = 30;

/// Number of employees kept or dropped by the limit/skip scenarios.
pub const PAGE_SIZE: usize = 4;

/// One recipe demonstration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scenario {
    PrintAll,
    Map,
    FlatMap,
    Filter,
    Sorted,
    Limit,
    Skip,
    Count,
    MinMax,
    FindFirstFindAny,
    Match,
    Reduce,
    TakeWhile,
    DropWhile,
    ForEachOrdered,
    Peek,
}

impl Scenario {
    /// Every scenario, in presentation order.
    pub const ALL: [Scenario; 16] = [
        Scenario::PrintAll,
        Scenario::Map,
        Scenario::FlatMap,
        Scenario::Filter,
        Scenario::Sorted,
        Scenario::Limit,
        Scenario::Skip,
        Scenario::Count,
        Scenario::MinMax,
        Scenario::FindFirstFindAny,
        Scenario::Match,
        Scenario::Reduce,
        Scenario::TakeWhile,
        Scenario::DropWhile,
        Scenario::ForEachOrdered,
        Scenario::Peek,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Scenario::PrintAll => "print-all",
            Scenario::Map => "map",
            Scenario::FlatMap => "flat-map",
            Scenario::Filter => "filter",
            Scenario::Sorted => "sorted",
            Scenario::Limit => "limit",
            Scenario::Skip => "skip",
            Scenario::Count => "count",
            Scenario::MinMax => "min-max",
            Scenario::FindFirstFindAny => "find-first-find-any",
            Scenario::Match => "match",
            Scenario::Reduce => "reduce",
            Scenario::TakeWhile => "take-while",
            Scenario::DropWhile => "drop-while",
            Scenario::ForEachOrdered => "for-each-ordered",
            Scenario::Peek => "peek",
        }
    }

    /// Look a scenario up by [`Scenario::name`].
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }

    /// Run against a fresh sample roster, writing the result to `out`.
    pub fn run<W: Write>(
        self,
        engine: &ExecutionEngine,
        out: &mut W,
    ) -> Result<(), ScenarioError> {
        let mut employees = sample::employees();
        self.run_on(&mut employees, engine, out)
    }

    /// Run against `employees`. Only [`Scenario::Peek`] modifies them.
    pub fn run_on<W: Write>(
        self,
        employees: &mut [Employee],
        engine: &ExecutionEngine,
        out: &mut W,
    ) -> Result<(), ScenarioError> {
        match self {
            Scenario::PrintAll => processing::print_all(employees, out)?,
            Scenario::Map => {
                for name in map::first_names(employees) {
                    writeln!(out, "{name}")?;
                }
                writeln!(out)?;
                for name in map::full_names(employees) {
                    writeln!(out, "{name}")?;
                }
            }
            Scenario::FlatMap => {
                let per_employee: Vec<String> = map::skills_per_employee(employees)
                    .iter()
                    .map(|skills| format!("[{}]", skills.join(", ")))
                    .collect();
                writeln!(out, "[{}]", per_employee.join(", "))?;
                writeln!(out, "[{}]", map::distinct_skills(employees).join(", "))?;
            }
            Scenario::Filter => write_view(out, &filter::by_first_name_prefix(employees, 'O'))?,
            Scenario::Sorted => write_view(out, &sort::sorted_by_age(employees))?,
            Scenario::Limit => write_view(
                out,
                &sort::limit_after_sort(employees, |e| e.first_name().to_owned(), PAGE_SIZE),
            )?,
            Scenario::Skip => write_view(
                out,
                &sort::skip_after_sort(employees, |e| e.first_name().to_owned(), PAGE_SIZE),
            )?,
            Scenario::Count => {
                let n = reduce::count_matching(employees, |e| e.first_name().starts_with('B'));
                writeln!(out, "{n}")?;
            }
            Scenario::MinMax => {
                writeln!(out, "{}", search::youngest(employees)?)?;
                writeln!(out, "{}", search::most_skilled(employees)?)?;
            }
            Scenario::FindFirstFindAny => {
                let starts_with_b = |e: &Employee| e.first_name().starts_with('B');
                writeln!(out, "{}", search::find_first(employees, starts_with_b)?)?;
                writeln!(out, "{}", engine.find_any(employees, starts_with_b)?)?;
            }
            Scenario::Match => {
                let all_contain_a = search::all_match(employees, |e| e.first_name().contains('a'));
                let any_starts_with_w =
                    search::any_match(employees, |e| e.first_name().starts_with('W'));
                let none_contain_x = search::none_match(employees, |e| e.first_name().contains('x'));
                writeln!(out, "{all_contain_a}")?;
                writeln!(out, "{any_starts_with_w}")?;
                writeln!(out, "{none_contain_x}")?;
            }
            Scenario::Reduce => {
                writeln!(out, "{}", reduce::sum_ages_unseeded(employees)?)?;
                writeln!(out, "{}", reduce::sum_ages_seeded(employees))?;
                writeln!(out, "{}", reduce::sum_ages_combined(employees))?;
                writeln!(out, "{}", reduce::concat_first_names(employees)?)?;
            }
            Scenario::TakeWhile => {
                write_view(out, &sort::take_while_age_below(employees, AGE_THRESHOLD))?
            }
            Scenario::DropWhile => {
                write_view(out, &sort::drop_while_age_below(employees, AGE_THRESHOLD))?
            }
            Scenario::ForEachOrdered => {
                let t = engine.traverse_chars(SAMPLE_SENTENCE);
                writeln!(out, "{}", t.sequential)?;
                writeln!(out, "Multithreading: \t{}", t.unordered)?;
                writeln!(out, "Multithreading but ordered: \t{}", t.ordered)?;
            }
            Scenario::Peek => {
                let view = peek::peek_and_mutate(employees, PEEK_FIRST_NAME);
                write_list(out, view.iter().copied())?;
                writeln!(out)?;
                write_list(out, employees.iter())?;
            }
        }
        Ok(())
    }
}

/// Run every scenario in [`Scenario::ALL`] order, each under a `== name ==` header and followed
/// by a blank line. Stops at the first failure, including a failed write.
pub fn run_all<W: Write>(engine: &ExecutionEngine, out: &mut W) -> Result<(), ScenarioError> {
    for scenario in Scenario::ALL {
        writeln!(out, "== {scenario} ==")?;
        scenario.run(engine, out)?;
        writeln!(out)?;
    }
    Ok(())
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn write_view<W: Write>(out: &mut W, view: &[&Employee]) -> std::io::Result<()> {
    view.iter().try_for_each(|e| writeln!(out, "{e}"))
}

fn write_list<'a, W: Write>(
    out: &mut W,
    employees: impl Iterator<Item = &'a Employee>,
) -> std::io::Result<()> {
    let items: Vec<String> = employees.map(ToString::to_string).collect();
    writeln!(out, "[{}]", items.join("; "))
}
