//! Core data model.
//!
//! Recipes operate on slices of [`Employee`] records. Every field is read-only except the first
//! name, which exists so the peek-and-mutate recipe can demonstrate mutation during traversal.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single employee record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    first_name: String,
    last_name: String,
    age: u32,
    skills: Vec<String>,
}

impl Employee {
    /// Create a new employee.
    pub fn new<S>(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        age: u32,
        skills: impl IntoIterator<Item = S>,
    ) -> Self
    where
        S: Into<String>,
    {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            age,
            skills: skills.into_iter().map(Into::into).collect(),
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    /// Skills in the order they were declared.
    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    /// Overwrite the first name.
    ///
    /// This is the only mutator on the record.
    pub fn set_first_name(&mut self, first_name: impl Into<String>) {
        self.first_name = first_name.into();
    }

    /// `"first last"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}, age {}, skills [{}]",
            self.first_name,
            self.last_name,
            self.age,
            self.skills.join(", ")
        )
    }
}
