//! JSON roster ingestion.
//!
//! Supported inputs:
//! - A JSON array of employee objects: `[{"firstName":"Ada", ...}, ...]`
//! - A single employee object, compact or pretty-printed
//! - Newline-delimited JSON (NDJSON), one employee object per line
//!
//! Every object needs `firstName`, `lastName`, `age` (non-negative integer) and `skills`
//! (array of strings, no repeats within one employee).

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{IngestionError, IngestionResult};
use crate::types::Employee;

/// Ingest a roster from a JSON file.
pub fn ingest_employees_from_path(path: impl AsRef<Path>) -> IngestionResult<Vec<Employee>> {
    let text = fs::read_to_string(path)?;
    ingest_employees_from_str(&text)
}

/// Ingest a roster from an in-memory JSON string.
pub fn ingest_employees_from_str(input: &str) -> IngestionResult<Vec<Employee>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(IngestionError::InvalidRecord {
            row: 0,
            message: "json input is empty".to_string(),
        });
    }

    // Whole input as one value first, then NDJSON.
    let employees = match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(serde_json::Value::Array(items)) => items
            .into_iter()
            .map(serde_json::from_value::<Employee>)
            .collect::<Result<Vec<_>, _>>()?,
        Ok(obj @ serde_json::Value::Object(_)) => vec![serde_json::from_value::<Employee>(obj)?],
        Ok(_) => {
            return Err(IngestionError::InvalidRecord {
                row: 0,
                message: "json must be an array of objects, an object, or NDJSON".to_string(),
            });
        }
        Err(_) => {
            let mut out = Vec::new();
            for (i, line) in trimmed.lines().enumerate() {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let employee = serde_json::from_str::<Employee>(line).map_err(|e| {
                    IngestionError::InvalidRecord {
                        row: i + 1,
                        message: format!("invalid ndjson at line {}: {e}", i + 1),
                    }
                })?;
                out.push(employee);
            }
            out
        }
    };

    for (idx0, e) in employees.iter().enumerate() {
        validate(idx0 + 1, e)?;
    }
    Ok(employees)
}

fn validate(row: usize, e: &Employee) -> IngestionResult<()> {
    let mut seen = HashSet::with_capacity(e.skills().len());
    if let Some(dup) = e.skills().iter().find(|s| !seen.insert(s.as_str())) {
        return Err(IngestionError::InvalidRecord {
            row,
            message: format!("skill '{dup}' is listed more than once"),
        });
    }
    Ok(())
}
