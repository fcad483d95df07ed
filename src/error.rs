use thiserror::Error;

/// Convenience result type for recipes that need at least one qualifying element.
pub type RecipeResult<T> = Result<T, RecipeError>;

/// Convenience result type for roster ingestion.
pub type IngestionResult<T> = Result<T, IngestionError>;

/// Error type returned by recipes.
///
/// Every recipe is total except the ones that must produce exactly one element (min/max,
/// find-first/find-any) or that reduce without a seed. Those fail with [`RecipeError::NotFound`]
/// when no element qualifies.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecipeError {
    /// The operation required at least one qualifying element and found none.
    #[error("not found: {operation} produced no element")]
    NotFound { operation: &'static str },
}

impl RecipeError {
    pub(crate) fn not_found(operation: &'static str) -> Self {
        Self::NotFound { operation }
    }
}

/// Error type returned when loading a roster from JSON.
#[derive(Debug, Error)]
pub enum IngestionError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The input is not valid JSON or does not match the employee shape.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// A record parsed but breaks a roster invariant.
    #[error("invalid employee at row {row}: {message}")]
    InvalidRecord { row: usize, message: String },
}

/// Error type returned when rendering a scenario to a writer.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error(transparent)]
    Recipe(#[from] RecipeError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
