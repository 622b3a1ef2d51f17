// Storage-facing domain errors
//
// Storage returns anyhow::Result; handlers downcast to StoreError when they
// need to tell a conflict or a rejected write apart from an infrastructure
// failure.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A unique field (size-card name) is already taken.
    #[error("{entity} '{value}' already exists")]
    Conflict { entity: &'static str, value: String },

    /// A size-card write would leave a row whose cell count differs from the columns.
    #[error("every row must have one cell per column")]
    RaggedTable { row: usize, columns: usize },
}

impl StoreError {
    pub fn conflict(entity: &'static str, value: impl Into<String>) -> Self {
        Self::Conflict {
            entity,
            value: value.into(),
        }
    }
}
