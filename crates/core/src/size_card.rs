// Size-card template domain types
//
// A size card is a small table (e.g. Size / Chest / Length) attached to
// product pages. Templates are stored once and reused.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::StoreError;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Size-card template.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct SizeCardTemplate {
    /// Unique identifier for the template.
    pub id: Uuid,
    /// Unique display name.
    #[cfg_attr(feature = "openapi", schema(example = "T-shirt (unisex)"))]
    pub name: String,
    /// Optional note shown under the table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Column headers.
    pub columns: Vec<String>,
    /// Table rows; each row has one cell per column.
    pub rows: Vec<Vec<String>>,
    /// Timestamp when the template was created.
    pub created_at: DateTime<Utc>,
    /// Timestamp when the template was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Index of the first row whose cell count differs from `columns`, if any.
pub fn first_ragged_row(columns: &[String], rows: &[Vec<String>]) -> Option<usize> {
    rows.iter().position(|row| row.len() != columns.len())
}

/// Reject a table whose rows do not all match the column count.
pub fn ensure_rectangular(columns: &[String], rows: &[Vec<String>]) -> Result<(), StoreError> {
    match first_ragged_row(columns, rows) {
        Some(row) => Err(StoreError::RaggedTable {
            row,
            columns: columns.len(),
        }),
        None => Ok(()),
    }
}
