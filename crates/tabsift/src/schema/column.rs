//! Column descriptor consumed by filtering, analysis, and the UI layer.

use serde::{Deserialize, Serialize};

use super::types::ColumnType;

/// Metadata for a single column.
///
/// Derived from the table, never stored independently of it: recomputed on
/// every `set_data`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Zero-based position in the table.
    pub index: usize,
    /// Column name from the header row.
    pub name: String,
    /// Inferred data type.
    pub column_type: ColumnType,
}

impl Column {
    /// Create a new column descriptor.
    pub fn new(index: usize, name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            index,
            name: name.into(),
            column_type,
        }
    }
}
