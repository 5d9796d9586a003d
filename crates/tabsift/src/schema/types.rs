//! Core type definitions for column classification.

use serde::{Deserialize, Serialize};

/// Inferred data type for a column.
///
/// Classification is deliberately two-variant: a column either carries
/// numbers or it carries text. Everything downstream (operator sets,
/// predicate evaluation, sort order) dispatches on this.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    /// Values parse as numbers.
    Numeric,
    /// Everything else.
    #[default]
    Textual,
}

impl ColumnType {
    /// Returns true if this type is numeric.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnType::Numeric)
    }
}
