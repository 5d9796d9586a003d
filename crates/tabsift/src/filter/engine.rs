//! Predicate evaluation, row filtering, and ranked limiting.

use serde::{Deserialize, Serialize};

use crate::inference::TypeDetector;
use crate::schema::{Column, ColumnType};
use crate::table::{DataTable, parse_numeric, row_cell};

use super::condition::{FilterCondition, FilterLogic, FilterOperator, FilterSet};

/// How many rows of the sorted result to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowLimit {
    /// Keep everything, in the original row order.
    All,
    /// Keep the N largest values, displayed descending.
    Top(usize),
    /// Keep the N smallest values, displayed ascending.
    Bottom(usize),
}

/// Evaluate one condition against one row.
///
/// Numeric columns parse both the cell and the condition value; if either
/// fails to parse the condition is false. Textual columns compare
/// case-insensitively, with absent cells reading as empty. An operator from
/// the wrong family for the column type is false.
pub fn evaluate(row: &[String], condition: &FilterCondition, column_type: ColumnType) -> bool {
    let cell = row_cell(row, condition.column);

    match column_type {
        ColumnType::Numeric => {
            let (Some(cell_value), Some(condition_value)) =
                (parse_numeric(cell), parse_numeric(&condition.value))
            else {
                return false;
            };
            match condition.operator {
                FilterOperator::Eq => cell_value == condition_value,
                FilterOperator::Ne => cell_value != condition_value,
                FilterOperator::Gt => cell_value > condition_value,
                FilterOperator::Gte => cell_value >= condition_value,
                FilterOperator::Lt => cell_value < condition_value,
                FilterOperator::Lte => cell_value <= condition_value,
                _ => false,
            }
        }
        ColumnType::Textual => {
            let cell_value = cell.to_lowercase();
            let condition_value = condition.value.to_lowercase();
            match condition.operator {
                FilterOperator::Contains => cell_value.contains(&condition_value),
                FilterOperator::NotContains => !cell_value.contains(&condition_value),
                FilterOperator::Equals => cell_value == condition_value,
                FilterOperator::NotEquals => cell_value != condition_value,
                FilterOperator::StartsWith => cell_value.starts_with(&condition_value),
                FilterOperator::EndsWith => cell_value.ends_with(&condition_value),
                FilterOperator::IsEmpty => cell_value.is_empty(),
                FilterOperator::IsNotEmpty => !cell_value.is_empty(),
                _ => false,
            }
        }
    }
}

fn column_type_of(columns: &[Column], index: usize) -> ColumnType {
    columns
        .get(index)
        .map(|column| column.column_type)
        .unwrap_or_default()
}

/// Keep the rows matching the filter set.
///
/// An empty set returns the table unchanged. The result always carries the
/// original headers, even when no data row matches.
pub fn apply_filter(table: &DataTable, columns: &[Column], filter: &FilterSet) -> DataTable {
    if filter.is_empty() {
        return table.clone();
    }

    let rows = table
        .rows
        .iter()
        .filter(|row| match filter.logic() {
            FilterLogic::And => filter
                .conditions()
                .all(|c| evaluate(row, c, column_type_of(columns, c.column))),
            FilterLogic::Or => filter
                .conditions()
                .any(|c| evaluate(row, c, column_type_of(columns, c.column))),
        })
        .cloned()
        .collect();

    DataTable::new(table.headers.clone(), rows)
}

/// Sort by a column and keep the top or bottom N rows.
///
/// Sorting is descending: numeric for numeric columns (cells that do not
/// parse become NaN and collect at the front), reverse lexicographic for
/// textual columns. `Bottom` reverses into ascending order before
/// truncating, so "bottom N" displays the N smallest values smallest-first.
pub fn apply_limit(
    table: &DataTable,
    columns: &[Column],
    sort_column: usize,
    limit: RowLimit,
) -> DataTable {
    let count = match limit {
        RowLimit::All => return table.clone(),
        RowLimit::Top(count) | RowLimit::Bottom(count) => count,
    };

    let mut rows = table.rows.clone();
    match column_type_of(columns, sort_column) {
        ColumnType::Numeric => rows.sort_by(|a, b| {
            let a_value = parse_numeric(row_cell(a, sort_column)).unwrap_or(f64::NAN);
            let b_value = parse_numeric(row_cell(b, sort_column)).unwrap_or(f64::NAN);
            b_value.total_cmp(&a_value)
        }),
        ColumnType::Textual => {
            rows.sort_by(|a, b| row_cell(b, sort_column).cmp(row_cell(a, sort_column)));
        }
    }

    if matches!(limit, RowLimit::Bottom(_)) {
        rows.reverse();
    }
    rows.truncate(count);

    DataTable::new(table.headers.clone(), rows)
}

/// Stateful filtering facade over the last-set table.
///
/// Holds the original table, its inferred column metadata, and the most
/// recent filter result; `limit` ranks whatever `apply` last produced.
/// Callers must treat the table as a snapshot for the duration of one
/// operation and refresh it via [`FilterEngine::set_data`].
#[derive(Debug, Clone, Default)]
pub struct FilterEngine {
    detector: TypeDetector,
    table: DataTable,
    columns: Vec<Column>,
    filtered: DataTable,
}

impl FilterEngine {
    /// Create an engine with no data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the table, recompute column metadata, and reset the filter.
    pub fn set_data(&mut self, table: DataTable) {
        self.columns = self.detector.infer_columns(&table);
        self.filtered = table.clone();
        self.table = table;
    }

    /// Column metadata for the current table.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Apply a filter set to the original table and keep the result.
    pub fn apply(&mut self, filter: &FilterSet) -> &DataTable {
        self.filtered = apply_filter(&self.table, &self.columns, filter);
        &self.filtered
    }

    /// Rank and truncate the current filter result.
    pub fn limit(&self, sort_column: usize, limit: RowLimit) -> DataTable {
        apply_limit(&self.filtered, &self.columns, sort_column, limit)
    }

    /// Discard the current filter result, restoring the original rows.
    pub fn reset(&mut self) {
        self.filtered = self.table.clone();
    }

    /// The most recent filter result.
    pub fn filtered(&self) -> &DataTable {
        &self.filtered
    }
}
