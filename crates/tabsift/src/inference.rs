//! Sample-based column type inference.

use crate::schema::{Column, ColumnType};
use crate::table::{DataTable, parse_numeric, row_cell};

/// Classifies columns as numeric or textual from a data sample.
///
/// A column is `Numeric` when at least `numeric_ratio` of the sampled cells
/// parse as numbers; empty cells count against the ratio. A table with no
/// data rows gives no signal, so every column classifies `Textual`.
#[derive(Debug, Clone)]
pub struct TypeDetector {
    /// Maximum number of data rows to sample per column.
    pub sample_rows: usize,
    /// Fraction of sampled cells that must parse as numbers.
    pub numeric_ratio: f64,
}

impl TypeDetector {
    /// Create a detector with default settings (5 sample rows, 70% ratio).
    pub fn new() -> Self {
        Self {
            sample_rows: 5,
            numeric_ratio: 0.7,
        }
    }

    /// Classify a single column. Pure function of the table.
    pub fn detect(&self, table: &DataTable, column: usize) -> ColumnType {
        if table.rows.is_empty() {
            return ColumnType::Textual;
        }

        let sample: Vec<&str> = table
            .rows
            .iter()
            .take(self.sample_rows)
            .map(|row| row_cell(row, column))
            .collect();
        let numeric_count = sample
            .iter()
            .filter(|value| parse_numeric(value).is_some())
            .count();

        if numeric_count as f64 >= sample.len() as f64 * self.numeric_ratio {
            ColumnType::Numeric
        } else {
            ColumnType::Textual
        }
    }

    /// Build column metadata for every column in the table.
    pub fn infer_columns(&self, table: &DataTable) -> Vec<Column> {
        table
            .headers
            .iter()
            .enumerate()
            .map(|(index, name)| Column::new(index, name.clone(), self.detect(table, index)))
            .collect()
    }
}

impl Default for TypeDetector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_table(headers: Vec<&str>, rows: Vec<Vec<&str>>) -> DataTable {
        DataTable::new(
            headers.into_iter().map(String::from).collect(),
            rows.into_iter()
                .map(|r| r.into_iter().map(String::from).collect())
                .collect(),
        )
    }

    #[test]
    fn test_numeric_column() {
        let table = make_table(
            vec!["count"],
            vec![vec!["1"], vec!["2"], vec!["3"], vec!["100"]],
        );
        let detector = TypeDetector::new();
        assert_eq!(detector.detect(&table, 0), ColumnType::Numeric);
    }

    #[test]
    fn test_textual_column() {
        let table = make_table(vec!["name"], vec![vec!["Alice"], vec!["Bob"], vec!["Carol"]]);
        let detector = TypeDetector::new();
        assert_eq!(detector.detect(&table, 0), ColumnType::Textual);
    }

    #[test]
    fn test_ratio_boundary() {
        // 4 of 5 numeric = 80% >= 70%.
        let mostly_numeric = make_table(
            vec!["v"],
            vec![vec!["1"], vec!["2"], vec!["x"], vec!["4"], vec!["5"]],
        );
        // 3 of 5 numeric = 60% < 70%.
        let mostly_text = make_table(
            vec!["v"],
            vec![vec!["1"], vec!["2"], vec!["x"], vec!["y"], vec!["5"]],
        );
        let detector = TypeDetector::new();
        assert_eq!(detector.detect(&mostly_numeric, 0), ColumnType::Numeric);
        assert_eq!(detector.detect(&mostly_text, 0), ColumnType::Textual);
    }

    #[test]
    fn test_empty_cells_count_against_ratio() {
        let table = make_table(
            vec!["v"],
            vec![vec!["1"], vec![""], vec![""], vec!["4"], vec!["5"]],
        );
        let detector = TypeDetector::new();
        assert_eq!(detector.detect(&table, 0), ColumnType::Textual);
    }

    #[test]
    fn test_header_only_defaults_textual() {
        let table = make_table(vec!["count"], vec![]);
        let detector = TypeDetector::new();
        assert_eq!(detector.detect(&table, 0), ColumnType::Textual);
    }

    #[test]
    fn test_sample_ignores_rows_past_window() {
        // First five rows are numeric; later text rows are outside the sample.
        let table = make_table(
            vec!["v"],
            vec![
                vec!["1"],
                vec!["2"],
                vec!["3"],
                vec!["4"],
                vec!["5"],
                vec!["oops"],
                vec!["oops"],
            ],
        );
        let detector = TypeDetector::new();
        assert_eq!(detector.detect(&table, 0), ColumnType::Numeric);
    }

    #[test]
    fn test_infer_columns() {
        let table = make_table(
            vec!["name", "age"],
            vec![vec!["Alice", "30"], vec!["Bob", "25"]],
        );
        let columns = TypeDetector::new().infer_columns(&table);
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].name, "name");
        assert_eq!(columns[0].column_type, ColumnType::Textual);
        assert_eq!(columns[1].column_type, ColumnType::Numeric);
        assert_eq!(columns[1].index, 1);
    }
}
