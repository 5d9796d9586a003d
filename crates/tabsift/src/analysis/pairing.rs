//! Numeric column extraction and two-column pairing.

use serde::{Deserialize, Serialize};

use crate::table::{DataTable, parse_numeric, row_cell};

/// How two extracted columns are paired for bivariate analyses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairingMode {
    /// Extract each column independently (dropping its own unparseable
    /// cells), truncate to the shorter length, and pair by position.
    ///
    /// Pairs only correspond to the same original row when neither column
    /// dropped a value; with uneven drops the pairing misaligns. This is the
    /// default.
    #[default]
    Positional,
    /// Pair by original row, keeping only rows where both columns parse.
    RowAligned,
}

/// Extract the parseable numeric values of a column, in row order.
pub fn numeric_values(table: &DataTable, column: usize) -> Vec<f64> {
    table
        .column_values(column)
        .filter_map(parse_numeric)
        .collect()
}

/// Extract two columns as paired numeric sequences of equal length.
pub fn paired_columns(
    table: &DataTable,
    x_column: usize,
    y_column: usize,
    mode: PairingMode,
) -> (Vec<f64>, Vec<f64>) {
    match mode {
        PairingMode::Positional => {
            let mut x = numeric_values(table, x_column);
            let mut y = numeric_values(table, y_column);
            let len = x.len().min(y.len());
            x.truncate(len);
            y.truncate(len);
            (x, y)
        }
        PairingMode::RowAligned => {
            let mut x = Vec::new();
            let mut y = Vec::new();
            for row in &table.rows {
                let x_value = parse_numeric(row_cell(row, x_column));
                let y_value = parse_numeric(row_cell(row, y_column));
                if let (Some(x_value), Some(y_value)) = (x_value, y_value) {
                    x.push(x_value);
                    y.push(y_value);
                }
            }
            (x, y)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_with_gap() -> DataTable {
        // Row 2 has an unparseable x; positional pairing shifts the x
        // sequence up while y keeps all four values.
        DataTable::new(
            vec!["x".into(), "y".into()],
            vec![
                vec!["1".into(), "10".into()],
                vec!["bad".into(), "20".into()],
                vec!["3".into(), "30".into()],
                vec!["4".into(), "40".into()],
            ],
        )
    }

    #[test]
    fn test_numeric_values_drops_unparseable() {
        let table = table_with_gap();
        assert_eq!(numeric_values(&table, 0), vec![1.0, 3.0, 4.0]);
        assert_eq!(numeric_values(&table, 1), vec![10.0, 20.0, 30.0, 40.0]);
    }

    #[test]
    fn test_positional_truncates_to_shorter() {
        let table = table_with_gap();
        let (x, y) = paired_columns(&table, 0, 1, PairingMode::Positional);
        assert_eq!(x, vec![1.0, 3.0, 4.0]);
        // The misalignment positional pairing carries: 3.0 pairs with 20.0.
        assert_eq!(y, vec![10.0, 20.0, 30.0]);
    }

    #[test]
    fn test_row_aligned_drops_broken_rows() {
        let table = table_with_gap();
        let (x, y) = paired_columns(&table, 0, 1, PairingMode::RowAligned);
        assert_eq!(x, vec![1.0, 3.0, 4.0]);
        assert_eq!(y, vec![10.0, 30.0, 40.0]);
    }

    #[test]
    fn test_modes_agree_on_clean_data() {
        let table = DataTable::new(
            vec!["x".into(), "y".into()],
            vec![
                vec!["1".into(), "10".into()],
                vec!["2".into(), "20".into()],
            ],
        );
        let positional = paired_columns(&table, 0, 1, PairingMode::Positional);
        let aligned = paired_columns(&table, 0, 1, PairingMode::RowAligned);
        assert_eq!(positional, aligned);
    }
}
