//! Main analysis facade and public entry point.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::{
    ClusterResult, CorrelationResult, DescriptiveStatistics, KMeans, OutlierMethod,
    OutlierResult, PairingMode, Point, RegressionResult, correlate, describe, detect_outliers,
    fit_linear, numeric_values, paired_columns,
};
use crate::error::Result;
use crate::inference::TypeDetector;
use crate::schema::Column;
use crate::table::DataTable;

/// Configuration for the analysis engine.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Type inference settings.
    pub detector: TypeDetector,
    /// How bivariate analyses pair the two extracted columns.
    pub pairing: PairingMode,
    /// IQR bound multiplier for outlier detection.
    pub iqr_multiplier: f64,
    /// Z-score threshold for outlier detection.
    pub z_score_threshold: f64,
    /// K-means iteration cap.
    pub kmeans_max_iterations: usize,
    /// K-means per-coordinate convergence tolerance.
    pub kmeans_tolerance: f64,
    /// Seed for k-means centroid initialization; None uses a system source.
    pub seed: Option<u64>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            detector: TypeDetector::new(),
            pairing: PairingMode::Positional,
            iqr_multiplier: 1.5,
            z_score_threshold: 2.0,
            kmeans_max_iterations: 100,
            kmeans_tolerance: 1e-3,
            seed: None,
        }
    }
}

/// Snapshot of the current table's shape and column metadata.
///
/// Consumed by the UI layer to populate column and axis pickers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableProfile {
    pub row_count: usize,
    pub column_count: usize,
    pub numeric_column_count: usize,
    pub columns: Vec<Column>,
    /// When this profile was computed.
    pub profiled_at: DateTime<Utc>,
}

/// The main analysis engine.
///
/// Holds the last-set table and its column metadata (recomputed on every
/// [`Analyzer::set_data`]) and dispatches the five analyses over it. All
/// results are immutable value records; the analyzer never mutates the table.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalyzerConfig,
    table: DataTable,
    columns: Vec<Column>,
}

impl Analyzer {
    /// Create an analyzer with default configuration and no data.
    pub fn new() -> Self {
        Self::with_config(AnalyzerConfig::default())
    }

    /// Create an analyzer with custom configuration.
    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self {
            config,
            table: DataTable::default(),
            columns: Vec::new(),
        }
    }

    /// Replace the table and recompute column metadata.
    pub fn set_data(&mut self, table: DataTable) {
        self.columns = self.config.detector.infer_columns(&table);
        self.table = table;
    }

    /// The current table.
    pub fn table(&self) -> &DataTable {
        &self.table
    }

    /// Column metadata for the current table.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// The columns classified as numeric.
    pub fn numeric_columns(&self) -> impl Iterator<Item = &Column> {
        self.columns
            .iter()
            .filter(|column| column.column_type.is_numeric())
    }

    /// Extract the parseable numeric values of a column, in row order.
    pub fn column_data(&self, column: usize) -> Vec<f64> {
        numeric_values(&self.table, column)
    }

    /// Descriptive statistics for one column.
    pub fn statistics(&self, column: usize) -> Result<DescriptiveStatistics> {
        describe(&self.column_data(column))
    }

    /// Pearson correlation between two columns.
    pub fn correlation(&self, x_column: usize, y_column: usize) -> Result<CorrelationResult> {
        let (x, y) = paired_columns(&self.table, x_column, y_column, self.config.pairing);
        correlate(&x, &y)
    }

    /// Least-squares linear regression of one column on another.
    pub fn regression(&self, x_column: usize, y_column: usize) -> Result<RegressionResult> {
        let (x, y) = paired_columns(&self.table, x_column, y_column, self.config.pairing);
        fit_linear(&x, &y)
    }

    /// K-means clustering over two columns.
    pub fn kmeans(&self, x_column: usize, y_column: usize, k: usize) -> Result<ClusterResult> {
        let (x, y) = paired_columns(&self.table, x_column, y_column, self.config.pairing);
        let points: Vec<Point> = x
            .into_iter()
            .zip(y)
            .map(|(x, y)| Point::new(x, y))
            .collect();

        let mut model = KMeans::new(k)
            .max_iterations(self.config.kmeans_max_iterations)
            .tolerance(self.config.kmeans_tolerance);
        if let Some(seed) = self.config.seed {
            model = model.seed(seed);
        }
        model.fit(&points)
    }

    /// Outlier detection over one column.
    pub fn outliers(&self, column: usize, method: OutlierMethod) -> Result<OutlierResult> {
        detect_outliers(
            &self.column_data(column),
            method,
            self.config.iqr_multiplier,
            self.config.z_score_threshold,
        )
    }

    /// Profile the current table for display.
    pub fn profile(&self) -> TableProfile {
        TableProfile {
            row_count: self.table.row_count(),
            column_count: self.table.column_count(),
            numeric_column_count: self.numeric_columns().count(),
            columns: self.columns.clone(),
            profiled_at: Utc::now(),
        }
    }
}
