//! Tabsift: tabular filtering and statistical analysis engine.
//!
//! Tabsift explores a small in-memory table (header row + data rows) by
//! filtering, ranked limiting, and running statistical analyses: descriptive
//! statistics, Pearson correlation, linear regression, k-means clustering,
//! and outlier detection.
//!
//! # Core Principles
//!
//! - **Plain data in, plain data out**: no rendering, no I/O; results are
//!   immutable value records for an external chart/report layer
//! - **Typed columns**: every column classifies as numeric or textual, and
//!   predicates, sorting, and analyses dispatch on that classification
//! - **Honest degeneracy**: insufficient data is a structured error; NaN from
//!   zero-variance inputs is surfaced, never masked
//!
//! # Example
//!
//! ```
//! use tabsift::{Analyzer, DataTable};
//!
//! let table = DataTable::from_grid(vec![
//!     vec!["region".into(), "sales".into()],
//!     vec!["East".into(), "100".into()],
//!     vec!["West".into(), "300".into()],
//!     vec!["East".into(), "200".into()],
//! ]);
//!
//! let mut analyzer = Analyzer::new();
//! analyzer.set_data(table);
//!
//! let stats = analyzer.statistics(1).unwrap();
//! assert_eq!(stats.mean, 200.0);
//! ```

pub mod analysis;
pub mod error;
pub mod filter;
pub mod inference;
pub mod schema;
pub mod table;

mod analyzer;

pub use crate::analyzer::{Analyzer, AnalyzerConfig, TableProfile};
pub use analysis::{
    Cluster, ClusterResult, CorrelationResult, CorrelationStrength, DescriptiveStatistics,
    KMeans, Outlier, OutlierMethod, OutlierResult, OutlierTag, PairingMode, Point,
    RegressionResult,
};
pub use error::{Result, SiftError};
pub use filter::{
    ConditionId, FilterCondition, FilterEngine, FilterLogic, FilterOperator, FilterSet, RowLimit,
};
pub use inference::TypeDetector;
pub use schema::{Column, ColumnType};
pub use table::DataTable;
