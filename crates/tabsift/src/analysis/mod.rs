//! Statistical analyses over numeric column data.
//!
//! Every function here is a synchronous, pure transformation: numeric value
//! sequences in, immutable result records out. Expected insufficient-data
//! situations return [`crate::error::SiftError`]; degenerate numerics (zero
//! variance, identical x values) propagate as NaN inside success records.

mod clustering;
mod correlation;
mod insights;
mod outliers;
mod pairing;
mod regression;
mod statistics;

pub use clustering::{Cluster, ClusterResult, KMeans, Point};
pub use correlation::{CorrelationResult, CorrelationStrength, correlate};
pub use insights::{correlation_insights, regression_insights, statistics_insights};
pub use outliers::{Outlier, OutlierMethod, OutlierResult, OutlierTag, detect_outliers};
pub use pairing::{PairingMode, numeric_values, paired_columns};
pub use regression::{RegressionResult, fit_linear};
pub use statistics::{DescriptiveStatistics, describe};
