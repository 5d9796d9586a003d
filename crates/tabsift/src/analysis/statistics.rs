//! Descriptive statistics for a single numeric column.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SiftError};

/// Descriptive statistics for one numeric value sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescriptiveStatistics {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    /// Population variance (divides by n, not n-1).
    pub variance: f64,
    pub std_deviation: f64,
    pub min: f64,
    pub max: f64,
    /// Sorted element at position `floor(n * 0.25)`; no interpolation.
    pub q1: f64,
    /// Sorted element at position `floor(n * 0.75)`; no interpolation.
    pub q3: f64,
    pub iqr: f64,
    pub range: f64,
}

/// Compute descriptive statistics over a value sequence.
pub fn describe(values: &[f64]) -> Result<DescriptiveStatistics> {
    if values.is_empty() {
        return Err(SiftError::InsufficientData(
            "no numeric values to describe".to_string(),
        ));
    }

    let n = values.len();
    let mean = values.iter().sum::<f64>() / n as f64;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n as f64;

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let median = if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    };
    let q1 = sorted[n / 4];
    let q3 = sorted[n * 3 / 4];
    let min = sorted[0];
    let max = sorted[n - 1];

    Ok(DescriptiveStatistics {
        count: n,
        mean,
        median,
        variance,
        std_deviation: variance.sqrt(),
        min,
        max,
        q1,
        q3,
        iqr: q3 - q1,
        range: max - min,
    })
}
