//! IQR and z-score outlier detection.

use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::statistics::describe;

/// Which detection rule to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutlierMethod {
    /// Outside `[q1 - m*iqr, q3 + m*iqr]`.
    Iqr,
    /// `|value - mean| / std_deviation` above a threshold.
    ZScore,
}

/// Which side of the IQR bounds a value fell on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutlierTag {
    Low,
    High,
}

/// One flagged value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outlier {
    /// 1-based position within the analyzed value sequence (after
    /// unparseable cells were dropped), not the original table row.
    pub row: usize,
    pub value: f64,
    /// Side of the bounds; IQR method only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<OutlierTag>,
    /// Absolute z-score; z-score method only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_score: Option<f64>,
}

/// Result of an outlier scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlierResult {
    pub method: OutlierMethod,
    pub outliers: Vec<Outlier>,
    /// Number of analyzed values.
    pub total_count: usize,
    pub outlier_count: usize,
    /// Share of analyzed values flagged, as a percentage with 2 decimals.
    pub outlier_percentage: f64,
}

/// Scan a value sequence for outliers.
///
/// Statistics are computed first and their insufficient-data error
/// propagates. With zero standard deviation the z-score is NaN for every
/// value and nothing is flagged (NaN comparisons are false); this mirrors
/// the NaN-propagation stance taken across the analyses.
pub fn detect_outliers(
    values: &[f64],
    method: OutlierMethod,
    iqr_multiplier: f64,
    z_score_threshold: f64,
) -> Result<OutlierResult> {
    let stats = describe(values)?;
    let mut outliers = Vec::new();

    match method {
        OutlierMethod::Iqr => {
            let lower = stats.q1 - iqr_multiplier * stats.iqr;
            let upper = stats.q3 + iqr_multiplier * stats.iqr;
            for (index, &value) in values.iter().enumerate() {
                if value < lower || value > upper {
                    outliers.push(Outlier {
                        row: index + 1,
                        value,
                        tag: Some(if value < lower {
                            OutlierTag::Low
                        } else {
                            OutlierTag::High
                        }),
                        z_score: None,
                    });
                }
            }
        }
        OutlierMethod::ZScore => {
            for (index, &value) in values.iter().enumerate() {
                let z_score = ((value - stats.mean) / stats.std_deviation).abs();
                if z_score > z_score_threshold {
                    outliers.push(Outlier {
                        row: index + 1,
                        value,
                        tag: None,
                        z_score: Some(z_score),
                    });
                }
            }
        }
    }

    let outlier_count = outliers.len();
    let outlier_percentage =
        round2(outlier_count as f64 / values.len() as f64 * 100.0);

    Ok(OutlierResult {
        method,
        outliers,
        total_count: values.len(),
        outlier_count,
        outlier_percentage,
    })
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
