//! Pearson correlation between two numeric columns.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SiftError};

/// Correlation strength band on |r|.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorrelationStrength {
    Weak,
    Moderate,
    Strong,
}

impl CorrelationStrength {
    /// Band |r|: >= 0.7 strong, >= 0.3 moderate, else weak.
    pub fn of(r: f64) -> Self {
        let abs = r.abs();
        if abs >= 0.7 {
            CorrelationStrength::Strong
        } else if abs >= 0.3 {
            CorrelationStrength::Moderate
        } else {
            CorrelationStrength::Weak
        }
    }
}

/// Result of a Pearson correlation analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationResult {
    /// Pearson r, nominally in [-1, 1]. Zero when either variance is zero.
    pub correlation: f64,
    pub strength: CorrelationStrength,
    /// Sign-and-strength label, e.g. "strong positive correlation".
    pub interpretation: String,
}

// Strict comparisons at the band edges: r exactly 0 reads as weak negative.
fn interpret(r: f64) -> &'static str {
    if r > 0.7 {
        "strong positive correlation"
    } else if r > 0.3 {
        "moderate positive correlation"
    } else if r > 0.0 {
        "weak positive correlation"
    } else if r > -0.3 {
        "weak negative correlation"
    } else if r > -0.7 {
        "moderate negative correlation"
    } else {
        "strong negative correlation"
    }
}

/// Compute the Pearson correlation of two paired sequences.
///
/// The sequences are truncated to the shorter length and paired by position.
/// At least two pairs are required.
pub fn correlate(x: &[f64], y: &[f64]) -> Result<CorrelationResult> {
    let len = x.len().min(y.len());
    let (x, y) = (&x[..len], &y[..len]);

    if len < 2 {
        return Err(SiftError::InsufficientData(
            "correlation requires at least 2 paired values".to_string(),
        ));
    }

    let x_mean = x.iter().sum::<f64>() / len as f64;
    let y_mean = y.iter().sum::<f64>() / len as f64;

    let mut numerator = 0.0;
    let mut x_variance = 0.0;
    let mut y_variance = 0.0;
    for i in 0..len {
        let x_diff = x[i] - x_mean;
        let y_diff = y[i] - y_mean;
        numerator += x_diff * y_diff;
        x_variance += x_diff * x_diff;
        y_variance += y_diff * y_diff;
    }

    let denominator = (x_variance * y_variance).sqrt();
    let correlation = if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    };

    Ok(CorrelationResult {
        correlation,
        strength: CorrelationStrength::of(correlation),
        interpretation: interpret(correlation).to_string(),
    })
}
