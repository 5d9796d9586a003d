//! Short human-readable observations derived from analysis results.

use super::correlation::CorrelationResult;
use super::regression::RegressionResult;
use super::statistics::DescriptiveStatistics;

/// Observations about a descriptive-statistics result.
pub fn statistics_insights(stats: &DescriptiveStatistics) -> Vec<String> {
    let mut insights = Vec::new();

    if stats.std_deviation / stats.mean > 0.5 {
        insights.push("Values are widely dispersed relative to the mean.".to_string());
    }
    if (stats.mean - stats.median).abs() > stats.std_deviation * 0.5 {
        insights.push("The distribution may be skewed.".to_string());
    }

    insights
}

/// Observations about a correlation result.
pub fn correlation_insights(result: &CorrelationResult) -> Vec<String> {
    let mut insights = Vec::new();

    if result.correlation.abs() > 0.7 {
        insights.push("The two variables are strongly related.".to_string());
    }

    insights
}

/// Observations about a regression result.
pub fn regression_insights(result: &RegressionResult) -> Vec<String> {
    let mut insights = Vec::new();

    if result.r_squared > 0.8 {
        insights.push("The linear model fits the data well.".to_string());
    } else if result.r_squared < 0.3 {
        insights.push("The linear relationship appears weak.".to_string());
    }

    insights
}
