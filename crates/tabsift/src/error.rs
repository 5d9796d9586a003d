//! Error types for the tabsift library.

use thiserror::Error;

/// Main error type for tabsift operations.
///
/// Only expected insufficient-data situations are reported here. Degenerate
/// numeric conditions (zero-variance denominators in correlation, regression,
/// or z-scoring) are not converted to errors; they propagate as NaN inside
/// otherwise-successful results so the caller can see the degeneracy.
#[derive(Debug, Error)]
pub enum SiftError {
    /// Not enough usable values for the requested analysis.
    #[error("insufficient data: {0}")]
    InsufficientData(String),

    /// Fewer data points than requested clusters.
    #[error("point count ({points}) is less than cluster count ({k})")]
    ClusterCount { points: usize, k: usize },

    /// Invalid analysis parameters.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for tabsift operations.
pub type Result<T> = std::result::Result<T, SiftError>;
