//! Error types for the quality engine.
//!
//! Every variant is a precondition violation: it is detected before any
//! engine output is drawn, and no partial table is produced.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Analysis errors.
///
/// # Examples
/// ```
/// use prng_quality::AnalysisError;
///
/// let err = AnalysisError::InvalidPointCount(0);
/// assert!(format!("{}", err).contains("point count"));
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AnalysisError {
    /// Engine name not present in the registry.
    #[error("Unknown engine kind: {0}")]
    UnknownEngineKind(String),

    /// Sample count of a series must be positive.
    #[error("Invalid sample count {0}: must be positive")]
    InvalidSampleCount(usize),

    /// Table dimensions must both be positive.
    #[error("Invalid dimensions {rows} x {cols}: both must be positive")]
    InvalidDimensions {
        /// Requested row count
        rows: usize,
        /// Requested column count
        cols: usize,
    },

    /// Lattice point count must be positive.
    #[error("Invalid point count {0}: must be positive")]
    InvalidPointCount(usize),

    /// Engine output range cannot be mapped onto [0, 1) exactly.
    #[error("Insufficient engine range [{min}, {max}]: cannot normalise without precision loss")]
    InsufficientEngineRange {
        /// Smallest engine output
        min: u64,
        /// Largest engine output
        max: u64,
    },

    /// Table rows do not share one column count.
    #[error("Ragged table: row {row} has {found} columns, expected {expected}")]
    RaggedTable {
        /// Offending row index
        row: usize,
        /// Column count of the first row
        expected: usize,
        /// Column count of the offending row
        found: usize,
    },

    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Description of the invalid value
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_engine_display() {
        let err = AnalysisError::UnknownEngineKind("lcg".to_string());
        assert_eq!(format!("{}", err), "Unknown engine kind: lcg");
    }

    #[test]
    fn test_invalid_dimensions_display() {
        let err = AnalysisError::InvalidDimensions { rows: 0, cols: 200 };
        assert_eq!(
            format!("{}", err),
            "Invalid dimensions 0 x 200: both must be positive"
        );
    }

    #[test]
    fn test_insufficient_range_display() {
        let err = AnalysisError::InsufficientEngineRange { min: 7, max: 7 };
        assert!(err.to_string().contains("[7, 7]"));
    }

    #[test]
    fn test_ragged_table_display() {
        let err = AnalysisError::RaggedTable {
            row: 2,
            expected: 3,
            found: 1,
        };
        assert_eq!(
            err.to_string(),
            "Ragged table: row 2 has 1 columns, expected 3"
        );
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = AnalysisError::InvalidSampleCount(0);
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = AnalysisError::InvalidPointCount(0);
        let err2 = err1.clone();
        assert_eq!(err1, err2);
        assert_ne!(err1, AnalysisError::InvalidSampleCount(0));
    }
}
