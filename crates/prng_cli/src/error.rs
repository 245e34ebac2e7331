//! CLI error types.

use prng_quality::AnalysisError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by `prng-lab` commands.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Analysis error: {0}")]
    Analysis(#[from] AnalysisError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result alias for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_error_converts() {
        let err: CliError = AnalysisError::InvalidPointCount(0).into();
        assert!(matches!(err, CliError::Analysis(_)));
        assert_eq!(err.to_string(), format!("Analysis error: {}", AnalysisError::InvalidPointCount(0)));
    }

    #[test]
    fn test_invalid_argument_display() {
        let err = CliError::InvalidArgument("unknown dataset 'x'".to_string());
        assert_eq!(err.to_string(), "Invalid argument: unknown dataset 'x'");
    }
}
