//! Lab configuration
//!
//! Loaded from a TOML file (`prng_lab.toml` by default). Every field has a
//! default, so a missing file or an empty one reproduces the reference
//! datasets written under `temp/`.
//!
//! ```toml
//! output_dir = "temp"
//!
//! [summary]
//! engine = "mersenne"
//! count = 100000
//!
//! [[datasets]]
//! group = "spectral_test"
//! file = "randu_long"
//! request = { analysis = "lattice", kind = "randu", seed = 1, point_count = 20000 }
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use prng_quality::batch::{standard_suite, Dataset, DEFAULT_SERIES_COUNT};
use prng_quality::sampler::DEFAULT_SERIES_SEED;
use prng_quality::EngineKind;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

/// Default output directory.
pub const DEFAULT_OUTPUT_DIR: &str = "temp";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Invalid TOML: {0}")]
    Parse(String),

    #[error("Duplicate dataset: {0}")]
    DuplicateDataset(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue {
        field: &'static str,
        message: String,
    },
}

/// Parameters of the `summary` command.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    /// Engine driving both samplers
    pub engine: EngineKind,
    /// Series length
    pub count: usize,
    /// Engine seed
    pub seed: u64,
    /// `|z|` threshold for the tail mass
    pub tail_threshold: f64,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            engine: EngineKind::Xoshiro256PlusPlus,
            count: DEFAULT_SERIES_COUNT,
            seed: DEFAULT_SERIES_SEED,
            tail_threshold: 3.0,
        }
    }
}

/// Top-level lab configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LabConfig {
    /// Root directory for generated CSV files
    pub output_dir: PathBuf,
    /// `summary` command defaults
    pub summary: SummaryConfig,
    /// Datasets run by `generate`; the reference suite when absent
    pub datasets: Option<Vec<Dataset>>,
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            summary: SummaryConfig::default(),
            datasets: None,
        }
    }
}

impl LabConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: LabConfig =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e)))?;
        Self::from_toml_str(&content)
    }

    /// Loads `path` if it exists, defaults otherwise.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            info!(path = %path.display(), "Loading configuration");
            Self::from_file(path)
        } else {
            debug!(path = %path.display(), "No configuration file, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.summary.count == 0 {
            return Err(ConfigError::InvalidValue {
                field: "summary.count",
                message: "must be positive".to_string(),
            });
        }
        if !(self.summary.tail_threshold.is_finite() && self.summary.tail_threshold > 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "summary.tail_threshold",
                message: format!("expected a positive number, got {}", self.summary.tail_threshold),
            });
        }

        if let Some(datasets) = &self.datasets {
            if datasets.is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "datasets",
                    message: "list is empty".to_string(),
                });
            }
            let mut seen = HashSet::new();
            for dataset in datasets {
                if !seen.insert(dataset.id()) {
                    return Err(ConfigError::DuplicateDataset(dataset.id()));
                }
            }
        }
        Ok(())
    }

    /// Datasets to generate.
    pub fn datasets(&self) -> Vec<Dataset> {
        self.datasets.clone().unwrap_or_else(standard_suite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prng_quality::batch::AnalysisRequest;
    use prng_quality::correlation::Reduction;

    #[test]
    fn test_empty_document_gives_defaults() {
        let config = LabConfig::from_toml_str("").unwrap();
        assert_eq!(config, LabConfig::default());
        assert_eq!(config.output_dir, PathBuf::from("temp"));
        assert_eq!(config.datasets().len(), 5);
    }

    #[test]
    fn test_partial_summary_override() {
        let config = LabConfig::from_toml_str(
            r#"
            output_dir = "out"

            [summary]
            engine = "mt19937"
            count = 1000
            "#,
        )
        .unwrap();
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.summary.engine, EngineKind::Mersenne);
        assert_eq!(config.summary.count, 1000);
        assert_eq!(config.summary.seed, DEFAULT_SERIES_SEED);
    }

    #[test]
    fn test_dataset_list() {
        let config = LabConfig::from_toml_str(
            r#"
            [[datasets]]
            group = "seed_correlation"
            file = "minstd_low_bit"
            request = { analysis = "seed_correlation", kind = "minstd_rand", seed_count = 16, sample_count = 32, reduction = "low_bit" }

            [[datasets]]
            group = "approx_distributions"
            file = "mersenne_normal"
            request = { analysis = "distribution", kind = "mersenne", strategy = "precise", seed = 7, count = 10 }
            "#,
        )
        .unwrap();

        let datasets = config.datasets();
        assert_eq!(datasets.len(), 2);
        assert_eq!(
            datasets[0].request,
            AnalysisRequest::SeedCorrelation {
                kind: EngineKind::Minstd,
                seed_count: 16,
                sample_count: 32,
                reduction: Reduction::LowBit,
            }
        );
        assert_eq!(datasets[1].id(), "approx_distributions/mersenne_normal");
    }

    #[test]
    fn test_unknown_engine_rejected() {
        let result = LabConfig::from_toml_str("[summary]\nengine = \"lcg\"\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_duplicate_dataset_rejected() {
        let entry = r#"
            [[datasets]]
            group = "spectral_test"
            file = "randu"
            request = { analysis = "lattice", kind = "randu", seed = 1, point_count = 10 }
        "#;
        let result = LabConfig::from_toml_str(&entry.repeat(2));
        assert!(matches!(result, Err(ConfigError::DuplicateDataset(id)) if id == "spectral_test/randu"));
    }

    #[test]
    fn test_invalid_summary_values() {
        assert!(matches!(
            LabConfig::from_toml_str("[summary]\ncount = 0\n"),
            Err(ConfigError::InvalidValue { field: "summary.count", .. })
        ));
        assert!(LabConfig::from_toml_str("[summary]\ntail_threshold = -1.0\n").is_err());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = LabConfig::load(Path::new("definitely/not/here/prng_lab.toml")).unwrap();
        assert_eq!(config, LabConfig::default());
    }
}
