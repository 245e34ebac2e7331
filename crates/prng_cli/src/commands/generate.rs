//! Generate command implementation
//!
//! Runs the configured datasets and writes one CSV file per dataset.

use std::path::{Path, PathBuf};

use prng_quality::batch::{run_batch, Dataset};
use tracing::{error, info};

use crate::config::LabConfig;
use crate::export::write_table_to_path;
use crate::{CliError, Result};

/// Picks the datasets named by `only`, or all of them.
pub fn select_datasets(datasets: Vec<Dataset>, only: Option<&str>) -> Result<Vec<Dataset>> {
    let Some(selector) = only else {
        return Ok(datasets);
    };

    let selected: Vec<Dataset> = datasets
        .iter()
        .filter(|d| d.matches(selector))
        .cloned()
        .collect();
    if selected.is_empty() {
        let known: Vec<String> = datasets.iter().map(Dataset::id).collect();
        return Err(CliError::InvalidArgument(format!(
            "Unknown dataset: {}. Available: {}",
            selector,
            known.join(", ")
        )));
    }
    Ok(selected)
}

/// Run the generate command
pub fn run(config: &LabConfig, only: Option<&str>, output_dir: Option<&str>) -> Result<Vec<PathBuf>> {
    let root = output_dir.map_or_else(|| config.output_dir.clone(), PathBuf::from);
    let datasets = select_datasets(config.datasets(), only)?;

    info!("Generating datasets...");
    info!("  Datasets: {}", datasets.len());
    info!("  Output directory: {}", root.display());

    write_results(&root, &datasets)
}

/// Runs `datasets` and writes every successful table under `root`.
///
/// Every dataset is attempted; the first failure is returned afterwards.
fn write_results(root: &Path, datasets: &[Dataset]) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(datasets.len());
    let mut first_error = None;

    for result in run_batch(datasets) {
        let path = root.join(result.dataset.relative_path());
        let outcome = match result.table {
            Ok(table) => write_table_to_path(&table, &path),
            Err(e) => Err(e.into()),
        };
        match outcome {
            Ok(()) => written.push(path),
            Err(e) => {
                error!(dataset = %result.dataset.id(), error = %e, "Dataset failed");
                first_error.get_or_insert(e);
            }
        }
    }

    if let Some(e) = first_error {
        return Err(e);
    }
    info!("Generation complete: {} files", written.len());
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use prng_quality::batch::{standard_suite, AnalysisRequest};
    use prng_quality::EngineKind;

    fn scratch_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("prng_lab_{}_{}", name, std::process::id()))
    }

    #[test]
    fn test_select_all_by_default() {
        assert_eq!(select_datasets(standard_suite(), None).unwrap().len(), 5);
    }

    #[test]
    fn test_select_single_dataset() {
        let selected = select_datasets(standard_suite(), Some("randu")).unwrap();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].id(), "spectral_test/randu");
    }

    #[test]
    fn test_select_unknown_dataset() {
        let err = select_datasets(standard_suite(), Some("lcg")).unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument(msg) if msg.contains("spectral_test/randu")));
    }

    #[test]
    fn test_writes_reference_lattice() {
        let root = scratch_dir("generate");
        let config = LabConfig::default();
        let written = run(&config, Some("spectral_test/randu"), root.to_str()).unwrap();

        assert_eq!(written, vec![root.join("spectral_test").join("randu.csv")]);
        let content = std::fs::read_to_string(&written[0]).unwrap();
        assert_eq!(content.lines().count(), 1000);
        assert!(content.lines().all(|line| line.split(',').count() == 3));

        std::fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_failed_dataset_does_not_block_others() {
        let root = scratch_dir("partial");
        let datasets = vec![
            Dataset::new(
                "bad",
                "empty",
                AnalysisRequest::Lattice {
                    kind: EngineKind::Randu,
                    seed: 1,
                    point_count: 0,
                },
            ),
            Dataset::new(
                "good",
                "matrix",
                AnalysisRequest::SeedCorrelation {
                    kind: EngineKind::Minstd,
                    seed_count: 4,
                    sample_count: 5,
                    reduction: Default::default(),
                },
            ),
        ];

        let result = write_results(&root, &datasets);
        assert!(matches!(result, Err(CliError::Analysis(_))));
        assert!(root.join("good").join("matrix.csv").exists());
        assert!(!root.join("bad").join("empty.csv").exists());

        std::fs::remove_dir_all(&root).unwrap();
    }
}
