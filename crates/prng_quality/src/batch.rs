//! Batch execution of independent analyses.
//!
//! Every [`AnalysisRequest`] owns its engine, so a batch is embarrassingly
//! parallel: [`run_batch`] fans the datasets out over the rayon pool and
//! collects results in input order.

use std::path::PathBuf;

use rayon::prelude::*;
use tracing::{info, warn};

use crate::correlation::{Reduction, SeedCorrelationAnalyzer, DEFAULT_SAMPLE_COUNT, DEFAULT_SEED_COUNT};
use crate::engine::EngineKind;
use crate::error::Result;
use crate::lattice::{SpectralLatticeAnalyzer, DEFAULT_LATTICE_SEED, DEFAULT_POINT_COUNT};
use crate::sampler::{DistributionSampler, SamplingStrategy, DEFAULT_SERIES_SEED};
use crate::table::NumericTable;

/// Length of the standard normal series.
pub const DEFAULT_SERIES_COUNT: usize = 1_000_000;

/// One analysis with all of its parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "analysis", rename_all = "snake_case"))]
pub enum AnalysisRequest {
    /// Standard normal series, exported as a single column.
    Distribution {
        /// Engine kind.
        kind: EngineKind,
        /// Sampling strategy.
        strategy: SamplingStrategy,
        /// Engine seed.
        seed: u64,
        /// Series length.
        count: usize,
    },
    /// Seed-correlation matrix.
    SeedCorrelation {
        /// Engine kind.
        kind: EngineKind,
        /// Number of seeds (rows).
        seed_count: usize,
        /// Outputs per seed (columns).
        sample_count: usize,
        /// Output reduction.
        #[cfg_attr(feature = "serde", serde(default))]
        reduction: Reduction,
    },
    /// Spectral lattice point set.
    Lattice {
        /// Engine kind.
        kind: EngineKind,
        /// Engine seed.
        seed: u64,
        /// Number of 3D points.
        point_count: usize,
    },
}

impl AnalysisRequest {
    /// Engine kind driving the analysis.
    pub fn kind(&self) -> EngineKind {
        match *self {
            AnalysisRequest::Distribution { kind, .. }
            | AnalysisRequest::SeedCorrelation { kind, .. }
            | AnalysisRequest::Lattice { kind, .. } => kind,
        }
    }

    /// Runs the analysis.
    ///
    /// # Errors
    ///
    /// Propagates the precondition errors of the underlying analyzer.
    pub fn run(&self) -> Result<NumericTable> {
        match *self {
            AnalysisRequest::Distribution {
                kind,
                strategy,
                seed,
                count,
            } => {
                let series = DistributionSampler::new(kind, strategy).seed(seed).generate(count)?;
                NumericTable::column(series)
            }
            AnalysisRequest::SeedCorrelation {
                kind,
                seed_count,
                sample_count,
                reduction,
            } => SeedCorrelationAnalyzer::new()
                .with_reduction(reduction)
                .build_matrix(kind, seed_count, sample_count),
            AnalysisRequest::Lattice {
                kind,
                seed,
                point_count,
            } => SpectralLatticeAnalyzer::new()
                .with_seed(seed)
                .build_lattice(kind, point_count),
        }
    }
}

/// A named analysis destined for `<group>/<file>.csv`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dataset {
    /// Output subdirectory.
    pub group: String,
    /// File stem.
    pub file: String,
    /// Analysis producing the table.
    pub request: AnalysisRequest,
}

impl Dataset {
    /// Creates a dataset.
    pub fn new(group: impl Into<String>, file: impl Into<String>, request: AnalysisRequest) -> Self {
        Self {
            group: group.into(),
            file: file.into(),
            request,
        }
    }

    /// `group/file`, the identifier accepted by dataset filters.
    pub fn id(&self) -> String {
        format!("{}/{}", self.group, self.file)
    }

    /// Path of the CSV file relative to the output directory.
    pub fn relative_path(&self) -> PathBuf {
        PathBuf::from(&self.group).join(format!("{}.csv", self.file))
    }

    /// Whether `selector` names this dataset, by id or by file stem.
    pub fn matches(&self, selector: &str) -> bool {
        let selector = selector.trim().trim_end_matches(".csv");
        selector == self.file || selector == self.id()
    }
}

/// Outcome of one dataset in a batch.
#[derive(Clone, Debug, PartialEq)]
pub struct DatasetResult {
    /// The dataset that was run.
    pub dataset: Dataset,
    /// Its table, or the precondition that rejected it.
    pub table: Result<NumericTable>,
}

/// The five reference datasets.
pub fn standard_suite() -> Vec<Dataset> {
    vec![
        Dataset::new(
            "approx_distributions",
            "approx_normal",
            AnalysisRequest::Distribution {
                kind: EngineKind::Xoshiro256PlusPlus,
                strategy: SamplingStrategy::Approximate,
                seed: DEFAULT_SERIES_SEED,
                count: DEFAULT_SERIES_COUNT,
            },
        ),
        Dataset::new(
            "approx_distributions",
            "precise_normal",
            AnalysisRequest::Distribution {
                kind: EngineKind::Xoshiro256PlusPlus,
                strategy: SamplingStrategy::Exact,
                seed: DEFAULT_SERIES_SEED,
                count: DEFAULT_SERIES_COUNT,
            },
        ),
        Dataset::new(
            "seed_correlation",
            "minstd_rand",
            AnalysisRequest::SeedCorrelation {
                kind: EngineKind::Minstd,
                seed_count: DEFAULT_SEED_COUNT,
                sample_count: DEFAULT_SAMPLE_COUNT,
                reduction: Reduction::HighBit,
            },
        ),
        Dataset::new(
            "seed_correlation",
            "mt19937",
            AnalysisRequest::SeedCorrelation {
                kind: EngineKind::Mersenne,
                seed_count: DEFAULT_SEED_COUNT,
                sample_count: DEFAULT_SAMPLE_COUNT,
                reduction: Reduction::HighBit,
            },
        ),
        Dataset::new(
            "spectral_test",
            "randu",
            AnalysisRequest::Lattice {
                kind: EngineKind::Randu,
                seed: DEFAULT_LATTICE_SEED,
                point_count: DEFAULT_POINT_COUNT,
            },
        ),
    ]
}

/// Runs every dataset on the rayon pool.
///
/// Results come back in input order. A failing dataset does not stop the
/// others.
pub fn run_batch(datasets: &[Dataset]) -> Vec<DatasetResult> {
    info!(datasets = datasets.len(), "Running analysis batch");
    datasets
        .par_iter()
        .map(|dataset| {
            let table = dataset.request.run();
            match &table {
                Ok(t) => info!(
                    dataset = %dataset.id(),
                    engine = %dataset.request.kind(),
                    rows = t.n_rows(),
                    cols = t.n_cols(),
                    "Dataset complete"
                ),
                Err(e) => warn!(dataset = %dataset.id(), error = %e, "Dataset rejected"),
            }
            DatasetResult {
                dataset: dataset.clone(),
                table,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalysisError;

    fn small(group: &str, file: &str, request: AnalysisRequest) -> Dataset {
        Dataset::new(group, file, request)
    }

    #[test]
    fn test_standard_suite_layout() {
        let suite = standard_suite();
        let paths: Vec<String> = suite.iter().map(Dataset::id).collect();
        assert_eq!(
            paths,
            vec![
                "approx_distributions/approx_normal",
                "approx_distributions/precise_normal",
                "seed_correlation/minstd_rand",
                "seed_correlation/mt19937",
                "spectral_test/randu",
            ]
        );
        assert_eq!(
            suite[4].relative_path(),
            PathBuf::from("spectral_test").join("randu.csv")
        );
    }

    #[test]
    fn test_dataset_selector() {
        let suite = standard_suite();
        assert!(suite[3].matches("mt19937"));
        assert!(suite[3].matches("seed_correlation/mt19937.csv"));
        assert!(!suite[3].matches("minstd_rand"));
    }

    #[test]
    fn test_request_shapes() {
        let series = AnalysisRequest::Distribution {
            kind: EngineKind::Mersenne,
            strategy: SamplingStrategy::Exact,
            seed: 3,
            count: 100,
        }
        .run()
        .unwrap();
        assert_eq!((series.n_rows(), series.n_cols()), (100, 1));

        let matrix = AnalysisRequest::SeedCorrelation {
            kind: EngineKind::Minstd,
            seed_count: 7,
            sample_count: 9,
            reduction: Reduction::LowBit,
        }
        .run()
        .unwrap();
        assert_eq!((matrix.n_rows(), matrix.n_cols()), (7, 9));

        let lattice = AnalysisRequest::Lattice {
            kind: EngineKind::Randu,
            seed: 1,
            point_count: 12,
        }
        .run()
        .unwrap();
        assert_eq!((lattice.n_rows(), lattice.n_cols()), (12, 3));
    }

    #[test]
    fn test_batch_preserves_order_and_isolates_failures() {
        let datasets = vec![
            small(
                "a",
                "lattice",
                AnalysisRequest::Lattice {
                    kind: EngineKind::Randu,
                    seed: 3,
                    point_count: 5,
                },
            ),
            small(
                "b",
                "empty",
                AnalysisRequest::Distribution {
                    kind: EngineKind::Minstd,
                    strategy: SamplingStrategy::Approximate,
                    seed: 3,
                    count: 0,
                },
            ),
            small(
                "c",
                "matrix",
                AnalysisRequest::SeedCorrelation {
                    kind: EngineKind::Mersenne,
                    seed_count: 4,
                    sample_count: 6,
                    reduction: Reduction::HighBit,
                },
            ),
        ];

        let results = run_batch(&datasets);
        assert_eq!(results.len(), 3);
        for (result, dataset) in results.iter().zip(&datasets) {
            assert_eq!(&result.dataset, dataset);
        }
        assert_eq!(results[0].table.as_ref().map(NumericTable::n_rows), Ok(5));
        assert_eq!(results[1].table, Err(AnalysisError::InvalidSampleCount(0)));
        assert_eq!(results[2].table.as_ref().map(NumericTable::n_cols), Ok(6));
    }

    #[test]
    fn test_batch_matches_sequential_runs() {
        let datasets: Vec<Dataset> = EngineKind::ALL
            .iter()
            .map(|&kind| {
                small(
                    "lattice",
                    kind.name(),
                    AnalysisRequest::Lattice {
                        kind,
                        seed: 9,
                        point_count: 50,
                    },
                )
            })
            .collect();

        let results = run_batch(&datasets);
        for (result, dataset) in results.iter().zip(&datasets) {
            assert_eq!(result.table, dataset.request.run());
        }
    }
}
