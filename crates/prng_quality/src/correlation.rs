//! # Seed Correlation Analyzer
//!
//! Runs one fresh engine per seed `0..seed_count` and lays their first
//! `sample_count` outputs out as rows. Adjacent rows of a weak engine look
//! alike; rows of a good engine look independent.
//!
//! Each raw output is compressed to a display scalar by a [`Reduction`]. The
//! default, [`Reduction::HighBit`], is the `{0, 1}` multiply-shift reduction
//! `⌊2 (x - min) / (span + 1)⌋`, i.e. the top bit of the output relative to
//! its range. For mt19937 it matches `uniform_int_distribution{0, 1}` of
//! libstdc++. For minstd the match is approximate: libstdc++ downscales with
//! `(x - 1) / (2^30 - 2)` and rejects the top two outputs, so the two
//! reductions disagree at a single output value.
//!
//! For minstd, seed `i` yields `48271 i` as its first output, which stays far
//! below `2^30` for the first few thousand seeds: the whole first column of
//! the matrix is 0.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::engine::{EngineKind, EngineRegistry, OutputRange};
use crate::error::{AnalysisError, Result};
use crate::table::NumericTable;

/// Default number of seeds (matrix rows).
pub const DEFAULT_SEED_COUNT: usize = 160;

/// Default number of outputs per seed (matrix columns).
pub const DEFAULT_SAMPLE_COUNT: usize = 200;

/// Compression of one raw output into a bounded display scalar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Reduction {
    /// Top bit relative to the output range, in `{0, 1}`.
    #[default]
    HighBit,
    /// Lowest bit of the raw output, in `{0, 1}`.
    LowBit,
    /// Unit-interval value in `[0, 1)`.
    Normalized,
}

impl Reduction {
    /// Canonical name.
    pub fn name(self) -> &'static str {
        match self {
            Reduction::HighBit => "high_bit",
            Reduction::LowBit => "low_bit",
            Reduction::Normalized => "normalized",
        }
    }

    /// Reduces `raw`, an output of an engine with range `range`.
    fn apply(self, raw: u64, range: OutputRange, kind: EngineKind) -> f64 {
        match self {
            Reduction::HighBit => {
                let offset = u128::from(raw.saturating_sub(range.min));
                let width = u128::from(range.span()) + 1;
                ((offset * 2) / width) as f64
            }
            Reduction::LowBit => (raw & 1) as f64,
            Reduction::Normalized => kind.normalizer().normalize(raw),
        }
    }
}

impl fmt::Display for Reduction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Reduction {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "high_bit" | "highbit" => Ok(Reduction::HighBit),
            "low_bit" | "lowbit" => Ok(Reduction::LowBit),
            "normalized" | "normalised" => Ok(Reduction::Normalized),
            other => Err(AnalysisError::InvalidParameter {
                name: "reduction",
                message: format!("unknown reduction '{}'", other),
            }),
        }
    }
}

/// Builds seed-correlation matrices.
///
/// # Examples
///
/// ```rust
/// use prng_quality::correlation::{Reduction, SeedCorrelationAnalyzer};
/// use prng_quality::engine::EngineKind;
///
/// let matrix = SeedCorrelationAnalyzer::new()
///     .with_reduction(Reduction::LowBit)
///     .build_matrix(EngineKind::Mersenne, 8, 16)
///     .unwrap();
/// assert_eq!((matrix.n_rows(), matrix.n_cols()), (8, 16));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SeedCorrelationAnalyzer {
    reduction: Reduction,
}

impl SeedCorrelationAnalyzer {
    /// Analyzer with the [`Reduction::HighBit`] reduction.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the reduction.
    #[inline]
    pub fn with_reduction(mut self, reduction: Reduction) -> Self {
        self.reduction = reduction;
        self
    }

    /// Reduction in use.
    #[inline]
    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    /// Builds the `seed_count × sample_count` matrix.
    ///
    /// Row `i` comes from a fresh engine seeded with `i`. Engines that
    /// disallow some seeds apply their own remapping (minstd maps 0 to 1, so
    /// rows 0 and 1 coincide).
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if either count is zero.
    pub fn build_matrix(
        &self,
        kind: EngineKind,
        seed_count: usize,
        sample_count: usize,
    ) -> Result<NumericTable> {
        let invalid = AnalysisError::InvalidDimensions {
            rows: seed_count,
            cols: sample_count,
        };
        if seed_count == 0 || sample_count == 0 {
            return Err(invalid);
        }
        let cells = seed_count.checked_mul(sample_count).ok_or(invalid)?;
        debug!(
            engine = %kind,
            reduction = %self.reduction,
            seed_count,
            sample_count,
            "Building seed correlation matrix"
        );

        let range = kind.range();
        let mut data = Vec::with_capacity(cells);
        for seed in 0..seed_count {
            let mut engine = EngineRegistry::seeded(kind, seed as u64);
            data.extend((0..sample_count).map(|_| self.reduction.apply(engine.next_raw(), range, kind)));
        }
        NumericTable::from_flat(data, sample_count)
    }
}

/// Per-column fraction of adjacent row pairs whose cells are equal.
///
/// Independent `{0, 1}` rows give values near 0.5; a column where every seed
/// agrees gives 1.0. A single-row table has no pairs and yields zeros.
pub fn adjacent_agreement(table: &NumericTable) -> Vec<f64> {
    let n_cols = table.n_cols();
    let pairs = table.n_rows().saturating_sub(1);
    if pairs == 0 {
        return vec![0.0; n_cols];
    }

    let mut matches = vec![0usize; n_cols];
    let mut rows = table.rows();
    if let Some(mut previous) = rows.next() {
        for row in rows {
            for (count, (a, b)) in matches.iter_mut().zip(previous.iter().zip(row)) {
                if a == b {
                    *count += 1;
                }
            }
            previous = row;
        }
    }
    matches
        .into_iter()
        .map(|count| count as f64 / pairs as f64)
        .collect()
}
