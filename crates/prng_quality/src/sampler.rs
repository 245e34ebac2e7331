//! # Distribution Sampler
//!
//! Standard normal samplers driven by an [`Engine`].
//!
//! Two strategies with opposite trade-offs are provided:
//!
//! - [`SamplingStrategy::Exact`]: Box-Muller transform (cosine branch),
//!   statistically exact, two uniform draws and a `ln`/`sqrt`/`cos` per sample
//! - [`SamplingStrategy::Approximate`]: Irwin-Hall sum of four uniforms,
//!   centred and rescaled to unit variance; cheap, but its support ends at
//!   `±2√3` so the tails beyond `|z| > 3` are starved
//!
//! The approximation error is left in place: it is exactly what the
//! histogram-versus-analytical-PDF comparison is meant to show.
//!
//! Both strategies consume a fixed number of engine outputs per sample
//! ([`SamplingStrategy::draws_per_sample`]), so the engine position after
//! `n` samples is always `n * draws_per_sample`.
//!
//! ## Usage Example
//!
//! ```rust
//! use prng_quality::engine::EngineKind;
//! use prng_quality::sampler::{DistributionSampler, SamplingStrategy};
//!
//! let series = DistributionSampler::new(EngineKind::Xoshiro256PlusPlus, SamplingStrategy::Exact)
//!     .seed(3)
//!     .generate(1000)
//!     .unwrap();
//! assert_eq!(series.len(), 1000);
//! ```

use std::f64::consts::TAU;
use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::engine::{Engine, EngineKind, EngineRegistry};
use crate::error::{AnalysisError, Result};

/// Number of uniforms summed by the approximate sampler.
pub const APPROXIMATE_TERMS: usize = 4;

/// Seed used by [`DistributionSampler::new`].
pub const DEFAULT_SERIES_SEED: u64 = 3;

/// `sqrt(12 / APPROXIMATE_TERMS)`, rescales the Irwin-Hall sum to unit variance.
const APPROXIMATE_SCALE: f64 = 1.732_050_807_568_877_2;

/// Normal sampling strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SamplingStrategy {
    /// Box-Muller transform, exact standard normal.
    #[cfg_attr(feature = "serde", serde(rename = "exact", alias = "precise"))]
    Exact,
    /// Irwin-Hall central-limit approximation.
    #[cfg_attr(feature = "serde", serde(rename = "approximate", alias = "approx"))]
    Approximate,
}

impl SamplingStrategy {
    /// Both strategies, exact first.
    pub const ALL: [SamplingStrategy; 2] = [SamplingStrategy::Exact, SamplingStrategy::Approximate];

    /// Canonical name.
    pub fn name(self) -> &'static str {
        match self {
            SamplingStrategy::Exact => "exact",
            SamplingStrategy::Approximate => "approximate",
        }
    }

    /// Engine outputs consumed by one [`sample`](Self::sample) call.
    pub fn draws_per_sample(self) -> usize {
        match self {
            SamplingStrategy::Exact => 2,
            SamplingStrategy::Approximate => APPROXIMATE_TERMS,
        }
    }

    /// Draws one standard normal variate.
    #[inline]
    pub fn sample(self, engine: &mut Engine) -> f64 {
        match self {
            SamplingStrategy::Exact => {
                // 1 - u lies in (0, 1], keeping ln finite
                let radius = (-2.0 * (1.0 - engine.next_uniform()).ln()).sqrt();
                let angle = TAU * engine.next_uniform();
                radius * angle.cos()
            }
            SamplingStrategy::Approximate => {
                let sum: f64 = (0..APPROXIMATE_TERMS).map(|_| engine.next_uniform()).sum();
                (sum - APPROXIMATE_TERMS as f64 / 2.0) * APPROXIMATE_SCALE
            }
        }
    }
}

impl fmt::Display for SamplingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SamplingStrategy {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "exact" | "precise" => Ok(SamplingStrategy::Exact),
            "approximate" | "approx" => Ok(SamplingStrategy::Approximate),
            other => Err(AnalysisError::InvalidParameter {
                name: "strategy",
                message: format!("unknown sampling strategy '{}'", other),
            }),
        }
    }
}

/// Draws `count` successive samples from `engine`, in call order.
///
/// # Errors
///
/// Returns `InvalidSampleCount` if `count` is zero. The engine is not
/// touched in that case.
pub fn generate_series(
    engine: &mut Engine,
    strategy: SamplingStrategy,
    count: usize,
) -> Result<Vec<f64>> {
    if count == 0 {
        return Err(AnalysisError::InvalidSampleCount(count));
    }
    Ok((0..count).map(|_| strategy.sample(engine)).collect())
}

/// Owns engine construction for one series.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DistributionSampler {
    kind: EngineKind,
    strategy: SamplingStrategy,
    seed: u64,
}

impl DistributionSampler {
    /// Sampler over a fresh `kind` engine seeded with [`DEFAULT_SERIES_SEED`].
    pub fn new(kind: EngineKind, strategy: SamplingStrategy) -> Self {
        Self {
            kind,
            strategy,
            seed: DEFAULT_SERIES_SEED,
        }
    }

    /// Overrides the engine seed.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Engine kind.
    #[inline]
    pub fn kind(&self) -> EngineKind {
        self.kind
    }

    /// Sampling strategy.
    #[inline]
    pub fn strategy(&self) -> SamplingStrategy {
        self.strategy
    }

    /// Seeds a fresh engine and draws `count` samples.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSampleCount` if `count` is zero.
    pub fn generate(&self, count: usize) -> Result<Vec<f64>> {
        if count == 0 {
            return Err(AnalysisError::InvalidSampleCount(count));
        }
        debug!(
            engine = %self.kind,
            strategy = %self.strategy,
            seed = self.seed,
            count,
            "Generating normal series"
        );
        let mut engine = EngineRegistry::seeded(self.kind, self.seed);
        generate_series(&mut engine, self.strategy, count)
    }
}
