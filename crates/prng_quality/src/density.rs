//! Empirical density of a normal series against the analytical PDF.
//!
//! This module provides:
//! - [`norm_pdf`] / [`norm_two_sided_tail`]: standard normal reference values
//! - [`SeriesSummary`]: mean, variance and tail mass of a series
//! - [`DensityComparison`]: histogram density paired with the analytical PDF

use tracing::debug;

use crate::error::{AnalysisError, Result};
use crate::table::NumericTable;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Complementary error function, Abramowitz and Stegun 7.1.26.
///
/// Maximum absolute error 1.5e-7.
fn erfc_approx(x: f64) -> f64 {
    const A1: f64 = 0.254_829_592;
    const A2: f64 = -0.284_496_736;
    const A3: f64 = 1.421_413_741;
    const A4: f64 = -1.453_152_027;
    const A5: f64 = 1.061_405_429;
    const P: f64 = 0.327_591_1;

    let abs_x = x.abs();
    let t = 1.0 / (1.0 + P * abs_x);
    let poly = A1 + t * (A2 + t * (A3 + t * (A4 + t * A5)));
    let erfc_abs = t * poly * (-abs_x * abs_x).exp();

    if x < 0.0 {
        2.0 - erfc_abs
    } else {
        erfc_abs
    }
}

/// Standard normal density φ(x) = exp(-x² / 2) / sqrt(2π).
///
/// # Examples
/// ```
/// use prng_quality::density::norm_pdf;
///
/// assert!((norm_pdf(0.0) - 0.3989422804).abs() < 1e-9);
/// ```
#[inline]
pub fn norm_pdf(x: f64) -> f64 {
    FRAC_1_SQRT_2PI * (-0.5 * x * x).exp()
}

/// Two-sided tail mass `P(|Z| > t)` of the standard normal.
///
/// Accurate to 1.5e-7. Negative thresholds are treated as their absolute value.
pub fn norm_two_sided_tail(threshold: f64) -> f64 {
    erfc_approx(threshold.abs() / std::f64::consts::SQRT_2)
}

/// Moments and tail mass of a sample series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeriesSummary {
    /// Number of samples.
    pub count: usize,
    /// Sample mean.
    pub mean: f64,
    /// Unbiased sample variance (population variance for a single sample).
    pub variance: f64,
    /// `|z|` threshold used for [`tail_fraction`](Self::tail_fraction).
    pub tail_threshold: f64,
    /// Fraction of samples with `|z| > tail_threshold`.
    pub tail_fraction: f64,
}

impl SeriesSummary {
    /// Summarises `series`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSampleCount` for an empty series.
    pub fn from_series(series: &[f64], tail_threshold: f64) -> Result<Self> {
        let count = series.len();
        if count == 0 {
            return Err(AnalysisError::InvalidSampleCount(0));
        }

        let n = count as f64;
        let mean = series.iter().sum::<f64>() / n;
        let sum_sq: f64 = series.iter().map(|x| (x - mean) * (x - mean)).sum();
        let variance = if count > 1 { sum_sq / (n - 1.0) } else { 0.0 };
        let tails = series.iter().filter(|x| x.abs() > tail_threshold).count();

        Ok(Self {
            count,
            mean,
            variance,
            tail_threshold,
            tail_fraction: tails as f64 / n,
        })
    }

    /// Absolute deviation of the observed tail mass from the standard normal.
    pub fn tail_deviation(&self) -> f64 {
        (self.tail_fraction - norm_two_sided_tail(self.tail_threshold)).abs()
    }
}

/// Histogram density of a series paired with the analytical normal PDF.
///
/// The produced table has one row per bin and three columns:
/// bin centre, empirical density, analytical density.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DensityComparison {
    bins: usize,
    lower: f64,
    upper: f64,
}

impl DensityComparison {
    /// Bins covering `[lower, upper)`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if `bins` is zero or the `bins × 3` table
    /// cannot be addressed, and `InvalidParameter` unless `lower < upper` with
    /// both finite.
    pub fn new(bins: usize, lower: f64, upper: f64) -> Result<Self> {
        if bins == 0 || bins.checked_mul(3).is_none() {
            return Err(AnalysisError::InvalidDimensions { rows: bins, cols: 3 });
        }
        if !(lower.is_finite() && upper.is_finite() && lower < upper) {
            return Err(AnalysisError::InvalidParameter {
                name: "bounds",
                message: format!("expected finite lower < upper, got [{}, {})", lower, upper),
            });
        }
        Ok(Self {
            bins,
            lower,
            upper,
        })
    }

    /// Bin width.
    #[inline]
    pub fn bin_width(&self) -> f64 {
        (self.upper - self.lower) / self.bins as f64
    }

    /// Builds the comparison table.
    ///
    /// Densities are normalised by the full series length, so samples outside
    /// `[lower, upper)` lower the empirical curve rather than being rescaled
    /// away.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSampleCount` for an empty series.
    pub fn build(&self, series: &[f64]) -> Result<NumericTable> {
        if series.is_empty() {
            return Err(AnalysisError::InvalidSampleCount(0));
        }

        let width = self.bin_width();
        let mut counts = vec![0usize; self.bins];
        let mut outside = 0usize;
        for &x in series {
            let position = (x - self.lower) / width;
            if position >= 0.0 && x < self.upper {
                let index = (position as usize).min(self.bins - 1);
                counts[index] += 1;
            } else {
                outside += 1;
            }
        }
        debug!(
            bins = self.bins,
            samples = series.len(),
            outside,
            "Binned series for density comparison"
        );

        let norm = series.len() as f64 * width;
        let mut data = Vec::with_capacity(self.bins * 3);
        for (i, &count) in counts.iter().enumerate() {
            let centre = self.lower + (i as f64 + 0.5) * width;
            data.extend([centre, count as f64 / norm, norm_pdf(centre)]);
        }
        NumericTable::from_flat(data, 3)
    }
}
