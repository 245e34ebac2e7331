//! Output ranges and their exact mapping onto the unit interval.

use crate::error::{AnalysisError, Result};

/// 2^-53, the spacing of `f64` values in [0.5, 1).
const INV_2_POW_53: f64 = 1.0 / 9_007_199_254_740_992.0;

/// Largest span that [`Normalizer`] can divide exactly in `f64`.
const MAX_EXACT_SPAN: u64 = (1 << 53) - 1;

/// Inclusive range `[min, max]` of raw engine outputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OutputRange {
    /// Smallest value the engine can emit.
    pub min: u64,
    /// Largest value the engine can emit.
    pub max: u64,
}

impl OutputRange {
    /// Creates a range from its inclusive bounds.
    #[inline]
    pub const fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    /// Returns `max - min`, or 0 for an empty or degenerate range.
    #[inline]
    pub fn span(&self) -> u64 {
        self.max.saturating_sub(self.min)
    }

    /// Returns `true` if `value` lies within the range.
    #[inline]
    pub fn contains(&self, value: u64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Scale {
    /// Exact division by `span + 1`.
    Divide(f64),
    /// Keep the top 53 bits of a power-of-two span.
    TopBits(u32),
}

/// Maps raw engine outputs onto `[0, 1)` without precision loss.
///
/// Two cases are exact:
///
/// - spans below 2^53: `(x - min) / (span + 1)`, both operands are exactly
///   representable so the quotient never rounds up to 1.0
/// - spans where `span + 1` is a power of two: the top 53 bits of `x - min`
///   scaled by 2^-53
///
/// Any other range is rejected with
/// [`AnalysisError::InsufficientEngineRange`].
///
/// # Examples
///
/// ```rust
/// use prng_quality::{Normalizer, OutputRange};
///
/// let normalizer = Normalizer::new(OutputRange::new(0, 3)).unwrap();
/// assert_eq!(normalizer.normalize(0), 0.0);
/// assert_eq!(normalizer.normalize(3), 0.75);
///
/// assert!(Normalizer::new(OutputRange::new(5, 5)).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Normalizer {
    min: u64,
    scale: Scale,
}

impl Normalizer {
    /// Builds the normaliser for `range`.
    ///
    /// # Errors
    ///
    /// Returns `InsufficientEngineRange` if `max <= min`, or if the span is at
    /// least 2^53 and `span + 1` is not a power of two.
    pub fn new(range: OutputRange) -> Result<Self> {
        let insufficient = AnalysisError::InsufficientEngineRange {
            min: range.min,
            max: range.max,
        };
        if range.max <= range.min {
            return Err(insufficient);
        }

        let span = range.max - range.min;
        if span <= MAX_EXACT_SPAN {
            return Ok(Self::divide(range.min, span));
        }

        let bits = match span.checked_add(1) {
            None => u64::BITS,
            Some(width) if width.is_power_of_two() => width.trailing_zeros(),
            Some(_) => return Err(insufficient),
        };
        Ok(Self::top_bits(range.min, bits))
    }

    /// Division by `span + 1`; `span` must not exceed 2^53 - 1.
    pub(crate) fn divide(min: u64, span: u64) -> Self {
        Self {
            min,
            scale: Scale::Divide((span + 1) as f64),
        }
    }

    /// Top-bit extraction for a span of exactly `bits` bits (`bits > 53`).
    pub(crate) fn top_bits(min: u64, bits: u32) -> Self {
        Self {
            min,
            scale: Scale::TopBits(bits - 53),
        }
    }

    /// Maps a raw output to `[0, 1)`.
    ///
    /// Values below the range minimum clamp to 0.
    #[inline]
    pub fn normalize(&self, raw: u64) -> f64 {
        let offset = raw.saturating_sub(self.min);
        match self.scale {
            Scale::Divide(width) => offset as f64 / width,
            Scale::TopBits(shift) => (offset >> shift) as f64 * INV_2_POW_53,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_span_is_exact() {
        let n = Normalizer::new(OutputRange::new(1, 4)).unwrap();
        assert_eq!(n.normalize(1), 0.0);
        assert_eq!(n.normalize(3), 0.5);
        assert_eq!(n.normalize(4), 0.75);
    }

    #[test]
    fn test_max_output_stays_below_one() {
        let n = Normalizer::new(OutputRange::new(0, MAX_EXACT_SPAN)).unwrap();
        assert!(n.normalize(MAX_EXACT_SPAN) < 1.0);

        let full = Normalizer::new(OutputRange::new(0, u64::MAX)).unwrap();
        assert!(full.normalize(u64::MAX) < 1.0);
        assert_eq!(full.normalize(1 << 63), 0.5);
    }

    #[test]
    fn test_power_of_two_wide_span() {
        let n = Normalizer::new(OutputRange::new(0, (1 << 60) - 1)).unwrap();
        assert_eq!(n.normalize(1 << 59), 0.5);
        assert!(n.normalize((1 << 60) - 1) < 1.0);
    }

    #[test]
    fn test_degenerate_range_rejected() {
        assert_eq!(
            Normalizer::new(OutputRange::new(9, 9)),
            Err(AnalysisError::InsufficientEngineRange { min: 9, max: 9 })
        );
        assert!(Normalizer::new(OutputRange::new(10, 2)).is_err());
    }

    #[test]
    fn test_wide_irregular_span_rejected() {
        let range = OutputRange::new(0, (1 << 60) + 12345);
        assert!(matches!(
            Normalizer::new(range),
            Err(AnalysisError::InsufficientEngineRange { .. })
        ));
    }

    #[test]
    fn test_range_helpers() {
        let range = OutputRange::new(1, 10);
        assert_eq!(range.span(), 9);
        assert!(range.contains(1));
        assert!(range.contains(10));
        assert!(!range.contains(0));
        assert_eq!(OutputRange::new(5, 1).span(), 0);
    }
}
