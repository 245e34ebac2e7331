//! Bob Jenkins' small fast generators.
//!
//! See <https://burtleburtle.net/bob/rand/smallprng.html>. Seeding fixes the
//! first word to `0xf1ea5eed`, copies the seed into the other three and
//! discards 20 outputs.

/// Outputs discarded after seeding.
const WARMUP_ROUNDS: usize = 20;

/// First state word after seeding.
const SEED_WORD: u32 = 0xF1EA_5EED;

/// JSF32, four 32-bit words of state, outputs in `[0, 2^32 - 1]`.
///
/// Only the low 32 bits of a seed are used; a zero seed is remapped to
/// `u32::MAX / 2 + 1`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Jsf32 {
    s: [u32; 4],
}

impl Jsf32 {
    /// Seed used by [`Default`].
    pub const DEFAULT_SEED: u64 = (u32::MAX / 2) as u64;

    /// Creates an engine seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        let mut engine = Self { s: [0; 4] };
        engine.seed(seed);
        engine
    }

    /// Reseeds the engine and runs the warm-up rounds.
    pub fn seed(&mut self, seed: u64) {
        let word = match seed as u32 {
            0 => Self::DEFAULT_SEED as u32 + 1,
            truncated => truncated,
        };
        self.s = [SEED_WORD, word, word, word];
        for _ in 0..WARMUP_ROUNDS {
            self.next_raw();
        }
    }

    /// Returns the next output.
    #[inline]
    pub fn next_raw(&mut self) -> u64 {
        let s = &mut self.s;
        let e = s[0].wrapping_sub(s[1].rotate_left(27));
        s[0] = s[1] ^ s[2].rotate_left(17);
        s[1] = s[2].wrapping_add(s[3]);
        s[2] = s[3].wrapping_add(e);
        s[3] = e.wrapping_add(s[0]);
        u64::from(s[3])
    }
}

impl Default for Jsf32 {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEED)
    }
}

/// JSF64, four 64-bit words of state, outputs in `[0, 2^64 - 1]`.
///
/// A zero seed is remapped to `u64::MAX / 2 + 1`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Jsf64 {
    s: [u64; 4],
}

impl Jsf64 {
    /// Seed used by [`Default`].
    pub const DEFAULT_SEED: u64 = u64::MAX / 2;

    /// Creates an engine seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        let mut engine = Self { s: [0; 4] };
        engine.seed(seed);
        engine
    }

    /// Reseeds the engine and runs the warm-up rounds.
    pub fn seed(&mut self, seed: u64) {
        let word = if seed == 0 {
            Self::DEFAULT_SEED + 1
        } else {
            seed
        };
        self.s = [u64::from(SEED_WORD), word, word, word];
        for _ in 0..WARMUP_ROUNDS {
            self.next_raw();
        }
    }

    /// Returns the next output.
    #[inline]
    pub fn next_raw(&mut self) -> u64 {
        let s = &mut self.s;
        let e = s[0].wrapping_sub(s[1].rotate_left(7));
        s[0] = s[1] ^ s[2].rotate_left(13);
        s[1] = s[2].wrapping_add(s[3].rotate_left(37));
        s[2] = s[3].wrapping_add(e);
        s[3] = e.wrapping_add(s[0]);
        s[3]
    }
}

impl Default for Jsf64 {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jsf32_reference_sequence() {
        let mut engine = Jsf32::new(1);
        assert_eq!(engine.next_raw(), 2_723_230_452);
        assert_eq!(engine.next_raw(), 519_702_369);
        assert_eq!(engine.next_raw(), 858_478_259);
    }

    #[test]
    fn test_jsf32_ten_thousandth_output() {
        let mut engine = Jsf32::new(3);
        let mut last = 0;
        for _ in 0..10_000 {
            last = engine.next_raw();
        }
        assert_eq!(last, 665_148_800);
    }

    #[test]
    fn test_jsf32_seed_handling() {
        assert_eq!(Jsf32::new(0), Jsf32::new(Jsf32::DEFAULT_SEED + 1));
        assert_eq!(Jsf32::new(0).next_raw(), 3_493_366_224);
        assert_eq!(Jsf32::new((1 << 40) | 3), Jsf32::new(3));
    }

    #[test]
    fn test_jsf64_reference_sequence() {
        let mut engine = Jsf64::new(1);
        assert_eq!(engine.next_raw(), 12_570_492_831_699_175_752);
        assert_eq!(engine.next_raw(), 10_238_557_730_190_538_546);
        assert_eq!(engine.next_raw(), 10_305_956_622_633_196_132);
    }

    #[test]
    fn test_jsf64_ten_thousandth_output() {
        let mut engine = Jsf64::new(3);
        let mut last = 0;
        for _ in 0..10_000 {
            last = engine.next_raw();
        }
        assert_eq!(last, 18_152_100_170_897_837_105);
    }

    #[test]
    fn test_jsf64_zero_seed_remapped() {
        assert_eq!(Jsf64::new(0), Jsf64::new(Jsf64::DEFAULT_SEED + 1));
        assert_eq!(Jsf64::new(0).next_raw(), 16_103_992_871_399_368_776);
    }
}
