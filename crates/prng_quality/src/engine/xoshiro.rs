//! xoshiro256++ by David Blackman and Sebastiano Vigna.
//!
//! See <https://prng.di.unimi.it/xoshiro256plusplus.c>. The 256-bit state is
//! filled from four SplitMix64 draws, as the authors recommend.

/// One SplitMix64 step: advances `state` and returns the mixed output.
#[inline]
pub fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// xoshiro256++ engine, outputs in `[0, 2^64 - 1]`.
///
/// An all-zero state would be a fixed point, so a zero seed is remapped to
/// `u64::MAX / 2 + 1` before expansion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Xoshiro256PlusPlus {
    s: [u64; 4],
}

impl Xoshiro256PlusPlus {
    /// Seed used by [`Default`].
    pub const DEFAULT_SEED: u64 = u64::MAX / 2;

    /// Creates an engine seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        let mut engine = Self { s: [0; 4] };
        engine.seed(seed);
        engine
    }

    /// Reseeds the engine through SplitMix64.
    pub fn seed(&mut self, seed: u64) {
        let mut splitmix_state = if seed == 0 {
            Self::DEFAULT_SEED + 1
        } else {
            seed
        };
        for word in self.s.iter_mut() {
            *word = splitmix64(&mut splitmix_state);
        }
    }

    /// Returns the next output.
    #[inline]
    pub fn next_raw(&mut self) -> u64 {
        let s = &mut self.s;
        let result = s[0].wrapping_add(s[3]).rotate_left(23).wrapping_add(s[0]);
        let t = s[1] << 17;

        s[2] ^= s[0];
        s[3] ^= s[1];
        s[1] ^= s[2];
        s[0] ^= s[3];

        s[2] ^= t;
        s[3] = s[3].rotate_left(45);

        result
    }
}

impl Default for Xoshiro256PlusPlus {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splitmix64_reference_output() {
        let mut state = 0;
        assert_eq!(splitmix64(&mut state), 0xE220_A839_7B1D_CDAF);
        assert_eq!(state, 0x9E37_79B9_7F4A_7C15);
    }

    #[test]
    fn test_reference_sequence() {
        let mut engine = Xoshiro256PlusPlus::new(1);
        assert_eq!(engine.next_raw(), 14_971_601_782_005_023_387);
        assert_eq!(engine.next_raw(), 13_781_649_495_232_077_965);
        assert_eq!(engine.next_raw(), 1_847_458_086_238_483_744);

        let mut engine = Xoshiro256PlusPlus::new(3);
        let mut last = 0;
        for _ in 0..10_000 {
            last = engine.next_raw();
        }
        assert_eq!(last, 6_236_292_093_339_810_891);
    }

    #[test]
    fn test_zero_seed_is_not_degenerate() {
        let engine = Xoshiro256PlusPlus::new(0);
        assert_ne!(engine.s, [0; 4]);
        assert_eq!(engine, Xoshiro256PlusPlus::new(Xoshiro256PlusPlus::DEFAULT_SEED + 1));
    }

    #[test]
    fn test_nearby_seeds_diverge_immediately() {
        let mut a = Xoshiro256PlusPlus::new(3);
        let mut b = Xoshiro256PlusPlus::new(4);
        assert_ne!(a.next_raw(), b.next_raw());
    }
}
