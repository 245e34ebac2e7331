//! Romu generators by Mark A. Overton.
//!
//! See <https://www.romu-random.org/romupaper.pdf>. Both engines are
//! nonlinear multiply-rotate generators with no fixed period guarantee; the
//! state is filled from SplitMix draws as the paper recommends.

use super::xoshiro::splitmix64;

/// One SplitMix32 step: advances `state` and returns the mixed output.
#[inline]
pub fn splitmix32(state: &mut u32) -> u32 {
    *state = state.wrapping_add(0x9E37_79B9);
    let mut z = *state;
    z = (z ^ (z >> 16)).wrapping_mul(0x21F0_AAAD);
    z = (z ^ (z >> 15)).wrapping_mul(0x735A_2D97);
    z ^ (z >> 15)
}

/// RomuTrio32, three 32-bit words of state, outputs in `[0, 2^32 - 1]`.
///
/// Only the low 32 bits of a seed are used. A zero seed is remapped to
/// `u32::MAX / 2 + 1`; all three words come from SplitMix32, so no word
/// starts at zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RomuTrio32 {
    s: [u32; 3],
}

impl RomuTrio32 {
    /// Multiplier of the first word.
    pub const MULTIPLIER: u32 = 3_323_815_723;
    /// Seed used by [`Default`].
    pub const DEFAULT_SEED: u64 = (u32::MAX / 2) as u64;

    /// Creates an engine seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        let mut engine = Self { s: [0; 3] };
        engine.seed(seed);
        engine
    }

    /// Reseeds the engine through SplitMix32.
    pub fn seed(&mut self, seed: u64) {
        let mut splitmix_state = match seed as u32 {
            0 => Self::DEFAULT_SEED as u32 + 1,
            truncated => truncated,
        };
        for word in self.s.iter_mut() {
            *word = splitmix32(&mut splitmix_state);
        }
    }

    /// Returns the next output.
    #[inline]
    pub fn next_raw(&mut self) -> u64 {
        let [xp, yp, zp] = self.s;
        self.s[0] = Self::MULTIPLIER.wrapping_mul(zp);
        self.s[1] = yp.wrapping_sub(xp).rotate_left(6);
        self.s[2] = zp.wrapping_sub(yp).rotate_left(22);
        u64::from(xp)
    }
}

impl Default for RomuTrio32 {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEED)
    }
}

/// RomuDuoJr, two 64-bit words of state, outputs in `[0, 2^64 - 1]`.
///
/// A zero seed is remapped to `u64::MAX / 2 + 1` before SplitMix64 expansion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RomuDuoJr {
    s: [u64; 2],
}

impl RomuDuoJr {
    /// Multiplier of the first word.
    pub const MULTIPLIER: u64 = 15_241_094_284_759_029_579;
    /// Seed used by [`Default`].
    pub const DEFAULT_SEED: u64 = u64::MAX / 2;

    /// Creates an engine seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        let mut engine = Self { s: [0; 2] };
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
        let result = self.s[0];
        self.s[0] = Self::MULTIPLIER.wrapping_mul(self.s[1]);
        self.s[1] = self.s[1].wrapping_sub(result).rotate_left(27);
        result
    }
}

impl Default for RomuDuoJr {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splitmix32_reference_output() {
        let mut state = 0;
        assert_eq!(splitmix32(&mut state), 1_684_164_658);
        assert_eq!(state, 0x9E37_79B9);
    }

    #[test]
    fn test_romu_trio32_reference_sequence() {
        let mut engine = RomuTrio32::new(1);
        assert_eq!(engine.next_raw(), 1_580_013_426);
        assert_eq!(engine.next_raw(), 860_553_343);
        assert_eq!(engine.next_raw(), 392_548_822);
    }

    #[test]
    fn test_romu_trio32_ten_thousandth_output() {
        let mut engine = RomuTrio32::new(3);
        let mut last = 0;
        for _ in 0..10_000 {
            last = engine.next_raw();
        }
        assert_eq!(last, 4_018_448_110);
    }

    #[test]
    fn test_romu_trio32_seed_handling() {
        assert_eq!(RomuTrio32::new(0), RomuTrio32::new(RomuTrio32::DEFAULT_SEED + 1));
        assert_eq!(RomuTrio32::new((1 << 32) | 7), RomuTrio32::new(7));

        // second output comes from the third word, which must be seeded too
        let mut engine = RomuTrio32::new(0);
        assert_eq!(engine.next_raw(), 2_241_709_437);
        assert_eq!(engine.next_raw(), 2_061_061_292);
    }

    #[test]
    fn test_romu_duo_jr_reference_sequence() {
        let mut engine = RomuDuoJr::new(1);
        assert_eq!(engine.next_raw(), 10_451_216_379_200_822_465);
        assert_eq!(engine.next_raw(), 1_788_420_182_831_153_965);
        assert_eq!(engine.next_raw(), 13_628_370_027_930_465_055);
    }

    #[test]
    fn test_romu_duo_jr_ten_thousandth_output() {
        let mut engine = RomuDuoJr::new(3);
        let mut last = 0;
        for _ in 0..10_000 {
            last = engine.next_raw();
        }
        assert_eq!(last, 15_527_773_671_103_037_449);
    }

    #[test]
    fn test_romu_duo_jr_zero_seed_remapped() {
        assert_eq!(RomuDuoJr::new(0), RomuDuoJr::new(RomuDuoJr::DEFAULT_SEED + 1));
        assert_eq!(RomuDuoJr::new(0).next_raw(), 5_196_802_822_362_493_915);
    }
}
