//! 32-bit Mersenne Twister (MT19937), Matsumoto & Nishimura (1998).
//!
//! Bit-compatible with `std::mt19937`: same seeding recurrence, twist and
//! tempering, so datasets produced by either implementation match exactly.

const N: usize = 624;
const M: usize = 397;
const MATRIX_A: u32 = 0x9908_B0DF;
const UPPER_MASK: u32 = 0x8000_0000;
const LOWER_MASK: u32 = 0x7FFF_FFFF;
const INIT_MULTIPLIER: u32 = 1_812_433_253;

/// MT19937 engine: 624-word state, period 2^19937 - 1, outputs in
/// `[0, 2^32 - 1]`.
///
/// The state is boxed so that [`Engine`](super::Engine) stays small.
/// Every output advances the word index, so the state always changes across
/// a call; the engine has no fixed point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mt19937 {
    state: Box<[u32; N]>,
    index: usize,
}

impl Mt19937 {
    /// Seed used by [`Default`], as in the reference implementation.
    pub const DEFAULT_SEED: u64 = 5489;

    /// Creates an engine seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        let mut engine = Self {
            state: Box::new([0; N]),
            index: N,
        };
        engine.seed(seed);
        engine
    }

    /// Reseeds the engine. Only the low 32 bits of the seed matter.
    pub fn seed(&mut self, seed: u64) {
        self.state[0] = seed as u32;
        for i in 1..N {
            let prev = self.state[i - 1];
            self.state[i] = INIT_MULTIPLIER
                .wrapping_mul(prev ^ (prev >> 30))
                .wrapping_add(i as u32);
        }
        self.index = N;
    }

    /// Returns the next tempered output.
    #[inline]
    pub fn next_raw(&mut self) -> u64 {
        if self.index >= N {
            self.twist();
        }

        let mut y = self.state[self.index];
        self.index += 1;

        // Tempering
        y ^= y >> 11;
        y ^= (y << 7) & 0x9D2C_5680;
        y ^= (y << 15) & 0xEFC6_0000;
        y ^= y >> 18;

        u64::from(y)
    }

    /// Regenerates all 624 words in place.
    fn twist(&mut self) {
        for i in 0..N {
            let y = (self.state[i] & UPPER_MASK) | (self.state[(i + 1) % N] & LOWER_MASK);
            let mut next = self.state[(i + M) % N] ^ (y >> 1);
            if y & 1 != 0 {
                next ^= MATRIX_A;
            }
            self.state[i] = next;
        }
        self.index = 0;
    }
}

impl Default for Mt19937 {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_first_output() {
        let mut engine = Mt19937::default();
        assert_eq!(engine.next_raw(), 3_499_211_612);
    }

    #[test]
    fn test_reference_ten_thousandth_output() {
        let mut engine = Mt19937::default();
        let mut last = 0;
        for _ in 0..10_000 {
            last = engine.next_raw();
        }
        assert_eq!(last, 4_123_659_995);
    }

    #[test]
    fn test_seed_truncated_to_32_bits() {
        let mut a = Mt19937::new(7);
        let mut b = Mt19937::new((1 << 32) + 7);
        for _ in 0..100 {
            assert_eq!(a.next_raw(), b.next_raw());
        }
    }

    #[test]
    fn test_reseed_restarts_stream() {
        let mut engine = Mt19937::new(42);
        let first: Vec<u64> = (0..700).map(|_| engine.next_raw()).collect();
        engine.seed(42);
        let second: Vec<u64> = (0..700).map(|_| engine.next_raw()).collect();
        assert_eq!(first, second);
    }
}
