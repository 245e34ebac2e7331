//! Marsaglia's xorshift with a multiplicative output scrambler.

/// Xorshift64*, a single 64-bit word of state.
///
/// The state is never zero (a zero seed is remapped to `u64::MAX / 2 + 1`),
/// and the odd output multiplier maps it bijectively, so outputs lie in
/// `[1, 2^64 - 1]`. The low bits of the product are weak: bit 0 follows the
/// parity of the state alone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Xorshift64Star {
    state: u64,
}

impl Xorshift64Star {
    /// Output scrambling multiplier.
    pub const MULTIPLIER: u64 = 0x2545_F491_4F6C_DD1D;
    /// Seed used by [`Default`].
    pub const DEFAULT_SEED: u64 = u64::MAX / 2;

    /// Creates an engine seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        let mut engine = Self { state: 1 };
        engine.seed(seed);
        engine
    }

    /// Reseeds the engine; the seed becomes the state.
    pub fn seed(&mut self, seed: u64) {
        self.state = if seed == 0 {
            Self::DEFAULT_SEED + 1
        } else {
            seed
        };
    }

    /// Returns the next output.
    #[inline]
    pub fn next_raw(&mut self) -> u64 {
        self.state ^= self.state >> 12;
        self.state ^= self.state << 25;
        self.state ^= self.state >> 27;
        self.state.wrapping_mul(Self::MULTIPLIER)
    }
}

impl Default for Xorshift64Star {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEED)
    }
}
