//! Multiplicative linear congruential engines.
//!
//! Both engines keep a single 31-bit word of state and emit the state itself.

/// Park-Miller "minimum standard" generator with the revised multiplier.
///
/// `x <- 48271 * x mod (2^31 - 1)`, outputs in `[1, 2^31 - 2]`.
///
/// Seeding reduces the seed modulo `2^31 - 1` and replaces a zero residue
/// with 1, so seeds 0 and 1 (and every multiple of the modulus) produce the
/// same stream. The state is never zero and has no fixed point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MinstdRand {
    state: u64,
}

impl MinstdRand {
    /// Multiplier of the recurrence.
    pub const MULTIPLIER: u64 = 48_271;
    /// Prime modulus `2^31 - 1`.
    pub const MODULUS: u64 = 2_147_483_647;
    /// Seed used by [`Default`].
    pub const DEFAULT_SEED: u64 = 1;

    /// Creates an engine seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        let mut engine = Self { state: 1 };
        engine.seed(seed);
        engine
    }

    /// Reseeds the engine.
    pub fn seed(&mut self, seed: u64) {
        let residue = seed % Self::MODULUS;
        self.state = if residue == 0 { 1 } else { residue };
    }

    /// Advances the state once and returns it.
    #[inline]
    pub fn next_raw(&mut self) -> u64 {
        self.state = self.state * Self::MULTIPLIER % Self::MODULUS;
        self.state
    }
}

impl Default for MinstdRand {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEED)
    }
}

/// IBM RANDU, `x <- 65539 * x mod 2^31`.
///
/// The multiplier `2^16 + 3` makes every three consecutive outputs satisfy
/// `x[k+2] = 6 x[k+1] - 9 x[k] (mod 2^31)`, so triples fall on 15 planes.
///
/// Fixed points: states 0 and 2^30 map to themselves. Seeding with a
/// multiple of 2^30 therefore yields a constant stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Randu {
    state: u64,
}

impl Randu {
    /// Multiplier of the recurrence.
    pub const MULTIPLIER: u64 = 65_539;
    /// Power-of-two modulus `2^31`.
    pub const MODULUS: u64 = 1 << 31;
    /// Seed used by [`Default`].
    pub const DEFAULT_SEED: u64 = 1;

    /// Creates an engine seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        let mut engine = Self { state: 0 };
        engine.seed(seed);
        engine
    }

    /// Reseeds the engine. Only the low 31 bits of the seed matter.
    pub fn seed(&mut self, seed: u64) {
        self.state = seed & (Self::MODULUS - 1);
    }

    /// Advances the state once and returns it.
    #[inline]
    pub fn next_raw(&mut self) -> u64 {
        self.state = (self.state * Self::MULTIPLIER) & (Self::MODULUS - 1);
        self.state
    }
}

impl Default for Randu {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEED)
    }
}
