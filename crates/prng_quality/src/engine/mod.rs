//! # Engine Registry
//!
//! The closed set of generator algorithms under assessment, behind one
//! seeding/stepping contract.
//!
//! | Kind | Algorithm | Output range | Profile |
//! |------|-----------|--------------|---------|
//! | `minstd` | `48271 x mod (2^31 - 1)` | `[1, 2^31 - 2]` | fast, correlated adjacent seeds |
//! | `mersenne` | MT19937 | `[0, 2^32 - 1]` | tempered, high quality |
//! | `randu` | `65539 x mod 2^31` | `[1, 2^31 - 1]` | fails the 3D spectral test |
//! | `xoshiro256pp` | xoshiro256++ | `[0, 2^64 - 1]` | general purpose reference |
//! | `romutrio32` | RomuTrio32 | `[0, 2^32 - 1]` | multiply-rotate, 96-bit state |
//! | `jsf32` | Jenkins small fast, 32-bit | `[0, 2^32 - 1]` | 128-bit state, warm-up on seed |
//! | `romuduojr` | RomuDuoJr | `[0, 2^64 - 1]` | multiply-rotate, 128-bit state |
//! | `jsf64` | Jenkins small fast, 64-bit | `[0, 2^64 - 1]` | 256-bit state, warm-up on seed |
//! | `xorshift64star` | xorshift64* | `[0, 2^64 - 1]` | single word, weak low bits |
//!
//! Full-width generators report the whole word as their range, even where the
//! algorithm never emits 0.
//!
//! Variants are dispatched by `match`, never through trait objects, so a
//! call to [`Engine::next_raw`] compiles down to the variant's recurrence.
//!
//! ## Usage Example
//!
//! ```rust
//! use prng_quality::engine::{EngineKind, EngineRegistry};
//!
//! let mut a = EngineRegistry::seeded(EngineKind::Minstd, 7);
//! let mut b = EngineRegistry::create_by_name("minstd").unwrap();
//! b.seed(7);
//!
//! assert_eq!(a.next_raw(), b.next_raw());
//! assert!(EngineRegistry::create_by_name("lcg").is_err());
//! ```

mod jsf;
mod lcg;
mod mt19937;
mod range;
mod romu;
mod xorshift;
mod xoshiro;

use std::fmt;
use std::str::FromStr;

use rand::RngCore;

use crate::error::{AnalysisError, Result};

pub use jsf::{Jsf32, Jsf64};
pub use lcg::{MinstdRand, Randu};
pub use mt19937::Mt19937;
pub use range::{Normalizer, OutputRange};
pub use romu::{splitmix32, RomuDuoJr, RomuTrio32};
pub use xorshift::Xorshift64Star;
pub use xoshiro::{splitmix64, Xoshiro256PlusPlus};

/// Identifier of a registered engine algorithm.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EngineKind {
    /// Park-Miller minimum standard LCG.
    #[cfg_attr(feature = "serde", serde(rename = "minstd", alias = "minstd_rand"))]
    Minstd,
    /// 32-bit Mersenne Twister.
    #[cfg_attr(feature = "serde", serde(rename = "mersenne", alias = "mt19937"))]
    Mersenne,
    /// IBM RANDU.
    #[cfg_attr(feature = "serde", serde(rename = "randu"))]
    Randu,
    /// xoshiro256++.
    #[cfg_attr(feature = "serde", serde(rename = "xoshiro256pp", alias = "xoshiro"))]
    Xoshiro256PlusPlus,
    /// Romu trio, 32-bit words.
    #[cfg_attr(feature = "serde", serde(rename = "romutrio32", alias = "romu_trio32"))]
    RomuTrio32,
    /// Jenkins small fast generator, 32-bit words.
    #[cfg_attr(feature = "serde", serde(rename = "jsf32"))]
    Jsf32,
    /// Romu duo jr, 64-bit words.
    #[cfg_attr(feature = "serde", serde(rename = "romuduojr", alias = "romu_duo_jr"))]
    RomuDuoJr,
    /// Jenkins small fast generator, 64-bit words.
    #[cfg_attr(feature = "serde", serde(rename = "jsf64"))]
    Jsf64,
    /// xorshift64*.
    #[cfg_attr(feature = "serde", serde(rename = "xorshift64star", alias = "xorshift64_star"))]
    Xorshift64Star,
}

impl EngineKind {
    /// Every registered kind, in registry order.
    pub const ALL: [EngineKind; 9] = [
        EngineKind::Minstd,
        EngineKind::Mersenne,
        EngineKind::Randu,
        EngineKind::Xoshiro256PlusPlus,
        EngineKind::RomuTrio32,
        EngineKind::Jsf32,
        EngineKind::RomuDuoJr,
        EngineKind::Jsf64,
        EngineKind::Xorshift64Star,
    ];

    /// Canonical registry name.
    pub fn name(self) -> &'static str {
        match self {
            EngineKind::Minstd => "minstd",
            EngineKind::Mersenne => "mersenne",
            EngineKind::Randu => "randu",
            EngineKind::Xoshiro256PlusPlus => "xoshiro256pp",
            EngineKind::RomuTrio32 => "romutrio32",
            EngineKind::Jsf32 => "jsf32",
            EngineKind::RomuDuoJr => "romuduojr",
            EngineKind::Jsf64 => "jsf64",
            EngineKind::Xorshift64Star => "xorshift64star",
        }
    }

    /// One-line description for listings.
    pub fn description(self) -> &'static str {
        match self {
            EngineKind::Minstd => "Park-Miller LCG, multiplier 48271, modulus 2^31 - 1",
            EngineKind::Mersenne => "MT19937, 624-word tempered generator",
            EngineKind::Randu => "IBM RANDU, multiplier 65539, modulus 2^31",
            EngineKind::Xoshiro256PlusPlus => "xoshiro256++ with SplitMix64 seeding",
            EngineKind::RomuTrio32 => "Romu trio, 3 x 32-bit words, SplitMix32 seeding",
            EngineKind::Jsf32 => "Jenkins small fast generator, 4 x 32-bit words",
            EngineKind::RomuDuoJr => "Romu duo jr, 2 x 64-bit words, SplitMix64 seeding",
            EngineKind::Jsf64 => "Jenkins small fast generator, 4 x 64-bit words",
            EngineKind::Xorshift64Star => "xorshift64*, single 64-bit word",
        }
    }

    /// Inclusive output range of the algorithm.
    pub fn range(self) -> OutputRange {
        match self {
            EngineKind::Minstd => OutputRange::new(1, MinstdRand::MODULUS - 1),
            EngineKind::Mersenne | EngineKind::RomuTrio32 | EngineKind::Jsf32 => {
                OutputRange::new(0, u64::from(u32::MAX))
            }
            EngineKind::Randu => OutputRange::new(1, Randu::MODULUS - 1),
            EngineKind::Xoshiro256PlusPlus
            | EngineKind::RomuDuoJr
            | EngineKind::Jsf64
            | EngineKind::Xorshift64Star => OutputRange::new(0, u64::MAX),
        }
    }

    /// Seed applied by [`EngineRegistry::create`].
    pub fn default_seed(self) -> u64 {
        match self {
            EngineKind::Minstd => MinstdRand::DEFAULT_SEED,
            EngineKind::Mersenne => Mt19937::DEFAULT_SEED,
            EngineKind::Randu => Randu::DEFAULT_SEED,
            EngineKind::Xoshiro256PlusPlus => Xoshiro256PlusPlus::DEFAULT_SEED,
            EngineKind::RomuTrio32 => RomuTrio32::DEFAULT_SEED,
            EngineKind::Jsf32 => Jsf32::DEFAULT_SEED,
            EngineKind::RomuDuoJr => RomuDuoJr::DEFAULT_SEED,
            EngineKind::Jsf64 => Jsf64::DEFAULT_SEED,
            EngineKind::Xorshift64Star => Xorshift64Star::DEFAULT_SEED,
        }
    }

    /// Unit-interval normaliser for this kind's output range.
    pub fn normalizer(self) -> Normalizer {
        let range = self.range();
        if self.is_full_width_64() {
            Normalizer::top_bits(range.min, u64::BITS)
        } else {
            Normalizer::divide(range.min, range.span())
        }
    }

    /// Whether outputs fill a whole 64-bit word.
    fn is_full_width_64(self) -> bool {
        matches!(
            self,
            EngineKind::Xoshiro256PlusPlus
                | EngineKind::RomuDuoJr
                | EngineKind::Jsf64
                | EngineKind::Xorshift64Star
        )
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EngineKind {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "minstd" | "minstd_rand" => Ok(EngineKind::Minstd),
            "mersenne" | "mt19937" => Ok(EngineKind::Mersenne),
            "randu" => Ok(EngineKind::Randu),
            "xoshiro256pp" | "xoshiro" => Ok(EngineKind::Xoshiro256PlusPlus),
            "romutrio32" | "romu_trio32" => Ok(EngineKind::RomuTrio32),
            "jsf32" => Ok(EngineKind::Jsf32),
            "romuduojr" | "romu_duo_jr" => Ok(EngineKind::RomuDuoJr),
            "jsf64" => Ok(EngineKind::Jsf64),
            "xorshift64star" | "xorshift64_star" | "xorshift64*" => Ok(EngineKind::Xorshift64Star),
            _ => Err(AnalysisError::UnknownEngineKind(s.to_string())),
        }
    }
}

/// A seeded generator instance.
///
/// `next_raw` is a pure function of the internal state and advances it
/// exactly once per call. Two engines of the same kind seeded with the same
/// value produce identical sequences.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Engine {
    /// Park-Miller minimum standard LCG.
    Minstd(MinstdRand),
    /// 32-bit Mersenne Twister.
    Mersenne(Mt19937),
    /// IBM RANDU.
    Randu(Randu),
    /// xoshiro256++.
    Xoshiro256PlusPlus(Xoshiro256PlusPlus),
    /// Romu trio, 32-bit words.
    RomuTrio32(RomuTrio32),
    /// Jenkins small fast generator, 32-bit words.
    Jsf32(Jsf32),
    /// Romu duo jr, 64-bit words.
    RomuDuoJr(RomuDuoJr),
    /// Jenkins small fast generator, 64-bit words.
    Jsf64(Jsf64),
    /// xorshift64*.
    Xorshift64Star(Xorshift64Star),
}

impl Engine {
    /// Returns the algorithm of this instance.
    pub fn kind(&self) -> EngineKind {
        match self {
            Engine::Minstd(_) => EngineKind::Minstd,
            Engine::Mersenne(_) => EngineKind::Mersenne,
            Engine::Randu(_) => EngineKind::Randu,
            Engine::Xoshiro256PlusPlus(_) => EngineKind::Xoshiro256PlusPlus,
            Engine::RomuTrio32(_) => EngineKind::RomuTrio32,
            Engine::Jsf32(_) => EngineKind::Jsf32,
            Engine::RomuDuoJr(_) => EngineKind::RomuDuoJr,
            Engine::Jsf64(_) => EngineKind::Jsf64,
            Engine::Xorshift64Star(_) => EngineKind::Xorshift64Star,
        }
    }

    /// Reseeds the engine in place.
    pub fn seed(&mut self, seed: u64) {
        match self {
            Engine::Minstd(e) => e.seed(seed),
            Engine::Mersenne(e) => e.seed(seed),
            Engine::Randu(e) => e.seed(seed),
            Engine::Xoshiro256PlusPlus(e) => e.seed(seed),
            Engine::RomuTrio32(e) => e.seed(seed),
            Engine::Jsf32(e) => e.seed(seed),
            Engine::RomuDuoJr(e) => e.seed(seed),
            Engine::Jsf64(e) => e.seed(seed),
            Engine::Xorshift64Star(e) => e.seed(seed),
        }
    }

    /// Advances the state once and returns the raw output.
    #[inline]
    pub fn next_raw(&mut self) -> u64 {
        match self {
            Engine::Minstd(e) => e.next_raw(),
            Engine::Mersenne(e) => e.next_raw(),
            Engine::Randu(e) => e.next_raw(),
            Engine::Xoshiro256PlusPlus(e) => e.next_raw(),
            Engine::RomuTrio32(e) => e.next_raw(),
            Engine::Jsf32(e) => e.next_raw(),
            Engine::RomuDuoJr(e) => e.next_raw(),
            Engine::Jsf64(e) => e.next_raw(),
            Engine::Xorshift64Star(e) => e.next_raw(),
        }
    }

    /// Inclusive output range.
    #[inline]
    pub fn range(&self) -> OutputRange {
        self.kind().range()
    }

    /// Draws one output and maps it onto `[0, 1)`.
    #[inline]
    pub fn next_uniform(&mut self) -> f64 {
        let normalizer = self.kind().normalizer();
        normalizer.normalize(self.next_raw())
    }

    /// Fills the buffer with raw outputs.
    pub fn fill_raw(&mut self, buffer: &mut [u64]) {
        for value in buffer.iter_mut() {
            *value = self.next_raw();
        }
    }
}

/// Bit-level interop with the `rand` ecosystem.
///
/// Full-width engines expose their raw bits (the high half for 64-bit words
/// asked for 32 bits). The 31-bit LCGs scale their
/// unit-interval output to 32 bits, which keeps the distribution uniform to
/// within one part in 2^31.
impl RngCore for Engine {
    fn next_u32(&mut self) -> u32 {
        match self.kind() {
            EngineKind::Minstd | EngineKind::Randu => (self.next_uniform() * 4_294_967_296.0) as u32,
            EngineKind::Mersenne | EngineKind::RomuTrio32 | EngineKind::Jsf32 => self.next_raw() as u32,
            EngineKind::Xoshiro256PlusPlus
            | EngineKind::RomuDuoJr
            | EngineKind::Jsf64
            | EngineKind::Xorshift64Star => (self.next_raw() >> 32) as u32,
        }
    }

    fn next_u64(&mut self) -> u64 {
        if self.kind().is_full_width_64() {
            self.next_raw()
        } else {
            let high = u64::from(self.next_u32());
            (high << 32) | u64::from(self.next_u32())
        }
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// Stateless factory for [`Engine`] instances.
///
/// Holds no data, so concurrent calls never interact.
pub struct EngineRegistry;

impl EngineRegistry {
    /// Every registered kind.
    pub fn kinds() -> &'static [EngineKind] {
        &EngineKind::ALL
    }

    /// Creates an engine in its default seeded state.
    pub fn create(kind: EngineKind) -> Engine {
        Self::seeded(kind, kind.default_seed())
    }

    /// Creates an engine seeded with `seed`.
    pub fn seeded(kind: EngineKind, seed: u64) -> Engine {
        match kind {
            EngineKind::Minstd => Engine::Minstd(MinstdRand::new(seed)),
            EngineKind::Mersenne => Engine::Mersenne(Mt19937::new(seed)),
            EngineKind::Randu => Engine::Randu(Randu::new(seed)),
            EngineKind::Xoshiro256PlusPlus => {
                Engine::Xoshiro256PlusPlus(Xoshiro256PlusPlus::new(seed))
            }
            EngineKind::RomuTrio32 => Engine::RomuTrio32(RomuTrio32::new(seed)),
            EngineKind::Jsf32 => Engine::Jsf32(Jsf32::new(seed)),
            EngineKind::RomuDuoJr => Engine::RomuDuoJr(RomuDuoJr::new(seed)),
            EngineKind::Jsf64 => Engine::Jsf64(Jsf64::new(seed)),
            EngineKind::Xorshift64Star => Engine::Xorshift64Star(Xorshift64Star::new(seed)),
        }
    }

    /// Parses `name` and creates the engine in its default seeded state.
    ///
    /// # Errors
    ///
    /// Returns `UnknownEngineKind` if `name` is not registered.
    pub fn create_by_name(name: &str) -> Result<Engine> {
        let kind: EngineKind = name.parse()?;
        Ok(Self::create(kind))
    }
}
