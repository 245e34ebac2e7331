//! # PRNG Quality Engine
//!
//! Statistical quality assessment for pseudo-random number generators.
//!
//! The crate drives a closed set of generator algorithms, composes them with
//! normal-distribution samplers, and computes the diagnostic transforms that
//! expose generator weaknesses:
//!
//! - empirical normal density of an exact and an approximate sampler
//!   ([`sampler`], [`density`])
//! - seed-correlation matrices across many adjacent seeds ([`correlation`])
//! - 3D lattice point sets exposing planar structure ([`lattice`])
//!
//! [`batch`] bundles these analyses into named datasets and runs them in
//! parallel.
//!
//! Every analysis returns an immutable [`NumericTable`]. Persisting tables is
//! the caller's concern; nothing in this crate touches the filesystem.
//!
//! ## Architecture
//!
//! ```text
//! EngineRegistry ──► Engine (Minstd | Mersenne | Randu | Xoshiro256PlusPlus)
//!        │
//!        ├──► DistributionSampler ──► series ──► DensityComparison
//!        ├──► SeedCorrelationAnalyzer
//!        └──► SpectralLatticeAnalyzer
//!                          │
//!                          ▼
//!                    NumericTable ──► (external exporter)
//! ```
//!
//! ## Usage Example
//!
//! ```rust
//! use prng_quality::correlation::SeedCorrelationAnalyzer;
//! use prng_quality::engine::EngineKind;
//!
//! let kind: EngineKind = "minstd".parse().unwrap();
//! let matrix = SeedCorrelationAnalyzer::new()
//!     .build_matrix(kind, 160, 200)
//!     .unwrap();
//!
//! assert_eq!(matrix.n_rows(), 160);
//! assert_eq!(matrix.n_cols(), 200);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod batch;
pub mod correlation;
pub mod density;
pub mod engine;
pub mod error;
pub mod lattice;
pub mod sampler;
pub mod table;

pub use engine::{Engine, EngineKind, EngineRegistry, Normalizer, OutputRange};
pub use error::{AnalysisError, Result};
pub use sampler::{DistributionSampler, SamplingStrategy};
pub use table::NumericTable;
