//! Core of a hash-function throughput microbenchmark harness.
//!
//! The crate measures how fast a set of named hash functions chew through
//! byte buffers of varying size. It deliberately contains no timing or
//! statistics logic of its own: an external runner (the criterion suite in
//! `benches/`, or the `hashbench` binary) picks a (size, variant) pair,
//! calls [`TrialState::setup`] once, and then invokes [`TrialState::run`]
//! with whatever repetition count its calibration loop asks for.
//!
//! Hash results are XOR-folded into a single `u64` accumulator that `run`
//! returns, so the compiler cannot prove any repetition unobserved and elide
//! it. The accumulator's numeric value carries no meaning beyond that.

pub mod error;
pub mod trial;
pub mod variant;

// RE-EXPORTS
// ================================================================================================

pub use error::{ComputationError, ConfigError};
pub use trial::{TrialConfig, TrialState};
pub use variant::{HashVariant, VariantRegistry};
