//! One benchmark trial: a (input size, variant) pair, its generated input
//! buffer, and the timed repetition loop.
//!
//! Trial lifecycle is `setup` once, then `run` any number of times. The
//! external runner owns the clock and the calibration: it decides how many
//! repetitions to request and what to do with the elapsed time. The core
//! guarantees only that `run` performs exactly the requested number of hash
//! invocations and that none of them can be optimized away.

use std::hint::black_box;

use rand::RngCore;

use crate::{
    error::{ComputationError, ConfigError},
    variant::{HashVariant, VariantRegistry},
};

#[cfg(test)]
mod tests;

// TRIAL CONFIG
// ================================================================================================

/// Parameters of one trial: input size in bytes and the variant under test.
///
/// Constructed through the registry so that an unknown variant name fails
/// with [`ConfigError`] before any input data is allocated.
#[derive(Clone, Copy, Debug)]
pub struct TrialConfig<'a> {
    size: usize,
    variant: &'a dyn HashVariant,
}

impl<'a> TrialConfig<'a> {
    /// Resolves `name` in `registry` and pairs it with `size`.
    ///
    /// # Errors
    /// Returns [`ConfigError::UnknownVariant`] for an unregistered name.
    pub fn new(
        registry: &'a VariantRegistry,
        name: &str,
        size: usize,
    ) -> Result<Self, ConfigError> {
        let variant = registry.resolve(name)?;
        Ok(Self { size, variant })
    }

    /// Pairs an already-resolved variant with `size`.
    pub fn with_variant(variant: &'a dyn HashVariant, size: usize) -> Self {
        Self { size, variant }
    }

    /// Input size in bytes. Size 0 is a valid degenerate trial.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The variant under test.
    pub fn variant(&self) -> &'a dyn HashVariant {
        self.variant
    }
}

// TRIAL STATE
// ================================================================================================

/// Owns the input buffer of one trial.
///
/// Each trial draws a fresh buffer even when sizes repeat, so cache and
/// branch-predictor warm-up from a previous trial on the same bytes cannot
/// leak into the next measurement. The bytes come from the process-wide
/// non-deterministic source; reproducibility across processes is not a
/// contract of this type.
pub struct TrialState {
    bytes: Vec<u8>,
}

impl TrialState {
    /// Allocates and fills the trial input buffer of `config.size()` bytes.
    pub fn setup(config: &TrialConfig<'_>) -> Self {
        let mut bytes = vec![0u8; config.size()];
        rand::rng().fill_bytes(&mut bytes);
        Self { bytes }
    }

    /// The generated input buffer.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Invokes `variant.compute` on the trial buffer `repetitions` times,
    /// XOR-folding every result into an accumulator that starts at 0, and
    /// returns the accumulator.
    ///
    /// Returning the accumulator makes every repetition's output a data
    /// dependency of a value the caller observes, so no iteration can be
    /// elided; `black_box` on the input additionally keeps the buffer from
    /// being treated as loop-invariant known data. Zero repetitions return 0
    /// without invoking the variant.
    pub fn run(&self, variant: &dyn HashVariant, repetitions: u64) -> u64 {
        let mut acc = 0u64;
        for _ in 0..repetitions {
            acc ^= variant.compute(black_box(&self.bytes));
        }
        acc
    }

    /// Like [`Self::run`], but through the variant's fallible entry point.
    ///
    /// The first failure aborts the trial: a partially accumulated value
    /// would report timing for partial work, and retrying a repetition would
    /// corrupt timing semantics, so neither happens.
    ///
    /// # Errors
    /// Returns [`ComputationError`] carrying how far the run got.
    pub fn checked_run(
        &self,
        variant: &dyn HashVariant,
        repetitions: u64,
    ) -> Result<u64, ComputationError> {
        let mut acc = 0u64;
        for completed in 0..repetitions {
            acc ^= variant.try_compute(black_box(&self.bytes)).map_err(|source| {
                ComputationError {
                    variant: variant.name(),
                    completed,
                    requested: repetitions,
                    reason: source.to_string(),
                }
            })?;
        }
        Ok(acc)
    }
}
