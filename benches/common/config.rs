//! Benchmark configuration constants.
//!
//! Kept in one place so every benchmark module sweeps the same parameter
//! space and results stay comparable across runs.

/// Sample size for statistical significance.
pub const SAMPLE_SIZE: usize = 20;

/// Input sizes for hash throughput testing (in bytes).
///
/// 10, 1000 and 1000000 are the canonical small/medium/large points; the
/// others fill in the curve around cache-line and page boundaries.
pub const HASH_INPUT_SIZES: &[usize] = &[
    0,         // Empty input (edge case)
    10,        // Canonical small input
    64,        // Cache line
    256,       // Small buffer
    1000,      // Canonical medium input
    4096,      // Page
    65_536,    // 64KB
    1_000_000, // Canonical large input
];

/// Input sizes for the repetition-loop benchmarks (in bytes).
///
/// Smaller than [`HASH_INPUT_SIZES`] because each measured call already
/// amortizes [`RUN_REPETITIONS`] hash invocations.
pub const RUN_INPUT_SIZES: &[usize] = &[10, 1000, 65_536];

/// Repetitions per measured call in the repetition-loop benchmarks.
pub const RUN_REPETITIONS: u64 = 100;
