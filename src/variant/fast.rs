use xxhash_rust::{xxh32::xxh32, xxh64::xxh64};

use super::HashVariant;

// FAST HASH 32
// ================================================================================================

/// General-purpose fast 32-bit hash (XXH32, seed 0), zero-extended to 64 bits.
pub struct FastHash32;

impl HashVariant for FastHash32 {
    fn name(&self) -> &'static str {
        "fast_hash32"
    }

    fn compute(&self, bytes: &[u8]) -> u64 {
        u64::from(xxh32(bytes, 0))
    }
}

// FAST HASH 64
// ================================================================================================

/// General-purpose fast 64-bit hash (XXH64, seed 0).
pub struct FastHash64;

impl HashVariant for FastHash64 {
    fn name(&self) -> &'static str {
        "fast_hash64"
    }

    fn compute(&self, bytes: &[u8]) -> u64 {
        xxh64(bytes, 0)
    }
}
