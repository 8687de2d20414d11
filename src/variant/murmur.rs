use murmurhash3::{murmurhash3_x64_128, murmurhash3_x86_32};

use super::HashVariant;

// MURMUR3 32
// ================================================================================================

/// MurmurHash3 x86_32 (seed 0), zero-extended to 64 bits.
pub struct Murmur3_32;

impl HashVariant for Murmur3_32 {
    fn name(&self) -> &'static str {
        "murmur_hash32"
    }

    fn compute(&self, bytes: &[u8]) -> u64 {
        u64::from(murmurhash3_x86_32(bytes, 0))
    }
}

// MURMUR3 128
// ================================================================================================

/// MurmurHash3 x64_128 (seed 0), narrowed to the low 64 bits of the digest.
pub struct Murmur3_128;

impl HashVariant for Murmur3_128 {
    fn name(&self) -> &'static str {
        "murmur_hash128"
    }

    fn compute(&self, bytes: &[u8]) -> u64 {
        let (low, _high) = murmurhash3_x64_128(bytes, 0);
        low
    }
}
