use md5::{Digest, Md5};

use super::HashVariant;

// MD5 DIGEST
// ================================================================================================

/// MD5 digest, narrowed to its first 8 bytes read little-endian.
///
/// MD5 is here as the "strong digest" reference point for throughput
/// comparison against the fast hashes, not for any security property.
pub struct Md5Digest;

impl HashVariant for Md5Digest {
    fn name(&self) -> &'static str {
        "md5_digest"
    }

    fn compute(&self, bytes: &[u8]) -> u64 {
        let digest = Md5::digest(bytes);
        let mut word = [0u8; 8];
        word.copy_from_slice(&digest[..8]);
        u64::from_le_bytes(word)
    }
}
