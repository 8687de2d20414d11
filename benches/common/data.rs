//! Data generation utilities for benchmark inputs.

use rand::RngCore;

/// Generate a byte array of the specified size with random data.
pub fn generate_byte_array_random(size: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; size];
    rand::rng().fill_bytes(&mut bytes);
    bytes
}
