//! Hash function primitives.
//!
//! Provides SHA-256 (used for seed-to-scalar derivation) and Keccak-256
//! (used for ledger address derivation).

use sha2::{Digest, Sha256};
use sha3::Keccak256;

/// Compute SHA-256 hash of the input data.
///
/// # Arguments
/// * `data` - Byte slice to hash.
///
/// # Returns
/// A 32-byte SHA-256 digest.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Compute SHA-256 over a domain tag followed by the data, `SHA-256(tag || data)`.
///
/// # Arguments
/// * `tag` - Domain separation prefix.
/// * `data` - Byte slice to hash after the tag.
///
/// # Returns
/// A 32-byte SHA-256 digest.
pub fn tagged_sha256(tag: &[u8], data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(tag);
    hasher.update(data);
    hasher.finalize().into()
}

/// Compute the legacy Keccak-256 hash of the input data.
///
/// This is the pre-standardization Keccak padding, not NIST SHA3-256.
///
/// # Arguments
/// * `data` - Byte slice to hash.
///
/// # Returns
/// A 32-byte Keccak-256 digest.
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}
