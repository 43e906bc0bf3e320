/// One-time signature primitives.
///
/// This crate provides the building blocks for synthesizing and checking
/// recoverable secp256k1 signatures:
/// - Hash functions (SHA-256, tagged SHA-256, Keccak-256)
/// - Public keys with SEC1 encoding
/// - 65-byte recoverable signatures with public key recovery
/// - Ledger addresses with EIP-55 checksums

pub mod hash;
pub mod ec;
pub mod address;

mod error;
pub use address::Address;
pub use error::PrimitivesError;
