/// Elliptic curve cryptography on secp256k1.
///
/// Provides public keys, recoverable ECDSA signatures, and scalar helpers.

pub mod public_key;
pub mod scalar;
pub mod signature;

pub use public_key::PublicKey;
pub use signature::RecoverableSignature;
