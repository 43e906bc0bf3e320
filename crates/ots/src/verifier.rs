//! Sanity check for synthesized signatures.

use crate::bundle::OneTimeSignature;

/// Verify a bundle's signature against its own public key.
///
/// Runs the standard ECDSA verification equation on the first 64 signature
/// bytes; the recovery id is not consulted and no recovery is performed.
/// Malformed components surface as `false`, never as an error.
pub fn verify(bundle: &OneTimeSignature) -> bool {
    bundle
        .signature()
        .verify(bundle.message(), bundle.public_key())
}
