//! Recoverable ECDSA signatures in the 65-byte `r || s || v` layout.
//!
//! Supports public key recovery ("ecrecover"), plain ECDSA verification
//! against a known key, and low-S checks.

use k256::ecdsa::signature::hazmat::PrehashVerifier;
use k256::ecdsa::{self, RecoveryId, VerifyingKey};
use k256::elliptic_curve::sec1::ToEncodedPoint;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::ec::public_key::{PublicKey, UNCOMPRESSED_LEN};
use crate::PrimitivesError;

/// Length of a recoverable signature in bytes.
pub const SIGNATURE_LEN: usize = 65;

/// Half of the secp256k1 curve order (N/2), used for low-S checks.
const HALF_ORDER: [u8; 32] = [
    0x7F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0x5D, 0x57, 0x6E, 0x73, 0x57, 0xA4, 0x50, 0x1D, 0xDF, 0xE9, 0x2F, 0x46, 0x68, 0x1B,
    0x20, 0xA0,
];

/// An ECDSA signature with R, S and a single-bit recovery id.
///
/// The recovery id is the parity of the y-coordinate of the nonce point,
/// so it is always 0 or 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecoverableSignature {
    /// The R component of the signature (32 bytes, big-endian).
    r: [u8; 32],
    /// The S component of the signature (32 bytes, big-endian).
    s: [u8; 32],
    /// The recovery id, 0 (even y) or 1 (odd y).
    v: u8,
}

impl RecoverableSignature {
    /// Create a signature from raw R and S 32-byte arrays and a recovery id.
    ///
    /// # Arguments
    /// * `r` - The R component (32 bytes, big-endian).
    /// * `s` - The S component (32 bytes, big-endian).
    /// * `v` - The recovery id, 0 or 1.
    ///
    /// # Returns
    /// An error if `v` is not 0 or 1.
    pub fn new(r: [u8; 32], s: [u8; 32], v: u8) -> Result<Self, PrimitivesError> {
        if v > 1 {
            return Err(PrimitivesError::InvalidRecoveryId(v));
        }
        Ok(RecoverableSignature { r, s, v })
    }

    /// Parse a 65-byte `r || s || v` signature.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        if bytes.len() != SIGNATURE_LEN {
            return Err(PrimitivesError::InvalidSignature(format!(
                "expected {} bytes, got {}",
                SIGNATURE_LEN,
                bytes.len()
            )));
        }
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[0..32]);
        s.copy_from_slice(&bytes[32..64]);
        Self::new(r, s, bytes[64])
    }

    /// Parse a hex-encoded 65-byte signature.
    pub fn from_hex(hex_str: &str) -> Result<Self, PrimitivesError> {
        let bytes = hex::decode(hex_str)?;
        Self::from_bytes(&bytes)
    }

    /// Serialize to the 65-byte `r || s || v` layout.
    pub fn to_bytes(&self) -> [u8; SIGNATURE_LEN] {
        let mut out = [0u8; SIGNATURE_LEN];
        out[0..32].copy_from_slice(&self.r);
        out[32..64].copy_from_slice(&self.s);
        out[64] = self.v;
        out
    }

    /// Serialize as lowercase hex.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Access the R component of the signature.
    pub fn r(&self) -> &[u8; 32] {
        &self.r
    }

    /// Access the S component of the signature.
    pub fn s(&self) -> &[u8; 32] {
        &self.s
    }

    /// Access the recovery id.
    pub fn v(&self) -> u8 {
        self.v
    }

    /// Report whether S lies in the lower half of the curve order (`s <= N/2`).
    pub fn is_low_s(&self) -> bool {
        !is_greater_than(&self.s, &HALF_ORDER)
    }

    /// Recover the uncompressed SEC1 public key bytes for a message digest.
    ///
    /// Reconstructs the nonce point from `r` and `v` and solves the recovery
    /// equation `Q = r^-1 (s*R - z*G)`.
    ///
    /// # Arguments
    /// * `digest` - The 32-byte message digest.
    ///
    /// # Returns
    /// 65 bytes `0x04 || X || Y`, or `RecoveryFailed` if no consistent key exists.
    pub fn recover_public_key_bytes(
        &self,
        digest: &[u8; 32],
    ) -> Result<[u8; UNCOMPRESSED_LEN], PrimitivesError> {
        let recovery_id =
            RecoveryId::from_byte(self.v).ok_or(PrimitivesError::InvalidRecoveryId(self.v))?;

        let k256_sig = self
            .to_k256()
            .map_err(|e| PrimitivesError::RecoveryFailed(e.to_string()))?;

        let recovered = VerifyingKey::recover_from_prehash(digest, &k256_sig, recovery_id)
            .map_err(|e| PrimitivesError::RecoveryFailed(e.to_string()))?;

        let point = recovered.to_encoded_point(false);
        let mut out = [0u8; UNCOMPRESSED_LEN];
        out.copy_from_slice(point.as_bytes());
        Ok(out)
    }

    /// Recover the public key for a message digest.
    pub fn recover_public_key(&self, digest: &[u8; 32]) -> Result<PublicKey, PrimitivesError> {
        let bytes = self.recover_public_key_bytes(digest)?;
        PublicKey::from_bytes(&bytes)
    }

    /// Verify this signature against a message digest and public key.
    ///
    /// Uses the standard (non-recovery) ECDSA check on `r` and `s`; the
    /// recovery id is not consulted.
    ///
    /// # Returns
    /// `true` if the signature is valid, `false` otherwise.
    pub fn verify(&self, digest: &[u8; 32], pub_key: &PublicKey) -> bool {
        let k256_sig = match self.to_k256() {
            Ok(sig) => sig,
            Err(_) => return false,
        };

        pub_key
            .verifying_key()
            .verify_prehash(digest, &k256_sig)
            .is_ok()
    }

    /// Build the k256 signature from R and S; fails if either is zero or >= N.
    fn to_k256(&self) -> Result<ecdsa::Signature, ecdsa::Error> {
        ecdsa::Signature::from_scalars(
            k256::FieldBytes::from(self.r),
            k256::FieldBytes::from(self.s),
        )
    }
}

impl fmt::Display for RecoverableSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for RecoverableSignature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for RecoverableSignature {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        RecoverableSignature::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Compare two 32-byte big-endian integers: a > b.
fn is_greater_than(a: &[u8; 32], b: &[u8; 32]) -> bool {
    for i in 0..32 {
        if a[i] > b[i] {
            return true;
        }
        if a[i] < b[i] {
            return false;
        }
    }
    false // equal
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::sha256;
    use k256::ecdsa::SigningKey;

    /// Sign with a known scalar so recovery has a reference key to match.
    fn sign_with_scalar(scalar: u8, digest: &[u8; 32]) -> (RecoverableSignature, PublicKey) {
        let mut key_bytes = [0u8; 32];
        key_bytes[31] = scalar;
        let signing_key = SigningKey::from_bytes(&k256::FieldBytes::from(key_bytes)).unwrap();
        let (sig, recovery_id) = signing_key.sign_prehash_recoverable(digest).unwrap();

        let (r_bytes, s_bytes) = sig.split_bytes();
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&r_bytes);
        s.copy_from_slice(&s_bytes);

        let sig = RecoverableSignature::new(r, s, recovery_id.to_byte() & 1).unwrap();
        let pub_key = PublicKey::from_k256_verifying_key(signing_key.verifying_key());
        (sig, pub_key)
    }

    #[test]
    fn test_from_bytes_layout() {
        let mut raw = [0u8; SIGNATURE_LEN];
        raw[0] = 0xaa;
        raw[32] = 0xbb;
        raw[64] = 1;

        let sig = RecoverableSignature::from_bytes(&raw).unwrap();
        assert_eq!(sig.r()[0], 0xaa);
        assert_eq!(sig.s()[0], 0xbb);
        assert_eq!(sig.v(), 1);
        assert_eq!(sig.to_bytes(), raw);
    }

    #[test]
    fn test_from_bytes_rejects_bad_input() {
        assert!(RecoverableSignature::from_bytes(&[]).is_err());
        assert!(RecoverableSignature::from_bytes(&[0u8; 64]).is_err());

        let mut raw = [0u8; SIGNATURE_LEN];
        raw[64] = 27;
        assert!(matches!(
            RecoverableSignature::from_bytes(&raw),
            Err(PrimitivesError::InvalidRecoveryId(27))
        ));
    }

    #[test]
    fn test_low_s_boundary() {
        let at_half = RecoverableSignature::new([1u8; 32], HALF_ORDER, 0).unwrap();
        assert!(at_half.is_low_s());

        let mut above = HALF_ORDER;
        above[31] += 1;
        let above_half = RecoverableSignature::new([1u8; 32], above, 0).unwrap();
        assert!(!above_half.is_low_s());
    }

    #[test]
    fn test_recover_matches_signer() {
        for scalar in 1..=8u8 {
            let digest = sha256(&[scalar; 4]);
            let (sig, pub_key) = sign_with_scalar(scalar, &digest);

            let recovered = sig.recover_public_key(&digest).unwrap();
            assert_eq!(recovered, pub_key, "scalar {}", scalar);
            assert!(sig.verify(&digest, &pub_key));
        }
    }

    #[test]
    fn test_verify_rejects_tampering() {
        let digest = sha256(b"tamper");
        let (sig, pub_key) = sign_with_scalar(3, &digest);

        let other = sha256(b"tamper!");
        assert!(!sig.verify(&other, &pub_key));

        let mut raw = sig.to_bytes();
        raw[40] ^= 0x01;
        let flipped = RecoverableSignature::from_bytes(&raw).unwrap();
        assert!(!flipped.verify(&digest, &pub_key));
    }

    #[test]
    fn test_verify_ignores_recovery_id() {
        let digest = sha256(b"recovery id");
        let (sig, pub_key) = sign_with_scalar(5, &digest);

        let flipped = RecoverableSignature::new(*sig.r(), *sig.s(), sig.v() ^ 1).unwrap();
        assert!(flipped.verify(&digest, &pub_key));
        // The other parity recovers a different key.
        let recovered = flipped.recover_public_key(&digest).unwrap();
        assert_ne!(recovered, pub_key);
    }

    #[test]
    fn test_zero_components() {
        let digest = sha256(b"zero");
        let zero = RecoverableSignature::new([0u8; 32], [0u8; 32], 0).unwrap();
        let (_, pub_key) = sign_with_scalar(1, &digest);

        assert!(!zero.verify(&digest, &pub_key));
        assert!(matches!(
            zero.recover_public_key(&digest),
            Err(PrimitivesError::RecoveryFailed(_))
        ));
    }

    #[test]
    fn test_hex_and_serde() {
        let digest = sha256(b"serde");
        let (sig, _) = sign_with_scalar(7, &digest);

        let hex_str = sig.to_hex();
        assert_eq!(hex_str.len(), SIGNATURE_LEN * 2);
        assert_eq!(RecoverableSignature::from_hex(&hex_str).unwrap(), sig);

        let json = serde_json::to_string(&sig).unwrap();
        let back: RecoverableSignature = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sig);
    }
}
