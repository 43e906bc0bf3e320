//! The one-time signature bundle.

use serde::{Serialize, Serializer};

use ots_primitives::ec::signature::SIGNATURE_LEN;
use ots_primitives::ec::{PublicKey, RecoverableSignature};
use ots_primitives::Address;

/// A synthesized signature together with the message, the public key
/// recovered from it, and that key's address.
///
/// Nobody knows the private key behind `public_key`; the signature is
/// valid for `message` under `public_key` by construction. Bundles are only
/// produced by the generator and cannot be modified afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OneTimeSignature {
    signature: RecoverableSignature,
    #[serde(serialize_with = "serialize_hex")]
    message: [u8; 32],
    public_key: PublicKey,
    address: Address,
}

impl OneTimeSignature {
    pub(crate) fn new(
        signature: RecoverableSignature,
        message: [u8; 32],
        public_key: PublicKey,
        address: Address,
    ) -> Self {
        OneTimeSignature {
            signature,
            message,
            public_key,
            address,
        }
    }

    /// The recoverable signature.
    pub fn signature(&self) -> &RecoverableSignature {
        &self.signature
    }

    /// The signature in its 65-byte `r || s || v` wire layout.
    pub fn signature_bytes(&self) -> [u8; SIGNATURE_LEN] {
        self.signature.to_bytes()
    }

    /// The 32-byte message digest that was signed.
    pub fn message(&self) -> &[u8; 32] {
        &self.message
    }

    /// The public key recovered from the signature.
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// The address of the recovered public key.
    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Check the signature against the bundled public key.
    ///
    /// See [`crate::verifier::verify`].
    pub fn verify(&self) -> bool {
        crate::verifier::verify(self)
    }
}

fn serialize_hex<S: Serializer>(bytes: &[u8; 32], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&hex::encode(bytes))
}
