//! One-time signature synthesis.
//!
//! Builds an ECDSA signature from two scalars derived from a seed, then lets
//! public key recovery define the key the signature belongs to. No private
//! key ever exists.

use k256::elliptic_curve::point::AffineCoordinates;
use k256::elliptic_curve::scalar::IsHigh;
use k256::{ProjectivePoint, Scalar};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use tracing::{debug, error, warn};

use ots_primitives::ec::scalar::{is_zero, reduce_be_bytes, to_be_bytes};
use ots_primitives::ec::{PublicKey, RecoverableSignature};
use ots_primitives::hash::tagged_sha256;

use crate::bundle::OneTimeSignature;
use crate::config::GeneratorConfig;
use crate::error::{DegenerateValue, OtsError};

/// Length of a generation seed in bytes.
pub const SEED_LEN: usize = 32;

/// Synthesizes one-time signatures.
///
/// Holds only immutable configuration, so a single generator can be shared
/// across threads.
#[derive(Clone, Debug, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    /// Create a generator with a validated configuration.
    pub fn new(config: GeneratorConfig) -> Result<Self, OtsError> {
        config.validate()?;
        Ok(Generator { config })
    }

    /// The configuration in use.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate a one-time signature for `message`.
    ///
    /// When `seed` is `None` a fresh seed is drawn from the OS random source.
    ///
    /// # Arguments
    /// * `seed` - Optional 32-byte seed; the same seed and message always give the same bundle.
    /// * `message` - The 32-byte digest to sign, treated as opaque.
    ///
    /// # Returns
    /// The signature bundle, or an error if the seed is degenerate or recovery fails.
    pub fn generate(
        &self,
        seed: Option<&[u8; SEED_LEN]>,
        message: &[u8; 32],
    ) -> Result<OneTimeSignature, OtsError> {
        self.generate_with_rng(&mut OsRng, seed, message)
    }

    /// Generate a one-time signature, drawing a missing seed from `rng`.
    ///
    /// `rng` is only touched when `seed` is `None`.
    pub fn generate_with_rng<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
        seed: Option<&[u8; SEED_LEN]>,
        message: &[u8; 32],
    ) -> Result<OneTimeSignature, OtsError> {
        let seeded = seed.is_some();
        let seed = match seed {
            Some(seed) => *seed,
            None => {
                let mut fresh = [0u8; SEED_LEN];
                rng.try_fill_bytes(&mut fresh)
                    .map_err(|e| OtsError::RandomSourceFailure(e.to_string()))?;
                fresh
            }
        };

        let k = self.derive_nonce(&seed);
        let s = self.derive_scalar(&seed);
        let bundle = synthesize(&k, &s, message)?;

        debug!(address = %bundle.address(), seeded, "generated one-time signature");
        Ok(bundle)
    }

    /// Derive the nonce scalar `k = SHA-256(nonce_tag || seed) mod N`.
    ///
    /// The result may be zero; generation rejects that case.
    pub fn derive_nonce(&self, seed: &[u8; SEED_LEN]) -> Scalar {
        reduce_be_bytes(&tagged_sha256(&self.config.nonce_tag, seed))
    }

    /// Derive the second scalar `s = SHA-256(scalar_tag || seed) mod N`.
    ///
    /// The result may be zero; generation rejects that case.
    pub fn derive_scalar(&self, seed: &[u8; SEED_LEN]) -> Scalar {
        reduce_be_bytes(&tagged_sha256(&self.config.scalar_tag, seed))
    }
}

/// Generate a one-time signature with the default configuration.
///
/// Shorthand for `Generator::default().generate(seed, message)`.
pub fn generate(
    seed: Option<&[u8; SEED_LEN]>,
    message: &[u8; 32],
) -> Result<OneTimeSignature, OtsError> {
    Generator::default().generate(seed, message)
}

/// Build the bundle from already-derived scalars.
///
/// `r` is the x-coordinate of `k*G` and `v` the parity of its y-coordinate.
/// `s` is normalized to the lower half of the group order, flipping `v`
/// when negated so recovery still reconstructs the same key.
pub(crate) fn synthesize(
    k: &Scalar,
    s: &Scalar,
    message: &[u8; 32],
) -> Result<OneTimeSignature, OtsError> {
    if is_zero(k) {
        return Err(degenerate(DegenerateValue::Nonce));
    }

    let nonce_point = (ProjectivePoint::GENERATOR * *k).to_affine();
    let r: [u8; 32] = nonce_point.x().into();
    if is_zero(&reduce_be_bytes(&r)) {
        return Err(degenerate(DegenerateValue::NonceX));
    }

    if is_zero(s) {
        return Err(degenerate(DegenerateValue::Scalar));
    }

    let mut v = u8::from(bool::from(nonce_point.y_is_odd()));
    let s = if bool::from(IsHigh::is_high(s)) {
        v ^= 1;
        -*s
    } else {
        *s
    };

    let signature = RecoverableSignature::new(r, to_be_bytes(&s), v)?;

    let recovered = signature.recover_public_key_bytes(message).map_err(|e| {
        error!(error = %e, "recovery rejected a synthesized signature");
        OtsError::RecoveryFailure(e.to_string())
    })?;

    let public_key = PublicKey::from_bytes(&recovered).map_err(|e| {
        error!(error = %e, "recovered public key does not decode");
        OtsError::InvalidPublicKey(e.to_string())
    })?;

    let address = public_key.address();
    Ok(OneTimeSignature::new(signature, *message, public_key, address))
}

fn degenerate(value: DegenerateValue) -> OtsError {
    warn!(value = %value, "rejecting degenerate seed");
    OtsError::DegenerateSeed(value)
}
