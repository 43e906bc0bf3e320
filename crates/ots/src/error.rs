use std::fmt;

/// The intermediate value that reduced to zero modulo the group order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DegenerateValue {
    /// The nonce scalar `k`.
    Nonce,
    /// The x-coordinate of the nonce point `k*G`.
    NonceX,
    /// The second scalar `s`.
    Scalar,
}

impl fmt::Display for DegenerateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DegenerateValue::Nonce => f.write_str("k"),
            DegenerateValue::NonceX => f.write_str("R.x"),
            DegenerateValue::Scalar => f.write_str("s"),
        }
    }
}

/// Error types for one-time signature generation.
///
/// Verification has no error channel; it only ever answers true or false.
#[derive(Debug, thiserror::Error)]
pub enum OtsError {
    /// The seed produced a zero value; retry with a different seed.
    #[error("seed results in zero {0} value")]
    DegenerateSeed(DegenerateValue),

    /// Drawing a seed from the random source failed.
    #[error("random source failure: {0}")]
    RandomSourceFailure(String),

    /// No public key is consistent with the constructed signature.
    #[error("public key recovery failed: {0}")]
    RecoveryFailure(String),

    /// The recovered bytes do not decode to a curve point.
    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    /// The generator configuration was rejected.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Error from primitives crate.
    #[error("primitives error: {0}")]
    Primitives(#[from] ots_primitives::PrimitivesError),
}
