//! Scalar helpers over the secp256k1 group order N.

use k256::elliptic_curve::ops::Reduce;
use k256::elliptic_curve::Field;
use k256::{Scalar, U256};

/// Interpret 32 big-endian bytes as an integer and reduce it modulo N.
pub fn reduce_be_bytes(bytes: &[u8; 32]) -> Scalar {
    let uint = U256::from_be_slice(bytes);
    <Scalar as Reduce<U256>>::reduce(uint)
}

/// Encode a scalar as 32 big-endian bytes.
pub fn to_be_bytes(scalar: &Scalar) -> [u8; 32] {
    scalar.to_bytes().into()
}

/// Report whether a scalar is zero.
pub fn is_zero(scalar: &Scalar) -> bool {
    bool::from(Field::is_zero(scalar))
}
