//! Ledger address handling.
//!
//! An address is the last 20 bytes of Keccak-256 over a public key's
//! uncompressed coordinates. Addresses are displayed with the EIP-55
//! mixed-case checksum and parsed from hex in any case.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::ec::public_key::PublicKey;
use crate::hash::keccak256;
use crate::PrimitivesError;

/// Length of an address in bytes.
pub const ADDRESS_LEN: usize = 20;

/// A 20-byte ledger account address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Address([u8; ADDRESS_LEN]);

impl Address {
    /// Wrap a raw 20-byte address.
    pub fn new(bytes: [u8; ADDRESS_LEN]) -> Self {
        Address(bytes)
    }

    /// Derive the address of a public key.
    ///
    /// # Arguments
    /// * `pub_key` - The public key to derive from.
    ///
    /// # Returns
    /// The last 20 bytes of `keccak256(X || Y)`.
    pub fn from_public_key(pub_key: &PublicKey) -> Self {
        let uncompressed = pub_key.to_uncompressed();
        let hash = keccak256(&uncompressed[1..]);
        let mut out = [0u8; ADDRESS_LEN];
        out.copy_from_slice(&hash[32 - ADDRESS_LEN..]);
        Address(out)
    }

    /// Create an address from a byte slice.
    ///
    /// # Returns
    /// An error if the slice is not exactly 20 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        if bytes.len() != ADDRESS_LEN {
            return Err(PrimitivesError::InvalidKeyLength {
                expected: ADDRESS_LEN,
                got: bytes.len(),
            });
        }
        let mut out = [0u8; ADDRESS_LEN];
        out.copy_from_slice(bytes);
        Ok(Address(out))
    }

    /// Parse a hex address, with or without the `0x` prefix.
    ///
    /// Case is not validated against the checksum; all-lowercase,
    /// all-uppercase, and mixed-case inputs are accepted.
    pub fn from_hex(s: &str) -> Result<Self, PrimitivesError> {
        let stripped = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        if stripped.len() != ADDRESS_LEN * 2 {
            return Err(PrimitivesError::InvalidAddress(format!(
                "expected {} hex characters, got {}",
                ADDRESS_LEN * 2,
                stripped.len()
            )));
        }
        let bytes = hex::decode(stripped)?;
        Self::from_bytes(&bytes)
    }

    /// Access the raw address bytes.
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }

    /// Encode the address as `0x`-prefixed EIP-55 checksummed hex.
    ///
    /// Each hex letter is uppercased when the matching nibble of
    /// `keccak256(lowercase_hex)` is 8 or greater.
    pub fn to_checksum_hex(&self) -> String {
        let lower = hex::encode(self.0);
        let hash = keccak256(lower.as_bytes());

        let mut out = String::with_capacity(2 + lower.len());
        out.push_str("0x");
        for (i, c) in lower.chars().enumerate() {
            let nibble = if i % 2 == 0 {
                hash[i / 2] >> 4
            } else {
                hash[i / 2] & 0x0f
            };
            if c.is_ascii_alphabetic() && nibble >= 8 {
                out.push(c.to_ascii_uppercase());
            } else {
                out.push(c);
            }
        }
        out
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_checksum_hex())
    }
}

impl FromStr for Address {
    type Err = PrimitivesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Address::from_hex(s)
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_checksum_hex())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Address::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
