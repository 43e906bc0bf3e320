//! Generator configuration.

use crate::OtsError;

/// Domain tag hashed in front of the seed to derive the nonce scalar `k`.
pub const DEFAULT_NONCE_TAG: &[u8] = b"k";
/// Domain tag hashed in front of the seed to derive the second scalar `s`.
pub const DEFAULT_SCALAR_TAG: &[u8] = b"s";

/// Seed derivation settings.
///
/// Scalars are derived as `SHA-256(tag || seed) mod N`. The tags must be
/// non-empty and distinct, otherwise `k` and `s` would coincide.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub nonce_tag: Vec<u8>,
    pub scalar_tag: Vec<u8>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            nonce_tag: DEFAULT_NONCE_TAG.to_vec(),
            scalar_tag: DEFAULT_SCALAR_TAG.to_vec(),
        }
    }
}

impl GeneratorConfig {
    /// Build a validated configuration with custom domain tags.
    pub fn with_tags(
        nonce_tag: impl Into<Vec<u8>>,
        scalar_tag: impl Into<Vec<u8>>,
    ) -> Result<Self, OtsError> {
        let config = GeneratorConfig {
            nonce_tag: nonce_tag.into(),
            scalar_tag: scalar_tag.into(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the tag constraints.
    pub fn validate(&self) -> Result<(), OtsError> {
        if self.nonce_tag.is_empty() || self.scalar_tag.is_empty() {
            return Err(OtsError::InvalidConfig("domain tags must not be empty".to_string()));
        }
        if self.nonce_tag == self.scalar_tag {
            return Err(OtsError::InvalidConfig(
                "nonce and scalar tags must differ".to_string(),
            ));
        }
        Ok(())
    }
}
