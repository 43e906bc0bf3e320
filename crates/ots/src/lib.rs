//! One-time signatures over secp256k1.
//!
//! A one-time signature is an ECDSA signature built from two seed-derived
//! scalars instead of a private key. Public key recovery then yields a key
//! (and address) for which the signature is valid, although nobody knows
//! the matching private key.
//!
//! ```no_run
//! use ots::{generate, OtsError};
//!
//! fn demo(message: [u8; 32]) -> Result<(), OtsError> {
//!     let bundle = generate(None, &message)?;
//!     assert!(bundle.verify());
//!     println!("signer address: {}", bundle.address());
//!     Ok(())
//! }
//! ```

pub mod bundle;
pub mod config;
pub mod generator;
pub mod verifier;

mod error;
pub use bundle::OneTimeSignature;
pub use config::GeneratorConfig;
pub use error::{DegenerateValue, OtsError};
pub use generator::{generate, Generator, SEED_LEN};
pub use verifier::verify;
