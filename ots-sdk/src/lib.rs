#![deny(missing_docs)]

//! One-time signature SDK.
//!
//! Re-exports the one-time signature components for convenient single-crate usage.

pub use ots_primitives as primitives;
pub use ots;

pub use ots::{generate, verify, Generator, GeneratorConfig, OneTimeSignature, OtsError};
