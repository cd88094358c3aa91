//! Validation and wrapper layer in front of RSA, block cipher and digest
//! primitives.
//!
//! Every public operation checks its inputs in a fixed order and fails with a
//! [`GuardError`] before the underlying primitive is reached. The primitives
//! themselves sit behind the [`rsa::RsaProvider`],
//! [`symmetric::SymmetricAlgorithm`] and [`hash::DigestAlgorithm`] traits.

pub mod config;
pub mod hash;
pub mod rsa;
pub mod symmetric;
pub mod telemetry;

pub use common::encoding;
pub use common::{ErrorKind, GuardError, KeyRole, RsaKeyMaterial, RsaPadding};
