//! Common error types shared across crates.

use std::fmt::Display;

use thiserror::Error;

use crate::key::{KeyRole, RsaPadding};

/// Validation and provider failures raised by the guard layer.
///
/// Every variant is a fail-fast error raised at the point of detection.
/// Retrying with the same input cannot succeed.
#[derive(Debug, Error)]
pub enum GuardError {
    /// A required byte buffer or text argument was absent or zero-length.
    #[error("{argument} must be present and non-empty")]
    NullOrEmptyInput {
        /// Name of the offending argument.
        argument: &'static str,
    },

    /// Key material failed the public/private invariant the operation expects.
    #[error("{argument} must be a valid RSA {expected} key")]
    InvalidKeyRole {
        /// Name of the offending argument.
        argument: &'static str,
        /// The role the operation requires.
        expected: KeyRole,
    },

    /// The input block does not fit the key/padding combination.
    #[error(
        "block of {actual} bytes is out of range: max block size is {max_bytes} bytes \
         for a {key_bits}-bit RSA key with {padding} padding"
    )]
    BlockSizeExceeded {
        /// Computed maximum; may be negative for undersized keys.
        max_bytes: i64,
        key_bits: usize,
        padding: RsaPadding,
        actual: usize,
    },

    /// The symmetric key length is not one of the algorithm's legal sizes.
    #[error(
        "key size of {key_bits} bits is not supported by the selected algorithm; \
         legal sizes:\n{}",
        list_sizes(.legal)
    )]
    KeySizeNotSupported {
        key_bits: usize,
        /// Legal sizes in bits, descending.
        legal: Vec<usize>,
    },

    /// The IV length does not equal the algorithm's block size.
    #[error("iv is {iv_bits} bits but the algorithm block size is {block_bits} bits")]
    IvSizeMismatch { iv_bits: usize, block_bits: usize },

    /// Key text or a key record is not a well-formed key of either role.
    #[error("malformed key material: {0}")]
    MalformedKeyMaterial(String),

    /// The underlying primitive rejected the call after validation passed.
    #[error("provider failure during {operation}: {message}")]
    ProviderFailure {
        operation: &'static str,
        message: String,
    },
}

/// Payload-free discriminant of [`GuardError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NullOrEmptyInput,
    InvalidKeyRole,
    BlockSizeExceeded,
    KeySizeNotSupported,
    IvSizeMismatch,
    MalformedKeyMaterial,
    ProviderFailure,
}

impl GuardError {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            GuardError::NullOrEmptyInput { .. } => ErrorKind::NullOrEmptyInput,
            GuardError::InvalidKeyRole { .. } => ErrorKind::InvalidKeyRole,
            GuardError::BlockSizeExceeded { .. } => ErrorKind::BlockSizeExceeded,
            GuardError::KeySizeNotSupported { .. } => ErrorKind::KeySizeNotSupported,
            GuardError::IvSizeMismatch { .. } => ErrorKind::IvSizeMismatch,
            GuardError::MalformedKeyMaterial(_) => ErrorKind::MalformedKeyMaterial,
            GuardError::ProviderFailure { .. } => ErrorKind::ProviderFailure,
        }
    }

    /// Wrap a provider-level error raised during `operation`.
    pub fn provider(operation: &'static str, err: impl Display) -> Self {
        GuardError::ProviderFailure {
            operation,
            message: err.to_string(),
        }
    }
}

fn list_sizes(sizes: &[usize]) -> String {
    sizes
        .iter()
        .map(|bits| format!("\t--> {bits} bits"))
        .collect::<Vec<_>>()
        .join("\n")
}
