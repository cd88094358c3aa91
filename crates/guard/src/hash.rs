//! One-shot digest computation with an input precondition.
//!
//! The whole input is hashed in a single call; there is no incremental
//! interface.

use std::fmt;
use std::marker::PhantomData;

use common::GuardError;
use ripemd::Ripemd160;
use serde::{Deserialize, Serialize};
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha384, Sha512};
use tracing::debug;

/// Digest capability used by [`Hasher`].
#[cfg_attr(test, mockall::automock)]
pub trait DigestAlgorithm: Send + Sync {
    fn name(&self) -> &'static str;

    /// Fixed output size in bits.
    fn digest_size_bits(&self) -> usize;

    fn compute(&self, data: &[u8]) -> Vec<u8>;
}

/// Supported digest algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigestAlgorithmId {
    Sha1,
    Sha256,
    Sha384,
    Sha512,
    Ripemd160,
}

impl DigestAlgorithmId {
    pub const ALL: [DigestAlgorithmId; 5] = [
        DigestAlgorithmId::Sha1,
        DigestAlgorithmId::Sha256,
        DigestAlgorithmId::Sha384,
        DigestAlgorithmId::Sha512,
        DigestAlgorithmId::Ripemd160,
    ];

    /// Build the default implementation for this identifier.
    pub fn algorithm(self) -> Box<dyn DigestAlgorithm> {
        match self {
            DigestAlgorithmId::Sha1 => Box::new(RustCryptoDigest::<Sha1>::new("sha1")),
            DigestAlgorithmId::Sha256 => Box::new(RustCryptoDigest::<Sha256>::new("sha256")),
            DigestAlgorithmId::Sha384 => Box::new(RustCryptoDigest::<Sha384>::new("sha384")),
            DigestAlgorithmId::Sha512 => Box::new(RustCryptoDigest::<Sha512>::new("sha512")),
            DigestAlgorithmId::Ripemd160 => {
                Box::new(RustCryptoDigest::<Ripemd160>::new("ripemd160"))
            }
        }
    }
}

impl fmt::Display for DigestAlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DigestAlgorithmId::Sha1 => "SHA-1",
            DigestAlgorithmId::Sha256 => "SHA-256",
            DigestAlgorithmId::Sha384 => "SHA-384",
            DigestAlgorithmId::Sha512 => "SHA-512",
            DigestAlgorithmId::Ripemd160 => "RIPEMD-160",
        })
    }
}

// Any RustCrypto `Digest`; a fresh hasher state is created per call.
struct RustCryptoDigest<D> {
    name: &'static str,
    _digest: PhantomData<fn() -> D>,
}

impl<D> RustCryptoDigest<D> {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            _digest: PhantomData,
        }
    }
}

impl<D: Digest> DigestAlgorithm for RustCryptoDigest<D> {
    fn name(&self) -> &'static str {
        self.name
    }

    fn digest_size_bits(&self) -> usize {
        <D as Digest>::output_size() * 8
    }

    fn compute(&self, data: &[u8]) -> Vec<u8> {
        D::digest(data).to_vec()
    }
}

/// Validating front end for one [`DigestAlgorithm`].
pub struct Hasher {
    algorithm: Box<dyn DigestAlgorithm>,
}

impl Hasher {
    pub fn new(id: DigestAlgorithmId) -> Self {
        Self::with_algorithm(id.algorithm())
    }

    pub fn with_algorithm(algorithm: Box<dyn DigestAlgorithm>) -> Self {
        Self { algorithm }
    }

    pub fn digest_size_bits(&self) -> usize {
        self.algorithm.digest_size_bits()
    }

    /// Hash `data` in one call.
    ///
    /// # Errors
    ///
    /// Returns [`GuardError::NullOrEmptyInput`] if `data` is absent or empty.
    pub fn compute_digest(&self, data: Option<&[u8]>) -> Result<Vec<u8>, GuardError> {
        let data = match data {
            Some(d) if !d.is_empty() => d,
            _ => return Err(GuardError::NullOrEmptyInput { argument: "data" }),
        };
        debug!(algorithm = self.algorithm.name(), input_len = data.len(), "delegating digest");
        Ok(self.algorithm.compute(data))
    }
}
