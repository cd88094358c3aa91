//! Block cipher encrypt/decrypt contract.

use common::GuardError;
use tracing::debug;

use super::algorithm::{SymmetricAlgorithm, SymmetricAlgorithmId};
use super::sizes::legal_key_sizes;

/// Validating front end for one [`SymmetricAlgorithm`].
///
/// Checks run in order: data, key and IV present; key size legal; IV size
/// equal to the block size. The algorithm is only called once all pass.
pub struct SymmetricCipher {
    algorithm: Box<dyn SymmetricAlgorithm>,
}

impl SymmetricCipher {
    pub fn new(id: SymmetricAlgorithmId) -> Self {
        Self::with_algorithm(id.algorithm())
    }

    pub fn with_algorithm(algorithm: Box<dyn SymmetricAlgorithm>) -> Self {
        Self { algorithm }
    }

    pub fn block_size_bits(&self) -> usize {
        self.algorithm.block_size_bits()
    }

    /// Legal key sizes in bits, largest first.
    pub fn legal_key_sizes(&self) -> Vec<usize> {
        legal_key_sizes(&self.algorithm.key_size_descriptors())
    }

    /// # Errors
    ///
    /// [`GuardError::NullOrEmptyInput`] naming the missing argument,
    /// [`GuardError::KeySizeNotSupported`], [`GuardError::IvSizeMismatch`], or
    /// [`GuardError::ProviderFailure`] from the algorithm.
    pub fn encrypt(
        &self,
        plaintext: Option<&[u8]>,
        key: Option<&[u8]>,
        iv: Option<&[u8]>,
    ) -> Result<Vec<u8>, GuardError> {
        let (plaintext, key, iv) = self.check(plaintext, "plaintext", key, iv)?;
        debug!(
            algorithm = self.algorithm.name(),
            key_bits = key.len() * 8,
            input_len = plaintext.len(),
            "delegating block cipher encrypt"
        );
        self.algorithm.encrypt(key, iv, plaintext)
    }

    /// # Errors
    ///
    /// As [`encrypt`](Self::encrypt); a wrong key or corrupted input usually
    /// surfaces as a padding [`GuardError::ProviderFailure`].
    pub fn decrypt(
        &self,
        ciphertext: Option<&[u8]>,
        key: Option<&[u8]>,
        iv: Option<&[u8]>,
    ) -> Result<Vec<u8>, GuardError> {
        let (ciphertext, key, iv) = self.check(ciphertext, "ciphertext", key, iv)?;
        debug!(
            algorithm = self.algorithm.name(),
            key_bits = key.len() * 8,
            input_len = ciphertext.len(),
            "delegating block cipher decrypt"
        );
        self.algorithm.decrypt(key, iv, ciphertext)
    }

    fn check<'a>(
        &self,
        data: Option<&'a [u8]>,
        data_argument: &'static str,
        key: Option<&'a [u8]>,
        iv: Option<&'a [u8]>,
    ) -> Result<(&'a [u8], &'a [u8], &'a [u8]), GuardError> {
        let data = non_empty(data, data_argument)?;
        let key = non_empty(key, "key")?;
        let iv = non_empty(iv, "iv")?;

        let key_bits = key.len() * 8;
        let legal = self.legal_key_sizes();
        if !legal.contains(&key_bits) {
            return Err(GuardError::KeySizeNotSupported { key_bits, legal });
        }

        let iv_bits = iv.len() * 8;
        let block_bits = self.block_size_bits();
        if iv_bits != block_bits {
            return Err(GuardError::IvSizeMismatch {
                iv_bits,
                block_bits,
            });
        }

        Ok((data, key, iv))
    }
}

fn non_empty<'a>(
    value: Option<&'a [u8]>,
    argument: &'static str,
) -> Result<&'a [u8], GuardError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(GuardError::NullOrEmptyInput { argument }),
    }
}
