//! Block cipher identifiers and their CBC/PKCS#7 implementations.
//!
//! Every call builds a fresh `cbc` transform bound to the given key and IV,
//! feeds the whole input, and drops the transform before returning.

use std::fmt;

use aes::{Aes128, Aes192, Aes256};
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockCipher, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use common::GuardError;
use des::{Des, TdesEde2, TdesEde3};
use serde::{Deserialize, Serialize};

use super::sizes::{legal_key_sizes, KeySizeDescriptor};

/// Block cipher capability used by [`SymmetricCipher`](super::SymmetricCipher).
#[cfg_attr(test, mockall::automock)]
pub trait SymmetricAlgorithm: Send + Sync {
    fn name(&self) -> &'static str;

    /// Block size in bits; the IV must be exactly this long.
    fn block_size_bits(&self) -> usize;

    fn key_size_descriptors(&self) -> Vec<KeySizeDescriptor>;

    fn encrypt(&self, key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>, GuardError>;

    fn decrypt(&self, key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>, GuardError>;
}

/// Legal key sizes of `algorithm`, largest first; empty when absent.
pub fn legal_key_sizes_of(algorithm: Option<&dyn SymmetricAlgorithm>) -> Vec<usize> {
    algorithm.map_or_else(Vec::new, |a| legal_key_sizes(&a.key_size_descriptors()))
}

/// Supported block ciphers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymmetricAlgorithmId {
    /// Single DES. Kept for interoperability only.
    Des,
    TripleDes,
    Aes,
}

impl SymmetricAlgorithmId {
    pub const ALL: [SymmetricAlgorithmId; 3] = [
        SymmetricAlgorithmId::Des,
        SymmetricAlgorithmId::TripleDes,
        SymmetricAlgorithmId::Aes,
    ];

    /// Build the default implementation for this identifier.
    pub fn algorithm(self) -> Box<dyn SymmetricAlgorithm> {
        match self {
            SymmetricAlgorithmId::Des => Box::new(DesCbc),
            SymmetricAlgorithmId::TripleDes => Box::new(TripleDesCbc),
            SymmetricAlgorithmId::Aes => Box::new(AesCbc),
        }
    }
}

impl fmt::Display for SymmetricAlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SymmetricAlgorithmId::Des => "DES",
            SymmetricAlgorithmId::TripleDes => "3DES",
            SymmetricAlgorithmId::Aes => "AES",
        })
    }
}

// ---------------------------------------------------------------------------
// CBC helpers
// ---------------------------------------------------------------------------

fn cbc_encrypt<C>(key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>, GuardError>
where
    C: BlockEncryptMut + BlockCipher,
    cbc::Encryptor<C>: KeyIvInit + BlockEncryptMut,
{
    let transform = cbc::Encryptor::<C>::new_from_slices(key, iv)
        .map_err(|e| GuardError::provider("cbc encrypt", e))?;
    Ok(transform.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
}

fn cbc_decrypt<C>(key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>, GuardError>
where
    C: BlockDecryptMut + BlockCipher,
    cbc::Decryptor<C>: KeyIvInit + BlockDecryptMut,
{
    let transform = cbc::Decryptor::<C>::new_from_slices(key, iv)
        .map_err(|e| GuardError::provider("cbc decrypt", e))?;
    transform
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|e| GuardError::provider("cbc decrypt", e))
}

fn unsupported_key(operation: &'static str, key: &[u8]) -> GuardError {
    GuardError::provider(operation, format!("no cipher for a {}-bit key", key.len() * 8))
}

// ---------------------------------------------------------------------------
// Implementations
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default)]
pub struct DesCbc;

impl SymmetricAlgorithm for DesCbc {
    fn name(&self) -> &'static str {
        "des-cbc"
    }

    fn block_size_bits(&self) -> usize {
        64
    }

    fn key_size_descriptors(&self) -> Vec<KeySizeDescriptor> {
        vec![KeySizeDescriptor::fixed(64)]
    }

    fn encrypt(&self, key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>, GuardError> {
        cbc_encrypt::<Des>(key, iv, plaintext)
    }

    fn decrypt(&self, key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>, GuardError> {
        cbc_decrypt::<Des>(key, iv, ciphertext)
    }
}

/// Two-key (128-bit) or three-key (192-bit) EDE Triple DES.
#[derive(Debug, Clone, Copy, Default)]
pub struct TripleDesCbc;

impl SymmetricAlgorithm for TripleDesCbc {
    fn name(&self) -> &'static str {
        "3des-cbc"
    }

    fn block_size_bits(&self) -> usize {
        64
    }

    fn key_size_descriptors(&self) -> Vec<KeySizeDescriptor> {
        vec![KeySizeDescriptor::new(128, 192, 64)]
    }

    fn encrypt(&self, key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>, GuardError> {
        match key.len() {
            16 => cbc_encrypt::<TdesEde2>(key, iv, plaintext),
            24 => cbc_encrypt::<TdesEde3>(key, iv, plaintext),
            _ => Err(unsupported_key("cbc encrypt", key)),
        }
    }

    fn decrypt(&self, key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>, GuardError> {
        match key.len() {
            16 => cbc_decrypt::<TdesEde2>(key, iv, ciphertext),
            24 => cbc_decrypt::<TdesEde3>(key, iv, ciphertext),
            _ => Err(unsupported_key("cbc decrypt", key)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AesCbc;

impl SymmetricAlgorithm for AesCbc {
    fn name(&self) -> &'static str {
        "aes-cbc"
    }

    fn block_size_bits(&self) -> usize {
        128
    }

    fn key_size_descriptors(&self) -> Vec<KeySizeDescriptor> {
        vec![KeySizeDescriptor::new(128, 256, 64)]
    }

    fn encrypt(&self, key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>, GuardError> {
        match key.len() {
            16 => cbc_encrypt::<Aes128>(key, iv, plaintext),
            24 => cbc_encrypt::<Aes192>(key, iv, plaintext),
            32 => cbc_encrypt::<Aes256>(key, iv, plaintext),
            _ => Err(unsupported_key("cbc encrypt", key)),
        }
    }

    fn decrypt(&self, key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>, GuardError> {
        match key.len() {
            16 => cbc_decrypt::<Aes128>(key, iv, ciphertext),
            24 => cbc_decrypt::<Aes192>(key, iv, ciphertext),
            32 => cbc_decrypt::<Aes256>(key, iv, ciphertext),
            _ => Err(unsupported_key("cbc decrypt", key)),
        }
    }
}
