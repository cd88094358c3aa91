//! RSA encrypt/decrypt contract.
//!
//! Preconditions are checked in a fixed order and the first failure wins:
//!
//! 1. input absent → [`GuardError::NullOrEmptyInput`]
//! 2. input empty → [`GuardError::BlockSizeExceeded`]
//! 3. key of the wrong role → [`GuardError::InvalidKeyRole`]
//! 4. (encrypt only) block larger than the key/padding maximum →
//!    [`GuardError::BlockSizeExceeded`]
//!
//! Only then is the provider called.

use common::{GuardError, KeyRole, RsaKeyMaterial, RsaPadding};
use tracing::debug;

use super::block::{is_valid_encryption_block, max_encryptable_bytes};
use super::provider::{RsaProvider, SoftwareRsaProvider};
use super::validator::is_valid_key;

/// Validating front end for an [`RsaProvider`].
#[derive(Debug, Clone, Default)]
pub struct RsaCipher<P = SoftwareRsaProvider> {
    provider: P,
}

impl RsaCipher {
    /// Cipher backed by [`SoftwareRsaProvider`].
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: RsaProvider> RsaCipher<P> {
    /// Cipher backed by a caller-supplied provider.
    pub fn with_provider(provider: P) -> Self {
        Self { provider }
    }

    /// Encrypt a single block with a public key.
    ///
    /// Passing a private key fails even though it carries a usable modulus and
    /// exponent, so private material is never handled where a public key is
    /// expected.
    ///
    /// # Errors
    ///
    /// See the module docs for precondition failures. Provider errors are
    /// returned as [`GuardError::ProviderFailure`].
    pub fn encrypt(
        &self,
        plaintext: Option<&[u8]>,
        public_key: &RsaKeyMaterial,
        padding: RsaPadding,
    ) -> Result<Vec<u8>, GuardError> {
        let plaintext = require_block(plaintext, "plaintext", public_key, padding)?;

        if !is_valid_key(public_key, KeyRole::Public) {
            return Err(GuardError::InvalidKeyRole {
                argument: "public_key",
                expected: KeyRole::Public,
            });
        }

        let key_bits = public_key.modulus_bits();
        if !is_valid_encryption_block(Some(plaintext), key_bits, padding) {
            return Err(GuardError::BlockSizeExceeded {
                max_bytes: max_encryptable_bytes(key_bits, padding),
                key_bits,
                padding,
                actual: plaintext.len(),
            });
        }

        debug!(key_bits, %padding, input_len = plaintext.len(), "delegating rsa encrypt");
        self.provider.encrypt(public_key, plaintext, padding)
    }

    /// Decrypt a single block with a private key.
    ///
    /// # Errors
    ///
    /// See the module docs for precondition failures. A public key fails with
    /// [`GuardError::InvalidKeyRole`]; provider errors (wrong key, bad padding)
    /// are returned as [`GuardError::ProviderFailure`].
    pub fn decrypt(
        &self,
        ciphertext: Option<&[u8]>,
        private_key: &RsaKeyMaterial,
        padding: RsaPadding,
    ) -> Result<Vec<u8>, GuardError> {
        let ciphertext = require_block(ciphertext, "ciphertext", private_key, padding)?;

        if !is_valid_key(private_key, KeyRole::Private) {
            return Err(GuardError::InvalidKeyRole {
                argument: "private_key",
                expected: KeyRole::Private,
            });
        }

        debug!(
            key_bits = private_key.modulus_bits(),
            %padding,
            input_len = ciphertext.len(),
            "delegating rsa decrypt"
        );
        self.provider.decrypt(private_key, ciphertext, padding)
    }
}

// An explicit empty buffer is an out-of-range block, not a missing argument.
fn require_block<'a>(
    block: Option<&'a [u8]>,
    argument: &'static str,
    key: &RsaKeyMaterial,
    padding: RsaPadding,
) -> Result<&'a [u8], GuardError> {
    match block {
        None => Err(GuardError::NullOrEmptyInput { argument }),
        Some([]) => {
            let key_bits = key.modulus_bits();
            Err(GuardError::BlockSizeExceeded {
                max_bytes: max_encryptable_bytes(key_bits, padding),
                key_bits,
                padding,
                actual: 0,
            })
        }
        Some(b) => Ok(b),
    }
}
