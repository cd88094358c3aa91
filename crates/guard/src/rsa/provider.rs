//! RSA primitive seam and the default RustCrypto-backed implementation.
//!
//! Nothing in this module validates key roles or block sizes; callers go
//! through [`RsaCipher`](super::RsaCipher) for that. Each call imports the key
//! into a fresh `rsa` key object that is dropped before returning.

use common::{GuardError, RsaKeyMaterial, RsaPadding};
use rand::rngs::OsRng;
use rsa::traits::{PrivateKeyParts, PublicKeyParts};
use rsa::{BigUint, Oaep, Pkcs1v15Encrypt, RsaPrivateKey, RsaPublicKey};
use sha1::Sha1;

/// Largest modulus, in bits, the default provider will import.
pub const MAX_MODULUS_BITS: usize = 16384;

/// RSA encrypt/decrypt capability.
#[cfg_attr(test, mockall::automock)]
pub trait RsaProvider: Send + Sync {
    /// Encrypt one block under `public_key`.
    fn encrypt(
        &self,
        public_key: &RsaKeyMaterial,
        plaintext: &[u8],
        padding: RsaPadding,
    ) -> Result<Vec<u8>, GuardError>;

    /// Decrypt one block under `private_key`.
    fn decrypt(
        &self,
        private_key: &RsaKeyMaterial,
        ciphertext: &[u8],
        padding: RsaPadding,
    ) -> Result<Vec<u8>, GuardError>;
}

/// [`RsaProvider`] backed by the `rsa` crate.
///
/// OAEP uses SHA-1 for both the label hash and MGF1.
#[derive(Debug, Clone, Copy, Default)]
pub struct SoftwareRsaProvider;

impl RsaProvider for SoftwareRsaProvider {
    fn encrypt(
        &self,
        public_key: &RsaKeyMaterial,
        plaintext: &[u8],
        padding: RsaPadding,
    ) -> Result<Vec<u8>, GuardError> {
        let key = import_public(public_key)?;
        let mut rng = OsRng;
        let result = match padding {
            RsaPadding::Pkcs1 => key.encrypt(&mut rng, Pkcs1v15Encrypt, plaintext),
            RsaPadding::Oaep => key.encrypt(&mut rng, Oaep::new::<Sha1>(), plaintext),
        };
        result.map_err(|e| GuardError::provider("rsa encrypt", e))
    }

    fn decrypt(
        &self,
        private_key: &RsaKeyMaterial,
        ciphertext: &[u8],
        padding: RsaPadding,
    ) -> Result<Vec<u8>, GuardError> {
        let key = import_private(private_key)?;
        let result = match padding {
            RsaPadding::Pkcs1 => key.decrypt(Pkcs1v15Encrypt, ciphertext),
            RsaPadding::Oaep => key.decrypt(Oaep::new::<Sha1>(), ciphertext),
        };
        result.map_err(|e| GuardError::provider("rsa decrypt", e))
    }
}

/// Matching public and private exports of one generated key.
#[derive(Debug, Clone)]
pub struct RsaKeyPair {
    /// Modulus and exponent only.
    pub public: RsaKeyMaterial,
    /// All eight fields.
    pub private: RsaKeyMaterial,
}

/// Generate a fresh two-prime RSA key of `bits` bits with exponent 65537.
///
/// # Errors
///
/// Returns [`GuardError::ProviderFailure`] if the key cannot be generated or
/// its CRT values are unavailable.
pub fn generate_key_pair(bits: usize) -> Result<RsaKeyPair, GuardError> {
    let key = RsaPrivateKey::new(&mut OsRng, bits)
        .map_err(|e| GuardError::provider("rsa key generation", e))?;

    let crt_missing = || GuardError::provider("rsa key generation", "missing CRT values");
    let [p, q] = match key.primes() {
        [p, q] => [p.to_bytes_be(), q.to_bytes_be()],
        _ => return Err(crt_missing()),
    };
    let dp = key.dp().ok_or_else(crt_missing)?.to_bytes_be();
    let dq = key.dq().ok_or_else(crt_missing)?.to_bytes_be();
    let inverse_q = key.crt_coefficient().ok_or_else(crt_missing)?.to_bytes_be();

    let public = RsaKeyMaterial::public(key.n().to_bytes_be(), key.e().to_bytes_be());
    let private = RsaKeyMaterial {
        d: Some(key.d().to_bytes_be()),
        dp: Some(dp),
        dq: Some(dq),
        inverse_q: Some(inverse_q),
        p: Some(p),
        q: Some(q),
        ..public.clone()
    };
    Ok(RsaKeyPair { public, private })
}

fn component(value: &Option<Vec<u8>>, name: &str) -> Result<BigUint, GuardError> {
    match value.as_deref() {
        Some(bytes) if !bytes.is_empty() => Ok(BigUint::from_bytes_be(bytes)),
        _ => Err(GuardError::MalformedKeyMaterial(format!("{name} is missing"))),
    }
}

fn import_public(key: &RsaKeyMaterial) -> Result<RsaPublicKey, GuardError> {
    let n = component(&key.modulus, "modulus")?;
    let e = component(&key.exponent, "exponent")?;
    RsaPublicKey::new_with_max_size(n, e, MAX_MODULUS_BITS)
        .map_err(|err| GuardError::provider("rsa public key import", err))
}

// dp, dq and inverse_q are recomputed from the primes on import.
fn import_private(key: &RsaKeyMaterial) -> Result<RsaPrivateKey, GuardError> {
    let n = component(&key.modulus, "modulus")?;
    let e = component(&key.exponent, "exponent")?;
    let d = component(&key.d, "d")?;
    let p = component(&key.p, "p")?;
    let q = component(&key.q, "q")?;
    RsaPrivateKey::from_components(n, e, d, vec![p, q])
        .map_err(|err| GuardError::provider("rsa private key import", err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::ErrorKind;

    #[test]
    fn generated_pair_exports_expected_fields() {
        let pair = generate_key_pair(1024).unwrap();
        assert_eq!(pair.public.modulus_bits(), 1024);
        assert_eq!(pair.public.exponent.as_deref(), Some(&[0x01, 0x00, 0x01][..]));
        assert!(pair.public.private_fields().iter().all(Option::is_none));
        assert!(pair
            .private
            .private_fields()
            .iter()
            .all(|f| f.map_or(false, |b| !b.is_empty())));
        assert_eq!(pair.private.modulus, pair.public.modulus);
    }

    #[test]
    fn provider_round_trip_both_paddings() {
        let pair = generate_key_pair(1024).unwrap();
        let provider = SoftwareRsaProvider;
        for padding in [RsaPadding::Pkcs1, RsaPadding::Oaep] {
            let ct = provider.encrypt(&pair.public, b"provider block", padding).unwrap();
            assert_eq!(ct.len(), 128);
            let pt = provider.decrypt(&pair.private, &ct, padding).unwrap();
            assert_eq!(pt, b"provider block");
        }
    }

    #[test]
    fn oversized_block_is_a_provider_failure() {
        let pair = generate_key_pair(1024).unwrap();
        let err = SoftwareRsaProvider
            .encrypt(&pair.public, &[0u8; 120], RsaPadding::Pkcs1)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ProviderFailure);
    }

    #[test]
    fn import_without_modulus_is_malformed() {
        let key = RsaKeyMaterial {
            exponent: Some(vec![1, 0, 1]),
            ..RsaKeyMaterial::default()
        };
        let err = SoftwareRsaProvider
            .encrypt(&key, b"x", RsaPadding::Pkcs1)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedKeyMaterial);
    }
}
