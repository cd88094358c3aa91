//! Maximum plaintext block arithmetic for RSA encryption.
//!
//! The base formula is `(key_bits - 384) / 8` plus a per-padding offset. For a
//! byte-aligned modulus this equals the modulus length minus 11 bytes under
//! PKCS#1 v1.5 and minus 41 bytes under OAEP.
//!
//! # Known limitations
//!
//! The result is only meaningful for byte-aligned key sizes large enough to
//! keep it positive. For smaller keys the result goes to zero or negative and
//! is returned as-is, so every non-empty block is then rejected. It is never
//! clamped.
//!
//! The OAEP offset budgets 41 bytes of overhead, while OAEP with a SHA-1 label
//! hash needs 42. A block of exactly the OAEP maximum passes this check and is
//! then rejected by the provider.

use common::encoding::is_null_or_empty;
use common::RsaPadding;

const BASE_BITS: i64 = 384;
const PKCS1_OFFSET: i64 = 37;
const OAEP_OFFSET: i64 = 7;

/// Largest plaintext, in bytes, a `key_bits` RSA key can encrypt with `padding`.
///
/// Division truncates toward zero.
pub fn max_encryptable_bytes(key_bits: usize, padding: RsaPadding) -> i64 {
    let bits = i64::try_from(key_bits).unwrap_or(i64::MAX);
    let offset = match padding {
        RsaPadding::Pkcs1 => PKCS1_OFFSET,
        RsaPadding::Oaep => OAEP_OFFSET,
    };
    (bits - BASE_BITS) / 8 + offset
}

/// Returns `true` if `block` is non-empty and fits under
/// [`max_encryptable_bytes`] for the given key size and padding.
pub fn is_valid_encryption_block(
    block: Option<&[u8]>,
    key_bits: usize,
    padding: RsaPadding,
) -> bool {
    if is_null_or_empty(block) {
        return false;
    }
    block
        .and_then(|b| i64::try_from(b.len()).ok())
        .map_or(false, |len| len <= max_encryptable_bytes(key_bits, padding))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PKCS1_OVERHEAD: usize = 11;
    const OAEP_OVERHEAD: usize = 41;
    const KEY_SIZES: [usize; 5] = [1024, 2048, 4096, 8192, 16384];

    #[test]
    fn known_maximums() {
        assert_eq!(max_encryptable_bytes(1024, RsaPadding::Pkcs1), 117);
        assert_eq!(max_encryptable_bytes(1024, RsaPadding::Oaep), 87);
        assert_eq!(max_encryptable_bytes(2048, RsaPadding::Pkcs1), 245);
        assert_eq!(max_encryptable_bytes(2048, RsaPadding::Oaep), 215);
    }

    #[test]
    fn overhead_matches_padding_scheme() {
        for bits in KEY_SIZES {
            let bytes = (bits / 8) as i64;
            assert_eq!(
                max_encryptable_bytes(bits, RsaPadding::Pkcs1),
                bytes - PKCS1_OVERHEAD as i64
            );
            assert_eq!(
                max_encryptable_bytes(bits, RsaPadding::Oaep),
                bytes - OAEP_OVERHEAD as i64
            );
        }
    }

    #[test]
    fn small_keys_are_not_clamped() {
        assert_eq!(max_encryptable_bytes(0, RsaPadding::Pkcs1), -11);
        assert_eq!(max_encryptable_bytes(256, RsaPadding::Oaep), -9);
        assert!(!is_valid_encryption_block(Some(&[1u8][..]), 256, RsaPadding::Oaep));
    }

    #[test]
    fn truncates_toward_zero() {
        // (100 - 384) / 8 == -35 with truncation, -36 with flooring.
        assert_eq!(max_encryptable_bytes(100, RsaPadding::Pkcs1), 2);
    }

    #[test]
    fn block_at_maximum_is_valid() {
        for bits in KEY_SIZES {
            for padding in [RsaPadding::Pkcs1, RsaPadding::Oaep] {
                let max = max_encryptable_bytes(bits, padding) as usize;
                let block = vec![0u8; max];
                assert!(is_valid_encryption_block(Some(block.as_slice()), bits, padding));
            }
        }
    }

    #[test]
    fn block_over_maximum_is_invalid() {
        for bits in KEY_SIZES {
            let max = max_encryptable_bytes(bits, RsaPadding::Pkcs1) as usize;
            let block = vec![0u8; max + 1];
            assert!(!is_valid_encryption_block(Some(block.as_slice()), bits, RsaPadding::Pkcs1));
        }
    }

    #[test]
    fn absent_or_empty_block_is_invalid() {
        for bits in KEY_SIZES {
            assert!(!is_valid_encryption_block(None, bits, RsaPadding::Pkcs1));
            assert!(!is_valid_encryption_block(Some(&[0u8; 0][..]), bits, RsaPadding::Pkcs1));
        }
    }
}
