//! Public/private role checks over [`RsaKeyMaterial`].

use common::encoding::is_null_or_empty;
use common::{GuardError, KeyRole, RsaKeyMaterial};

/// Returns `true` if `key` is a well-formed RSA key of the `expected` role.
///
/// A public key has `modulus` and `exponent` set and every CRT field absent or
/// empty. A private key has all eight fields set. The check is exclusive on
/// the CRT fields, so a private key is never accepted as a public one and a
/// record can fail both roles.
pub fn is_valid_key(key: &RsaKeyMaterial, expected: KeyRole) -> bool {
    let private_fields = key.private_fields();
    let crt_ok = match expected {
        KeyRole::Private => private_fields.iter().all(|f| !is_null_or_empty(*f)),
        KeyRole::Public => private_fields.iter().all(|f| is_null_or_empty(*f)),
    };
    if !crt_ok {
        return false;
    }

    !is_null_or_empty(key.exponent.as_deref()) && !is_null_or_empty(key.modulus.as_deref())
}

/// Parse public-key text and require the result to be a valid public key.
///
/// # Errors
///
/// Returns [`GuardError::NullOrEmptyInput`] for absent or blank text and
/// [`GuardError::MalformedKeyMaterial`] for unparseable text or a record that
/// is not a valid public key.
pub fn parse_public_key(xml: Option<&str>) -> Result<RsaKeyMaterial, GuardError> {
    let key = RsaKeyMaterial::from_public_key_xml(xml)?;
    if !is_valid_key(&key, KeyRole::Public) {
        return Err(GuardError::MalformedKeyMaterial(
            "text does not describe a public key with modulus and exponent".into(),
        ));
    }
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::ErrorKind;

    fn full_private() -> RsaKeyMaterial {
        RsaKeyMaterial {
            modulus: Some(vec![1]),
            exponent: Some(vec![1]),
            d: Some(vec![1]),
            dp: Some(vec![1]),
            dq: Some(vec![1]),
            inverse_q: Some(vec![1]),
            p: Some(vec![1]),
            q: Some(vec![1]),
        }
    }

    #[test]
    fn private_record_is_private_only() {
        let key = full_private();
        assert!(is_valid_key(&key, KeyRole::Private));
        assert!(!is_valid_key(&key, KeyRole::Public));
    }

    #[test]
    fn public_record_is_public_only() {
        let key = full_private().to_public();
        assert!(is_valid_key(&key, KeyRole::Public));
        assert!(!is_valid_key(&key, KeyRole::Private));
    }

    #[test]
    fn empty_crt_fields_still_count_as_public() {
        let key = RsaKeyMaterial {
            d: Some(Vec::new()),
            inverse_q: Some(Vec::new()),
            ..full_private().to_public()
        };
        assert!(is_valid_key(&key, KeyRole::Public));
    }

    #[test]
    fn each_missing_crt_field_breaks_private_role() {
        for idx in 0..6 {
            let mut key = full_private();
            let slot = match idx {
                0 => &mut key.d,
                1 => &mut key.dp,
                2 => &mut key.dq,
                3 => &mut key.inverse_q,
                4 => &mut key.p,
                _ => &mut key.q,
            };
            *slot = None;
            assert!(!is_valid_key(&key, KeyRole::Private), "field {idx}");
            // A partial CRT set is not a public key either.
            assert!(!is_valid_key(&key, KeyRole::Public), "field {idx}");
        }
    }

    #[test]
    fn missing_modulus_or_exponent_fails_both_roles() {
        for strip_modulus in [true, false] {
            let mut key = full_private();
            if strip_modulus {
                key.modulus = Some(Vec::new());
            } else {
                key.exponent = None;
            }
            assert!(!is_valid_key(&key, KeyRole::Private));
            assert!(!is_valid_key(&key.to_public(), KeyRole::Public));
        }
    }

    #[test]
    fn empty_record_is_neither_role() {
        let key = RsaKeyMaterial::default();
        assert!(!is_valid_key(&key, KeyRole::Public));
        assert!(!is_valid_key(&key, KeyRole::Private));
    }

    #[test]
    fn parse_public_key_accepts_exported_text() {
        let xml = full_private().to_public_key_xml();
        let key = parse_public_key(Some(xml.as_str())).unwrap();
        assert!(is_valid_key(&key, KeyRole::Public));
    }

    #[test]
    fn parse_public_key_rejects_empty_document() {
        let xml = RsaKeyMaterial::default().to_public_key_xml();
        let err = parse_public_key(Some(xml.as_str())).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedKeyMaterial);

        let err = parse_public_key(None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NullOrEmptyInput);
    }
}
