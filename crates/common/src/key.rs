//! RSA key material and the role/padding selectors that accompany it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Public or private RSA key material.
///
/// Each field is independently optional: a public key carries only
/// `modulus` and `exponent`, a private key carries all eight. All integers are
/// unsigned big-endian byte strings. Records are never mutated after
/// construction; role checks live in `cipher_guard::rsa::is_valid_key`.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RsaKeyMaterial {
    pub modulus: Option<Vec<u8>>,
    /// Public exponent.
    pub exponent: Option<Vec<u8>>,
    /// Private exponent.
    pub d: Option<Vec<u8>>,
    /// `d mod (p - 1)`.
    pub dp: Option<Vec<u8>>,
    /// `d mod (q - 1)`.
    pub dq: Option<Vec<u8>>,
    /// `q^-1 mod p`.
    pub inverse_q: Option<Vec<u8>>,
    pub p: Option<Vec<u8>>,
    pub q: Option<Vec<u8>>,
}

impl RsaKeyMaterial {
    /// Build a record holding only the two public fields.
    pub fn public(modulus: Vec<u8>, exponent: Vec<u8>) -> Self {
        Self {
            modulus: Some(modulus),
            exponent: Some(exponent),
            ..Self::default()
        }
    }

    /// Copy of this record with every private field removed.
    pub fn to_public(&self) -> Self {
        Self {
            modulus: self.modulus.clone(),
            exponent: self.exponent.clone(),
            ..Self::default()
        }
    }

    /// The six CRT fields, in the order `d, dp, dq, inverse_q, p, q`.
    pub fn private_fields(&self) -> [Option<&[u8]>; 6] {
        [
            self.d.as_deref(),
            self.dp.as_deref(),
            self.dq.as_deref(),
            self.inverse_q.as_deref(),
            self.p.as_deref(),
            self.q.as_deref(),
        ]
    }

    /// Key size in bits as implied by the modulus byte length.
    pub fn modulus_bits(&self) -> usize {
        self.modulus.as_ref().map_or(0, |m| m.len() * 8)
    }
}

impl fmt::Debug for RsaKeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Private components are never printed, only whether they are set.
        let redact = |field: &Option<Vec<u8>>| match field {
            Some(_) => "[REDACTED]",
            None => "None",
        };
        f.debug_struct("RsaKeyMaterial")
            .field("modulus_bits", &self.modulus_bits())
            .field("exponent", &self.exponent)
            .field("d", &redact(&self.d))
            .field("dp", &redact(&self.dp))
            .field("dq", &redact(&self.dq))
            .field("inverse_q", &redact(&self.inverse_q))
            .field("p", &redact(&self.p))
            .field("q", &redact(&self.q))
            .finish()
    }
}

/// Which role a key record is expected to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyRole {
    Public,
    Private,
}

impl fmt::Display for KeyRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            KeyRole::Public => "public",
            KeyRole::Private => "private",
        })
    }
}

/// RSA encryption padding scheme.
///
/// Defaults to PKCS#1 v1.5.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RsaPadding {
    #[default]
    Pkcs1,
    Oaep,
}

impl RsaPadding {
    /// Map the boolean "use OAEP" flag onto a padding scheme.
    pub fn from_oaep_flag(use_oaep: bool) -> Self {
        if use_oaep {
            RsaPadding::Oaep
        } else {
            RsaPadding::Pkcs1
        }
    }

    pub fn is_oaep(self) -> bool {
        self == RsaPadding::Oaep
    }
}

impl fmt::Display for RsaPadding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RsaPadding::Pkcs1 => "PKCS#1 v1.5",
            RsaPadding::Oaep => "OAEP",
        })
    }
}
