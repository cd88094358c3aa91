//! RSA single-block encryption with key-role and block-size validation.
//!
//! Keys travel as [`RsaKeyMaterial`](common::RsaKeyMaterial) records of raw
//! big-endian components. No chunking of oversized messages is done here.

pub mod block;
pub mod cipher;
pub mod provider;
pub mod validator;

pub use block::{is_valid_encryption_block, max_encryptable_bytes};
pub use cipher::RsaCipher;
pub use provider::{generate_key_pair, RsaKeyPair, RsaProvider, SoftwareRsaProvider};
pub use validator::{is_valid_key, parse_public_key};
