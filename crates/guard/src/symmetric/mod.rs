//! Block cipher validation over DES, Triple DES and AES in CBC mode.
//!
//! [`SymmetricCipher`] checks the data, key and IV before handing them to a
//! [`SymmetricAlgorithm`]. Output is PKCS#7 padded to the block size.

pub mod algorithm;
pub mod cipher;
pub mod sizes;

pub use algorithm::{legal_key_sizes_of, SymmetricAlgorithm, SymmetricAlgorithmId};
pub use cipher::SymmetricCipher;
pub use sizes::{legal_key_sizes, KeySizeDescriptor};
