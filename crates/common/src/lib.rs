//! Key material, encodings, and errors shared across `cipher-guard` crates.

pub mod encoding;
pub mod error;
pub mod interchange;
pub mod key;

pub use error::{ErrorKind, GuardError};
pub use key::{KeyRole, RsaKeyMaterial, RsaPadding};
