//! Configuration loading and validation for host processes.
//!
//! Values are read from `CIPHER_GUARD_*` environment variables. Nothing here is
//! needed to call the guard functions directly; it only records which
//! algorithms a deployment has already chosen.

use anyhow::{Context, Result};
use common::RsaPadding;
use serde::Deserialize;

use crate::hash::{DigestAlgorithmId, Hasher};
use crate::rsa::RsaCipher;
use crate::symmetric::{SymmetricAlgorithmId, SymmetricCipher};
use crate::telemetry::{self, LogFormat};

const ENV_PREFIX: &str = "CIPHER_GUARD";

/// Validated guard configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct GuardConfig {
    /// RSA padding scheme: `pkcs1` or `oaep`.
    #[serde(default)]
    pub rsa_padding: RsaPadding,

    /// Block cipher: `des`, `tripledes` or `aes`. No default.
    #[serde(default)]
    pub symmetric_algorithm: Option<SymmetricAlgorithmId>,

    /// Digest: `sha1`, `sha256`, `sha384`, `sha512` or `ripemd160`. No default.
    #[serde(default)]
    pub digest_algorithm: Option<DigestAlgorithmId>,

    /// Tracing log level (e.g. `"info"`, `"debug"`).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log output: `json` (default) or `pretty`.
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_log_level() -> String {
    "info".into()
}

impl GuardConfig {
    /// Load and validate configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable cannot be parsed or fails validation.
    pub fn from_env() -> Result<Self> {
        Self::load(config::Environment::with_prefix(ENV_PREFIX))
    }

    fn load(source: config::Environment) -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(source)
            .build()
            .context("failed to build configuration from environment")?;

        let c: GuardConfig = cfg
            .try_deserialize()
            .context("failed to deserialise configuration")?;

        c.validate()?;
        Ok(c)
    }

    fn validate(&self) -> Result<()> {
        if self.log_level.trim().is_empty() {
            anyhow::bail!("{ENV_PREFIX}_LOG_LEVEL must not be empty");
        }
        Ok(())
    }

    /// RSA cipher over the default provider, paired with the configured padding
    /// to pass on each call.
    pub fn rsa_cipher(&self) -> (RsaCipher, RsaPadding) {
        (RsaCipher::new(), self.rsa_padding)
    }

    /// Install the global subscriber at the configured level and format.
    ///
    /// # Errors
    ///
    /// Returns an error if a subscriber is already installed.
    pub fn init_telemetry(&self) -> Result<()> {
        telemetry::init(&self.log_level, self.log_format)
    }

    /// # Errors
    ///
    /// Returns an error if no symmetric algorithm is configured.
    pub fn symmetric_cipher(&self) -> Result<SymmetricCipher> {
        let id = self
            .symmetric_algorithm
            .with_context(|| format!("{ENV_PREFIX}_SYMMETRIC_ALGORITHM is not set"))?;
        Ok(SymmetricCipher::new(id))
    }

    /// # Errors
    ///
    /// Returns an error if no digest algorithm is configured.
    pub fn hasher(&self) -> Result<Hasher> {
        let id = self
            .digest_algorithm
            .with_context(|| format!("{ENV_PREFIX}_DIGEST_ALGORITHM is not set"))?;
        Ok(Hasher::new(id))
    }
}
