use std::env::{self, VarError};
use std::time::Duration;

use ed25519_dalek::{PUBLIC_KEY_LENGTH, VerifyingKey};
use once_cell::sync::Lazy;

use crate::errors::ConfigError;

/// Public key of the Discord application this handler answers for.
pub const DEFAULT_PUBLIC_KEY: &str =
    "d3b2bd5264e41f88e6853e90d98e506680fd85ef6e4f4f4b800060aa03d1bc51";

static DEFAULT_VERIFYING_KEY: Lazy<VerifyingKey> = Lazy::new(|| {
    parse_public_key(DEFAULT_PUBLIC_KEY).expect("baked-in public key is a valid Ed25519 point")
});

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub public_key: VerifyingKey,
    /// Reject signed requests whose timestamp is older than this. `None`
    /// accepts any timestamp that verifies.
    pub max_timestamp_age: Option<Duration>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            public_key: *DEFAULT_VERIFYING_KEY,
            max_timestamp_age: None,
        }
    }
}

impl AppConfig {
    /// # Errors
    ///
    /// Returns an error if `DISCORD_PUBLIC_KEY` or `SIGNATURE_MAX_AGE_SECS` is
    /// set but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let public_key = public_key_from_var(env::var("DISCORD_PUBLIC_KEY"))?;

        let max_timestamp_age = match env::var("SIGNATURE_MAX_AGE_SECS") {
            Ok(secs) => Some(Duration::from_secs(secs.trim().parse::<u64>()?)),
            Err(VarError::NotPresent) => None,
            Err(VarError::NotUnicode(_)) => {
                return Err(ConfigError::NotUnicode("SIGNATURE_MAX_AGE_SECS"));
            }
        };

        Ok(Self {
            public_key,
            max_timestamp_age,
        })
    }

    /// # Errors
    ///
    /// Returns an error if `hex_key` is not a hex-encoded Ed25519 public key.
    pub fn from_public_key_hex(hex_key: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            public_key: parse_public_key(hex_key)?,
            max_timestamp_age: None,
        })
    }

    #[must_use]
    pub fn with_max_timestamp_age(mut self, age: Duration) -> Self {
        self.max_timestamp_age = Some(age);
        self
    }
}

fn public_key_from_var(var: Result<String, VarError>) -> Result<VerifyingKey, ConfigError> {
    match var {
        Ok(hex_key) => parse_public_key(hex_key.trim()),
        Err(VarError::NotPresent) => Ok(*DEFAULT_VERIFYING_KEY),
        Err(VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode("DISCORD_PUBLIC_KEY")),
    }
}

fn parse_public_key(hex_key: &str) -> Result<VerifyingKey, ConfigError> {
    let bytes = hex::decode(hex_key)?;
    let bytes: [u8; PUBLIC_KEY_LENGTH] = bytes
        .as_slice()
        .try_into()
        .map_err(|_| ConfigError::PublicKeyLength(bytes.len()))?;
    Ok(VerifyingKey::from_bytes(&bytes)?)
}
