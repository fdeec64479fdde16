use std::collections::HashMap;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};
use tracing::{info, warn};

use crate::core::config::AppConfig;
use crate::errors::AuthError;

pub const SIGNATURE_HEADER: &str = "x-signature-ed25519";
pub const TIMESTAMP_HEADER: &str = "x-signature-timestamp";

/// How far in the future a timestamp may be before the replay window rejects it.
const MAX_CLOCK_SKEW: Duration = Duration::from_secs(60);

/// Authenticate a request from its lower-cased headers and exact raw body.
///
/// Missing or empty headers short-circuit before any cryptographic work.
///
/// # Errors
///
/// `MissingCredentials` when either signature header is absent or empty,
/// `InvalidSignature` when the signature does not verify or the timestamp is
/// outside the configured replay window.
pub fn verify_request(
    headers: &HashMap<String, String>,
    raw_body: &[u8],
    config: &AppConfig,
) -> Result<(), AuthError> {
    let present = |name: &str| headers.get(name).filter(|value| !value.is_empty());
    let (Some(signature), Some(timestamp)) = (present(SIGNATURE_HEADER), present(TIMESTAMP_HEADER))
    else {
        info!("Request missing signature headers");
        return Err(AuthError::MissingCredentials);
    };

    if !verify_discord_signature(&config.public_key, signature, timestamp, raw_body) {
        warn!("Ed25519 signature verification failed");
        return Err(AuthError::InvalidSignature);
    }

    if let Some(max_age) = config.max_timestamp_age {
        if !timestamp_is_fresh(timestamp, max_age, SystemTime::now()) {
            warn!(timestamp = %timestamp, "Timestamp out of range, potential replay attack");
            return Err(AuthError::InvalidSignature);
        }
    }

    Ok(())
}

/// Verify `signature_hex` over `timestamp || body`.
///
/// The message is built from the raw bytes as received; a re-serialized body
/// would not match.
#[must_use]
pub fn verify_discord_signature(
    public_key: &VerifyingKey,
    signature_hex: &str,
    timestamp: &str,
    body: &[u8],
) -> bool {
    let Ok(signature_bytes) = hex::decode(signature_hex) else {
        return false;
    };
    let Ok(signature) = Signature::from_slice(&signature_bytes) else {
        return false;
    };

    let mut message = Vec::with_capacity(timestamp.len() + body.len());
    message.extend_from_slice(timestamp.as_bytes());
    message.extend_from_slice(body);

    public_key.verify(&message, &signature).is_ok()
}

/// Hex signature Discord would send for `timestamp || body`.
pub fn compute_signature(signing_key: &SigningKey, timestamp: &str, body: &[u8]) -> String {
    let mut message = Vec::with_capacity(timestamp.len() + body.len());
    message.extend_from_slice(timestamp.as_bytes());
    message.extend_from_slice(body);
    hex::encode(signing_key.sign(&message).to_bytes())
}

fn timestamp_is_fresh(timestamp: &str, max_age: Duration, now: SystemTime) -> bool {
    let (Ok(ts), Ok(now)) = (timestamp.parse::<u64>(), now.duration_since(UNIX_EPOCH)) else {
        return false;
    };
    let now_secs = now.as_secs();
    now_secs.saturating_sub(ts) <= max_age.as_secs() && ts <= now_secs + MAX_CLOCK_SKEW.as_secs()
}
