use std::collections::HashMap;

use dispo::AuthError;
use dispo::api::signature::{
    SIGNATURE_HEADER, TIMESTAMP_HEADER, compute_signature, verify_discord_signature,
    verify_request,
};
use dispo::core::config::AppConfig;
use ed25519_dalek::SigningKey;

fn key() -> SigningKey {
    SigningKey::from_bytes(&[42u8; 32])
}

fn config() -> AppConfig {
    AppConfig {
        public_key: key().verifying_key(),
        max_timestamp_age: None,
    }
}

#[test]
fn verifies_timestamp_prefixed_body() {
    let signature = compute_signature(&key(), "123", b"{}");
    assert_eq!(signature.len(), 128);
    assert!(verify_discord_signature(&key().verifying_key(), &signature, "123", b"{}"));
    // The split between timestamp and body is not part of the message
    assert!(verify_discord_signature(&key().verifying_key(), &signature, "12", b"3{}"));
    assert!(!verify_discord_signature(&key().verifying_key(), &signature, "124", b"{}"));
}

#[test]
fn short_or_non_hex_signatures_fail() {
    let public = key().verifying_key();
    assert!(!verify_discord_signature(&public, "", "123", b"{}"));
    assert!(!verify_discord_signature(&public, "abcd", "123", b"{}"));
    assert!(!verify_discord_signature(&public, &"zz".repeat(64), "123", b"{}"));
}

#[test]
fn missing_headers_short_circuit() {
    let headers = HashMap::from([(TIMESTAMP_HEADER.to_string(), "123".to_string())]);
    assert_eq!(
        verify_request(&headers, b"{}", &config()),
        Err(AuthError::MissingCredentials)
    );
}

#[test]
fn valid_request_passes() {
    let headers = HashMap::from([
        (SIGNATURE_HEADER.to_string(), compute_signature(&key(), "123", b"{}")),
        (TIMESTAMP_HEADER.to_string(), "123".to_string()),
    ]);
    assert_eq!(verify_request(&headers, b"{}", &config()), Ok(()));
    assert_eq!(
        verify_request(&headers, b"{ }", &config()),
        Err(AuthError::InvalidSignature)
    );
}

#[test]
fn baked_in_key_rejects_foreign_signatures() {
    let headers = HashMap::from([
        (SIGNATURE_HEADER.to_string(), compute_signature(&key(), "123", b"{}")),
        (TIMESTAMP_HEADER.to_string(), "123".to_string()),
    ]);
    assert_eq!(
        verify_request(&headers, b"{}", &AppConfig::default()),
        Err(AuthError::InvalidSignature)
    );
}

#[test]
fn empty_headers_count_as_missing() {
    let signature = compute_signature(&key(), "123", b"{}");
    for (sig, ts) in [("", ""), ("", "123"), (signature.as_str(), "")] {
        let headers = HashMap::from([
            (SIGNATURE_HEADER.to_string(), sig.to_string()),
            (TIMESTAMP_HEADER.to_string(), ts.to_string()),
        ]);
        assert_eq!(
            verify_request(&headers, br#"{"type":1}"#, &config()),
            Err(AuthError::MissingCredentials)
        );
    }
}
