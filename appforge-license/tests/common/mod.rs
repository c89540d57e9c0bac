//! Shared test helpers for license tests.

#![allow(dead_code)]

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use ed25519_dalek::{Signer, SigningKey};

/// Returns a deterministic Ed25519 keypair: the signing key plus the
/// hex-encoded public key as it would appear in configuration.
pub fn test_keypair() -> (SigningKey, String) {
    keypair_from_seed(&[
        1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24,
        25, 26, 27, 28, 29, 30, 31, 32,
    ])
}

/// A second deterministic keypair, for wrong-key tests.
pub fn other_keypair() -> (SigningKey, String) {
    keypair_from_seed(&[42u8; 32])
}

/// Derives a keypair from a fixed seed.
pub fn keypair_from_seed(seed: &[u8; 32]) -> (SigningKey, String) {
    let signing_key = SigningKey::from_bytes(seed);
    let public_key_hex = hex::encode(signing_key.verifying_key().to_bytes());
    (signing_key, public_key_hex)
}

/// Signs dataset JSON into a full offline token:
/// `key/base64url(dataset).base64url(signature)`.
pub fn sign_token(signing_key: &SigningKey, dataset_json: &str) -> String {
    sign_token_with_prefix(signing_key, "key", dataset_json)
}

/// Signs dataset JSON under an arbitrary prefix. The signature covers the
/// literal `<prefix>/<base64url(dataset)>` string.
pub fn sign_token_with_prefix(
    signing_key: &SigningKey,
    prefix: &str,
    dataset_json: &str,
) -> String {
    let dataset_b64 = URL_SAFE_NO_PAD.encode(dataset_json.as_bytes());
    let signing_data = format!("{prefix}/{dataset_b64}");
    let signature = signing_key.sign(signing_data.as_bytes());
    let sig_b64 = URL_SAFE_NO_PAD.encode(signature.to_bytes());
    format!("{signing_data}.{sig_b64}")
}

/// Builds a token whose dataset expires at the given RFC 3339 timestamp.
pub fn make_token_expiring_at(signing_key: &SigningKey, expiry: &str, tier: &str) -> String {
    let dataset = format!(r#"{{"expiry":"{expiry}","type":"{tier}"}}"#);
    sign_token(signing_key, &dataset)
}
