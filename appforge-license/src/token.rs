//! Signed license token parsing and Ed25519 verification.
//!
//! Offline license tokens use the format:
//! `key/<base64url(dataset_json)>.<base64url(signature)>`
//!
//! The signature covers the UTF-8 bytes of everything before the first `.`
//! (the literal `key/<base64url(dataset_json)>` string, not the decoded
//! dataset), so verification must operate on the encoded text exactly as
//! received. Decoding happens only after the signature checks out.

use crate::dataset::OfflineLicenseDataset;
use crate::error::{LicenseError, LicenseResult};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use ed25519_dalek::{Signature, Verifier, VerifyingKey, PUBLIC_KEY_LENGTH};

/// Fixed signing prefix identifying the offline token scheme.
pub const SIGNING_PREFIX: &str = "key";

/// A license token split into its signed components.
///
/// Both delimiters use first-occurrence semantics: the signed message is
/// everything before the first `.`, and the prefix is everything before the
/// first `/` within it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedLicenseToken<'a> {
    signing_data: &'a str,
    prefix: &'a str,
    encoded_dataset: &'a str,
    encoded_signature: &'a str,
}

impl<'a> SignedLicenseToken<'a> {
    /// Splits a raw token into signing data, prefix, dataset, and signature.
    ///
    /// # Errors
    ///
    /// Returns `MalformedToken` if either delimiter is missing.
    pub fn parse(raw: &'a str) -> LicenseResult<Self> {
        let (signing_data, encoded_signature) = raw.split_once('.').ok_or_else(|| {
            LicenseError::MalformedToken("missing signature delimiter".to_string())
        })?;

        let (prefix, encoded_dataset) = signing_data.split_once('/').ok_or_else(|| {
            LicenseError::MalformedToken("missing signing prefix delimiter".to_string())
        })?;

        Ok(Self {
            signing_data,
            prefix,
            encoded_dataset,
            encoded_signature,
        })
    }

    /// Returns the literal signing data (the signed message text).
    #[must_use]
    pub fn signing_data(&self) -> &str {
        self.signing_data
    }

    /// Returns the signing prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        self.prefix
    }

    /// Returns the base64url-encoded dataset.
    #[must_use]
    pub fn encoded_dataset(&self) -> &str {
        self.encoded_dataset
    }

    /// Returns the base64url-encoded signature.
    #[must_use]
    pub fn encoded_signature(&self) -> &str {
        self.encoded_signature
    }

    /// Returns true if the token uses the supported signing scheme.
    #[must_use]
    pub fn has_supported_prefix(&self) -> bool {
        self.prefix == SIGNING_PREFIX
    }

    /// Verifies the Ed25519 signature over the literal signing data.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSignature` if the signature does not match, and
    /// `MalformedToken`/`InvalidPublicKey` if the signature or key cannot
    /// be decoded at all.
    pub fn verify(&self, public_key_hex: &str) -> LicenseResult<()> {
        let verifying_key = decode_verifying_key(public_key_hex)?;

        let sig_bytes = URL_SAFE_NO_PAD.decode(self.encoded_signature).map_err(|e| {
            LicenseError::MalformedToken(format!("invalid signature base64: {e}"))
        })?;

        let signature = Signature::from_slice(&sig_bytes).map_err(|_| {
            LicenseError::MalformedToken("invalid signature length".to_string())
        })?;

        verifying_key
            .verify(self.signing_data.as_bytes(), &signature)
            .map_err(|_| LicenseError::InvalidSignature)
    }

    /// Decodes and deserializes the embedded dataset.
    ///
    /// Only meaningful after [`verify`](Self::verify) has succeeded; the
    /// dataset is covered by the signature in its encoded form.
    ///
    /// # Errors
    ///
    /// Returns `MalformedToken` on undecodable base64 and a serialization
    /// error on malformed JSON.
    pub fn decode_dataset(&self) -> LicenseResult<OfflineLicenseDataset> {
        let bytes = URL_SAFE_NO_PAD.decode(self.encoded_dataset).map_err(|e| {
            LicenseError::MalformedToken(format!("invalid dataset base64: {e}"))
        })?;

        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Decodes a hex-encoded Ed25519 public key, using the first 32 bytes.
fn decode_verifying_key(public_key_hex: &str) -> LicenseResult<VerifyingKey> {
    let bytes = hex::decode(public_key_hex)
        .map_err(|e| LicenseError::InvalidPublicKey(format!("invalid hex: {e}")))?;

    if bytes.len() < PUBLIC_KEY_LENGTH {
        return Err(LicenseError::InvalidPublicKey(format!(
            "expected {PUBLIC_KEY_LENGTH} bytes, got {}",
            bytes.len()
        )));
    }

    let mut key = [0u8; PUBLIC_KEY_LENGTH];
    key.copy_from_slice(&bytes[..PUBLIC_KEY_LENGTH]);

    VerifyingKey::from_bytes(&key)
        .map_err(|_| LicenseError::InvalidPublicKey("not a valid Ed25519 key".to_string()))
}
