//! Error types for license verification.

use thiserror::Error;

/// Result type for license operations.
pub type LicenseResult<T> = Result<T, LicenseError>;

/// Licensing-specific errors.
///
/// Only `InvalidLicenseKey` ever reaches callers of the verification API;
/// the remaining variants describe parse and decode failures that the
/// validator collapses into inactive records.
#[derive(Debug, Error)]
pub enum LicenseError {
    /// A correctly signed token carried an unusable dataset. The key is
    /// genuine but cannot be honored, so the operator must fix their
    /// configuration.
    #[error("invalid license key entered")]
    InvalidLicenseKey,

    /// Token is missing a delimiter or contains undecodable base64.
    #[error("malformed license token: {0}")]
    MalformedToken(String),

    /// Public verification key could not be decoded from hex or is not a
    /// valid Ed25519 key.
    #[error("invalid public verification key: {0}")]
    InvalidPublicKey(String),

    /// Ed25519 signature verification failed.
    #[error("license token signature invalid")]
    InvalidSignature,

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
