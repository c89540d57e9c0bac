//! License verification policy.
//!
//! [`Verification`] enumerates the terminal states of a verification call;
//! [`verified_license`] collapses them into a [`License`] record, failing
//! closed. The one condition that propagates as an error is a token whose
//! signature verifies but whose dataset is unusable: the key is genuine, so
//! the operator must be told their configuration is broken. Anything
//! unsigned or unparseable is just "no valid license".

use crate::config::LicenseConfig;
use crate::dataset::OfflineLicenseDataset;
use crate::error::{LicenseError, LicenseResult};
use crate::record::{License, LicenseOrigin, LicenseStatus};
use crate::token::SignedLicenseToken;
use chrono::Utc;
use tracing::{debug, error, info};

/// The outcome of evaluating a license token.
///
/// Every verification call lands in exactly one of these states; there is
/// no retryable or intermediate state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verification {
    /// No key was present; verification was skipped.
    NoLicense,
    /// The token or public key could not be processed.
    Malformed(String),
    /// The Ed25519 signature did not match the signing data.
    SignatureInvalid,
    /// The signature matched but the embedded dataset is unusable.
    InvalidDataset(String),
    /// The signature matched and the dataset decoded cleanly.
    Verified(OfflineLicenseDataset),
}

impl Verification {
    /// Evaluates a raw license key against a hex-encoded Ed25519 public key.
    ///
    /// The outcome depends only on the inputs; the expiry comparison happens
    /// later, when a record is built from a `Verified` outcome.
    #[must_use]
    pub fn evaluate(license_key: &str, public_key_hex: &str) -> Self {
        let license_key = license_key.trim();
        if license_key.is_empty() {
            return Self::NoLicense;
        }

        let token = match SignedLicenseToken::parse(license_key) {
            Ok(token) => token,
            Err(e) => {
                debug!(reason = %e, "failed to process offline license token");
                return Self::Malformed(e.to_string());
            }
        };

        if !token.has_supported_prefix() {
            error!(
                prefix = token.prefix(),
                "unsupported signing prefix for offline license key check"
            );
            return Self::Malformed(format!("unsupported signing prefix: {}", token.prefix()));
        }

        match token.verify(public_key_hex) {
            Ok(()) => {}
            Err(LicenseError::InvalidSignature) => {
                debug!("license key is invalid");
                return Self::SignatureInvalid;
            }
            Err(e) => {
                debug!(reason = %e, "failed to process offline license token");
                return Self::Malformed(e.to_string());
            }
        }

        match token.decode_dataset() {
            Ok(dataset) if dataset.is_valid() => {
                info!("provided license key is valid");
                Self::Verified(dataset)
            }
            Ok(_) => Self::InvalidDataset("dataset is missing an expiry".to_string()),
            Err(e) => Self::InvalidDataset(e.to_string()),
        }
    }
}

/// Verifies a license record against a public key and derives its
/// activation state.
///
/// Returns a default record when no key is present or the token cannot be
/// processed, and an inactive record retaining the key when the signature
/// fails. On a verified dataset the record carries the expiry, tier, air-gap
/// origin, and an `Active`/`Expired` status from comparing the expiry to the
/// current time.
///
/// # Errors
///
/// Returns `InvalidLicenseKey` when the signature verifies but the dataset
/// is unusable.
pub fn verified_license(license: &License, public_key_hex: &str) -> LicenseResult<License> {
    let Some(license_key) = license.key.as_deref() else {
        return Ok(License::default());
    };
    let license_key = license_key.trim();

    match Verification::evaluate(license_key, public_key_hex) {
        Verification::NoLicense | Verification::Malformed(_) => Ok(License::default()),
        Verification::SignatureInvalid => Ok(License {
            key: Some(license_key.to_string()),
            active: false,
            ..License::default()
        }),
        Verification::InvalidDataset(_) => Err(LicenseError::InvalidLicenseKey),
        Verification::Verified(dataset) => {
            let expiry = dataset.expiry;
            let active = expiry.is_some_and(|exp| Utc::now() < exp);
            let status = if active {
                LicenseStatus::Active
            } else {
                LicenseStatus::Expired
            };

            Ok(License {
                key: Some(license_key.to_string()),
                active,
                expiry,
                origin: Some(LicenseOrigin::AirGap),
                license_type: dataset.license_type,
                status: Some(status),
            })
        }
    }
}

/// Capability interface for license validation strategies.
///
/// The offline validator is the air-gap implementation; a client for an
/// online license server would be another.
pub trait LicenseValidator {
    /// Checks a tenant's license record and returns its verified state.
    ///
    /// # Errors
    ///
    /// Returns `InvalidLicenseKey` when a correctly signed token carries an
    /// unusable dataset.
    fn check_license(&self, license: &License) -> LicenseResult<License>;
}

/// Validates licenses entirely offline via their embedded Ed25519 signature.
#[derive(Debug, Clone)]
pub struct OfflineLicenseValidator {
    config: LicenseConfig,
}

impl OfflineLicenseValidator {
    /// Creates a validator using the given configuration.
    #[must_use]
    pub fn new(config: LicenseConfig) -> Self {
        Self { config }
    }

    /// Checks the license key from configuration, if one is present.
    ///
    /// # Errors
    ///
    /// Returns `InvalidLicenseKey` when a correctly signed token carries an
    /// unusable dataset.
    pub fn check_configured(&self) -> LicenseResult<License> {
        let license = match self.config.license_key() {
            Some(key) => License::with_key(key),
            None => License::default(),
        };
        self.check_license(&license)
    }
}

impl LicenseValidator for OfflineLicenseValidator {
    fn check_license(&self, license: &License) -> LicenseResult<License> {
        debug!("initiating license check");

        if !license.has_key() {
            debug!("license key not found");
            return Ok(License::default());
        }

        verified_license(license, self.config.public_verification_key())
    }
}
