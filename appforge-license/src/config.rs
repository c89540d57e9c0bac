//! Process configuration for license verification.

use std::env;

/// Environment variable holding the hex-encoded public verification key.
pub const PUBLIC_KEY_ENV: &str = "APPFORGE_LICENSE_PUBLIC_KEY";

/// Environment variable holding the raw offline license key.
pub const LICENSE_KEY_ENV: &str = "APPFORGE_LICENSE_KEY";

/// Static license configuration, loaded once at process start and treated
/// as read-only for the process lifetime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LicenseConfig {
    public_verification_key: String,
    license_key: Option<String>,
}

impl LicenseConfig {
    /// Creates a configuration with the given hex-encoded public key.
    #[must_use]
    pub fn new(public_verification_key: impl Into<String>) -> Self {
        Self {
            public_verification_key: public_verification_key.into(),
            license_key: None,
        }
    }

    /// Sets the raw offline license key.
    #[must_use]
    pub fn with_license_key(mut self, license_key: impl Into<String>) -> Self {
        self.license_key = Some(license_key.into());
        self
    }

    /// Loads configuration from the process environment.
    ///
    /// Missing variables yield an empty public key and no license key, which
    /// verification treats as "no license configured".
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            public_verification_key: env::var(PUBLIC_KEY_ENV).unwrap_or_default(),
            license_key: env::var(LICENSE_KEY_ENV).ok(),
        }
    }

    /// Returns the hex-encoded public verification key.
    #[must_use]
    pub fn public_verification_key(&self) -> &str {
        &self.public_verification_key
    }

    /// Returns the configured raw license key, if any.
    #[must_use]
    pub fn license_key(&self) -> Option<&str> {
        self.license_key.as_deref()
    }
}
