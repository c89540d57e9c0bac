//! License records produced by validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The validation path that produced a license record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LicenseOrigin {
    /// Self-serve license validated against the license server.
    SelfServe,
    /// Enterprise license validated against the license server.
    Enterprise,
    /// License validated offline via its embedded signature.
    AirGap,
}

/// The activation state of a verified license.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LicenseStatus {
    /// Signature verified and expiry is in the future.
    Active,
    /// Signature verified but the expiry has passed.
    Expired,
}

/// A license record: the output of a verification call.
///
/// A default record (no key, inactive, no status) means "no valid license".
/// Records are constructed fresh on every verification and never mutated
/// after being returned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct License {
    /// The raw license key, when one is configured.
    pub key: Option<String>,
    /// Whether the license currently grants access.
    pub active: bool,
    /// Expiry timestamp from the signed dataset.
    pub expiry: Option<DateTime<Utc>>,
    /// Validation path that produced this record.
    pub origin: Option<LicenseOrigin>,
    /// License tier from the signed dataset.
    #[serde(rename = "type")]
    pub license_type: Option<String>,
    /// Activation state; absent on default records.
    pub status: Option<LicenseStatus>,
}

impl License {
    /// Creates an unverified record holding only a raw key.
    #[must_use]
    pub fn with_key(key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            ..Self::default()
        }
    }

    /// Returns true if a non-empty key is present.
    #[must_use]
    pub fn has_key(&self) -> bool {
        self.key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }

    /// Returns true if the license currently grants access.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }
}
