//! The signed payload embedded in an offline license token.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The dataset carried inside a signed offline license token.
///
/// Decoded only after the token signature has been verified. Issuers may
/// include fields beyond the ones modeled here; they are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfflineLicenseDataset {
    /// License expiry. A dataset without an expiry is unusable.
    #[serde(default)]
    pub expiry: Option<DateTime<Utc>>,
    /// License tier, e.g. `"enterprise"`.
    #[serde(rename = "type", default)]
    pub license_type: Option<String>,
}

impl OfflineLicenseDataset {
    /// Returns true if the dataset carries the fields verification needs.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.expiry.is_some()
    }
}
