//! Offline (air-gap) license verification for AppForge.
//!
//! This crate handles:
//! - Signed license token parsing (`key/<dataset>.<signature>` format)
//! - Ed25519 signature verification over the literal signing data
//! - License status derivation from the embedded expiry
//!
//! # Design Principles
//!
//! - **Fail closed**: absence of proof of validity never yields an active
//!   license
//! - **Offline-first**: verification never touches the network; the public
//!   verification key is static configuration loaded at process start
//! - **Stateless**: every call builds a fresh record from its inputs and the
//!   clock; safe for unbounded concurrent use
//!
//! # License Token Format
//!
//! Tokens are formatted as: `key/base64url(dataset).base64url(signature)`
//! The dataset is a JSON object containing the license expiry and tier. The
//! Ed25519 signature covers the literal text before the first `.`, so
//! verification operates on the encoded dataset exactly as received.

mod config;
mod dataset;
mod error;
mod record;
mod token;
mod validator;

pub use config::{LicenseConfig, LICENSE_KEY_ENV, PUBLIC_KEY_ENV};
pub use dataset::OfflineLicenseDataset;
pub use error::{LicenseError, LicenseResult};
pub use record::{License, LicenseOrigin, LicenseStatus};
pub use token::{SignedLicenseToken, SIGNING_PREFIX};
pub use validator::{
    verified_license, LicenseValidator, OfflineLicenseValidator, Verification,
};
