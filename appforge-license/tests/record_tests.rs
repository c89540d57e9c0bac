use chrono::{DateTime, Utc};
use pretty_assertions::assert_eq;
use appforge_license::{License, LicenseOrigin, LicenseStatus};

// ── Defaults ─────────────────────────────────────────────────────

#[test]
fn default_record_is_empty_and_inactive() {
    let record = License::default();
    assert!(record.key.is_none());
    assert!(!record.is_active());
    assert!(record.expiry.is_none());
    assert!(record.origin.is_none());
    assert!(record.license_type.is_none());
    assert!(record.status.is_none());
}

#[test]
fn with_key_holds_raw_key_only() {
    let record = License::with_key("key/abc.def");
    assert_eq!(record.key.as_deref(), Some("key/abc.def"));
    assert!(record.has_key());
    assert!(!record.is_active());
    assert!(record.status.is_none());
}

#[test]
fn empty_or_blank_key_does_not_count() {
    assert!(!License::default().has_key());
    assert!(!License::with_key("").has_key());
    assert!(!License::with_key("   ").has_key());
}

// ── Serde ────────────────────────────────────────────────────────

#[test]
fn license_type_serializes_as_type() {
    let record = License {
        license_type: Some("enterprise".to_string()),
        ..License::default()
    };
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["type"], "enterprise");
}

#[test]
fn enums_use_screaming_snake_case() {
    assert_eq!(
        serde_json::to_value(LicenseOrigin::AirGap).unwrap(),
        "AIR_GAP"
    );
    assert_eq!(
        serde_json::to_value(LicenseOrigin::SelfServe).unwrap(),
        "SELF_SERVE"
    );
    assert_eq!(
        serde_json::to_value(LicenseStatus::Active).unwrap(),
        "ACTIVE"
    );
    assert_eq!(
        serde_json::to_value(LicenseStatus::Expired).unwrap(),
        "EXPIRED"
    );
}

#[test]
fn record_roundtrips_through_json() {
    let expiry: DateTime<Utc> = "2099-01-01T00:00:00Z".parse().unwrap();
    let record = License {
        key: Some("key/abc.def".to_string()),
        active: true,
        expiry: Some(expiry),
        origin: Some(LicenseOrigin::AirGap),
        license_type: Some("enterprise".to_string()),
        status: Some(LicenseStatus::Active),
    };

    let json = serde_json::to_string(&record).unwrap();
    let restored: License = serde_json::from_str(&json).unwrap();
    assert_eq!(record, restored);
}

#[test]
fn record_deserializes_from_partial_json() {
    let restored: License = serde_json::from_str("{}").unwrap();
    assert_eq!(restored, License::default());

    let restored: License = serde_json::from_str(r#"{"key":"key/a.b"}"#).unwrap();
    assert_eq!(restored.key.as_deref(), Some("key/a.b"));
    assert!(!restored.active);
}
