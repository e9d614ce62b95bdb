//! Unit tests for the Supabase profile repository

use chrono::{TimeZone, Utc};
use pv_shared::{ProfileStoreConfig, StoreBackend};
use serde_json::json;

use crate::supabase::{ProfileRow, SupabaseProfileRepository};
use crate::InfrastructureError;

fn config(url: Option<&str>, key: Option<&str>) -> ProfileStoreConfig {
    ProfileStoreConfig {
        backend: StoreBackend::Supabase,
        supabase_url: url.map(String::from),
        service_role_key: key.map(String::from),
        ..Default::default()
    }
}

fn row(email: &str) -> ProfileRow {
    serde_json::from_value(json!({
        "id": "6f1c2f8e-8a3b-4c55-9a0e-3d2f4b1a7c90",
        "email": email,
        "email_verified": false,
        "email_verification_code": null,
        "code_expires_at": null
    }))
    .unwrap()
}

#[test]
fn test_requires_credentials() {
    for (url, key) in [
        (None, Some("key")),
        (Some("https://x.supabase.co"), None),
        (Some("  "), Some("key")),
    ] {
        let result = SupabaseProfileRepository::new(&config(url, key));
        assert!(matches!(result, Err(InfrastructureError::Config(_))));
    }
}

#[test]
fn test_resource_url() {
    let repo =
        SupabaseProfileRepository::new(&config(Some("https://abc.supabase.co/"), Some("key")))
            .unwrap();
    assert_eq!(repo.resource_url(), "https://abc.supabase.co/rest/v1/profiles");
}

#[test]
fn test_row_deserialization() {
    let row: ProfileRow = serde_json::from_value(json!({
        "id": "6f1c2f8e-8a3b-4c55-9a0e-3d2f4b1a7c90",
        "email": "user@example.com",
        "email_verified": null,
        "email_verification_code": "482913",
        "code_expires_at": "2024-03-01T10:15:00+00:00"
    }))
    .unwrap();

    let profile: pv_core::Profile = row.into();
    assert!(!profile.email_verified);
    let pending = profile.pending_code().unwrap();
    assert_eq!(pending.code, "482913");
    assert_eq!(
        pending.expires_at,
        Utc.with_ymd_and_hms(2024, 3, 1, 10, 15, 0).unwrap()
    );
}

#[test]
fn test_single_profile() {
    assert!(SupabaseProfileRepository::single_profile(vec![])
        .unwrap()
        .is_none());

    let found = SupabaseProfileRepository::single_profile(vec![row("a@b.com")]).unwrap();
    assert_eq!(found.map(|p| p.email), Some("a@b.com".to_string()));

    let duplicate =
        SupabaseProfileRepository::single_profile(vec![row("a@b.com"), row("a@b.com")]);
    assert!(matches!(duplicate, Err(InfrastructureError::ProfileStore(_))));
}
