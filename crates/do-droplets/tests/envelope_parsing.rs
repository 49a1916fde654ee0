//! Integration tests for parsing v1 API response data.
//!
//! These tests validate that the do-droplets models correctly deserialize
//! realistic legacy-API response bodies without altering their contents.

use do_droplets::{ApiStatus, Envelope};
use std::fs;
use std::path::PathBuf;

/// Get the path to the test fixtures directory.
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Load a fixture file from disk.
fn load_fixture(name: &str) -> String {
    let fixture_path = fixtures_dir().join(name);
    fs::read_to_string(&fixture_path).unwrap_or_else(|e| {
        panic!(
            "Failed to read fixture at {}: {}",
            fixture_path.display(),
            e
        )
    })
}

#[test]
fn test_deserialize_droplet_list_envelope() {
    let json_data = load_fixture("droplets_list.json");

    let envelope: Envelope = serde_json::from_str(&json_data).unwrap_or_else(|e| {
        panic!("Failed to deserialize droplet list: {e}\nJSON: {json_data}")
    });

    assert_eq!(envelope.status, ApiStatus::Ok);
    let droplets = envelope.droplets.expect("list envelope carries `droplets`");
    assert_eq!(droplets.len(), 2, "Expected 2 droplets in test data");

    // Provider order is preserved
    assert_eq!(droplets[0]["name"], "web-01");
    assert_eq!(droplets[1]["name"], "db-01");
}

#[test]
fn test_droplet_fields_pass_through_unchanged() {
    let json_data = load_fixture("droplets_list.json");
    let envelope: Envelope = serde_json::from_str(&json_data).unwrap();
    let droplets = envelope.droplets.unwrap();

    let web = &droplets[0];
    assert_eq!(web["id"], 100_823);
    assert_eq!(web["image_id"], 420);
    assert_eq!(web["size_id"], 33);
    assert_eq!(web["region_id"], 1);
    assert_eq!(web["backups_active"], false);
    assert_eq!(web["ip_address"], "198.51.100.4");
    assert!(web["private_ip_address"].is_null());
    assert_eq!(web["locked"], false);
    assert_eq!(web["status"], "active");
    assert_eq!(web["created_at"], "2013-01-01T09:30:00Z");

    let db = &droplets[1];
    assert_eq!(db["backups_active"], true);
    assert_eq!(db["private_ip_address"], "10.128.2.9");
    assert_eq!(db["status"], "off");
}

#[test]
fn test_deserialize_single_droplet_envelope() {
    let json_data = load_fixture("droplet_get.json");
    let envelope: Envelope = serde_json::from_str(&json_data).unwrap();

    assert_eq!(envelope.status, ApiStatus::Ok);
    assert!(envelope.droplets.is_none());

    let droplet = envelope.droplet.expect("get envelope carries `droplet`");
    assert_eq!(droplet["id"], 100_823);

    // Fields the models do not know about survive untouched.
    assert!(droplet["backups"].as_array().unwrap().is_empty());
    assert!(droplet["snapshots"].as_array().unwrap().is_empty());

    // The exact field set is preserved, nothing added or dropped.
    assert_eq!(droplet.len(), 13);
}

#[test]
fn test_deserialize_action_envelope() {
    let envelope: Envelope =
        serde_json::from_str(r#"{"status": "OK", "event_id": 7624991}"#).unwrap();

    assert_eq!(envelope.status, ApiStatus::Ok);
    assert!(envelope.droplets.is_none());
    assert!(envelope.droplet.is_none());
    assert!(envelope.ensure_ok().is_ok());
}

#[test]
fn test_deserialize_error_envelope() {
    let envelope: Envelope = serde_json::from_str(
        r#"{"status": "ERROR", "description": "Unable to verify credentials."}"#,
    )
    .unwrap();

    assert_eq!(envelope.status, ApiStatus::Error);
    let err = envelope.ensure_ok().unwrap_err();
    assert_eq!(err.error_code(), "API_ERROR");
    assert_eq!(
        err.to_string(),
        "the API returned status ERROR: Unable to verify credentials."
    );
}
