//! Integration tests for the retrieval pipeline: classification priority,
//! loader dispatch, and error kinds.

use std::fs;

use schemacheck::bundle::{ResourceBundle, embedded};
use schemacheck::{RetrievalError, resolve, resolve_bundled};
use serde_json::json;
use tempfile::TempDir;

/// Bundle that panics on any lookup. Proves a code path never consulted it.
struct UntouchableBundle;

impl ResourceBundle for UntouchableBundle {
    fn get(&self, resource_id: &str) -> Option<&[u8]> {
        panic!("bundle consulted for {resource_id}");
    }
}

#[test]
fn test_inline_json_never_touches_the_bundle() {
    // Valid JSON short-circuits classification before the bundle probe.
    let value = resolve(r#"{"PolicyName": "Inline"}"#, &UntouchableBundle).unwrap();
    assert_eq!(value, json!({"PolicyName": "Inline"}));
}

#[test]
fn test_inline_json_round_trips_unchanged() {
    let value = resolve(r#"[1, "two", {"three": 3}]"#, embedded()).unwrap();
    assert_eq!(value, json!([1, "two", {"three": 3}]));
}

#[test]
fn test_file_input_resolves_from_disk() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("policy.json");
    fs::write(&path, r#"{"from": "disk"}"#).unwrap();

    let value = resolve(path.to_str().unwrap(), embedded()).unwrap();
    assert_eq!(value["from"], "disk");
}

#[test]
fn test_missing_absolute_path_is_not_found_not_unrecognized() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("absent.json");

    let err = resolve(path.to_str().unwrap(), embedded()).unwrap_err();
    assert!(matches!(err, RetrievalError::NotFound { .. }), "got: {err}");
}

#[test]
fn test_file_with_malformed_content_is_parse_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("broken.json");
    fs::write(&path, "{oops").unwrap();

    let err = resolve(path.to_str().unwrap(), embedded()).unwrap_err();
    assert!(matches!(err, RetrievalError::Parse { .. }), "got: {err}");
}

#[test]
fn test_bundled_resource_resolves() {
    let value = resolve("policies/valid_policy.json", embedded()).unwrap();
    assert_eq!(value["PolicyName"], "AllowExampleBucketObjects");
}

#[test]
fn test_unmatched_input_is_unrecognized() {
    let err = resolve("definitely not a source", embedded()).unwrap_err();
    assert!(
        matches!(err, RetrievalError::Unrecognized { .. }),
        "got: {err}"
    );
}

#[test]
fn test_slash_prefixed_resource_id_goes_to_the_filesystem() {
    // "/schema.json" is in the bundle, but general resolution classifies it
    // as an absolute path first. Documented priority policy: slash-prefixed
    // identifiers are only reachable through resolve_bundled.
    let err = resolve("/schema.json", embedded()).unwrap_err();
    assert!(matches!(err, RetrievalError::NotFound { .. }), "got: {err}");
}

#[test]
fn test_resolve_bundled_bypasses_classification() {
    let schema = resolve_bundled("/schema.json", embedded()).unwrap();
    assert_eq!(schema["title"], "AWS IAM Role Policy");
}

#[test]
fn test_resolve_bundled_missing_resource_is_not_found() {
    let err = resolve_bundled("/absent.json", embedded()).unwrap_err();
    assert!(matches!(err, RetrievalError::NotFound { .. }), "got: {err}");
}
