//! Tests for trace parsing, sources and status derivation

mod common;

use chrono::{TimeZone, Utc};
use xpnav::trace::{
    KindClass, ReaderTraceSource, ResourceStatus, TraceError, TraceSource, classify, derive_status,
};

#[test]
fn test_claim_trace_shape() {
    let root = common::claim_trace();
    assert_eq!(root.kind(), "PostgreSQLInstance");
    assert_eq!(root.namespace(), Some("default"));
    assert_eq!(root.group(), "database.example.org");
    assert_eq!(root.children.len(), 2);

    let secret = &root.children[0].children[1];
    assert_eq!(secret.group(), "");
    assert_eq!(secret.id(), "Secret./my-db-conn");
    assert!(secret.children.is_empty(), "null children parse as empty");
    assert_eq!(
        secret.error.as_deref(),
        Some("secrets \"my-db-conn\" not found")
    );
}

#[test]
fn test_healthy_claim_status() {
    let root = common::claim_trace();
    let ResourceStatus::Object(status) = derive_status(&root, KindClass::Object) else {
        panic!("expected object status");
    };
    assert_eq!(status.synced, "True");
    assert_eq!(status.ready, "True");
    assert_eq!(
        status.ready_last_transition,
        Some(Utc.with_ymd_and_hms(2024, 3, 1, 9, 12, 0).unwrap())
    );
    assert!(status.ok);
    assert_eq!(status.message, "");
}

#[test]
fn test_unready_reason_used_without_message() {
    let root = common::claim_trace();
    let status = derive_status(&root.children[0], KindClass::Object);
    assert!(!status.ok());
    assert_eq!(status.message(), "Creating");
}

#[test]
fn test_node_error_surfaces_as_message() {
    let root = common::claim_trace();
    let status = derive_status(&root.children[0].children[1], KindClass::Object);
    assert!(!status.ok());
    assert_eq!(status.message(), "secrets \"my-db-conn\" not found");
}

#[test]
fn test_ready_message_takes_priority_over_synced() {
    let node = common::resource(serde_json::json!({
        "object": {
            "kind": "XR",
            "status": {"conditions": [
                {"type": "Synced", "status": "False", "message": "cannot apply"},
                {"type": "Ready", "status": "False", "message": "not ready"}
            ]}
        }
    }));
    let status = derive_status(&node, KindClass::Object);
    assert_eq!(status.message(), "not ready");
}

#[test]
fn test_package_status() {
    let root = common::package_trace();
    assert_eq!(classify(root.group()), KindClass::Package);

    let ResourceStatus::Package(status) = derive_status(&root, KindClass::Package) else {
        panic!("expected package status");
    };
    assert_eq!(status.version, "v0.9.0");
    assert_eq!(status.installed, "True");
    assert_eq!(status.healthy, "False");
    assert_eq!(status.state, "-");
    assert_eq!(status.message, "dependency provider-aws is not healthy");
    assert!(!status.ok);

    let ResourceStatus::Package(provider) = derive_status(&root.children[1], KindClass::Package)
    else {
        panic!("expected package status");
    };
    assert_eq!(provider.version, "sha256:1f3c");
    assert!(provider.ok);

    let ResourceStatus::Package(revision) = derive_status(&root.children[0], KindClass::Package)
    else {
        panic!("expected package status");
    };
    assert_eq!(revision.state, "Active");
    assert_eq!(revision.installed, "-");
}

#[tokio::test]
async fn test_reader_source_refetches_same_snapshot() {
    let source = ReaderTraceSource::from_bytes("stdin", common::CLAIM_TRACE);
    let first = source.fetch().await.unwrap();
    let second = source.fetch().await.unwrap();
    assert_eq!(first, second);
    assert_eq!(source.describe(), "stdin");
}

#[tokio::test]
async fn test_reader_source_malformed() {
    let source = ReaderTraceSource::from_bytes("stdin", "{\"object\": ");
    let err = source.fetch().await.unwrap_err();
    assert!(matches!(err, TraceError::Malformed(_)));
    assert!(!err.is_usage_error());
}
