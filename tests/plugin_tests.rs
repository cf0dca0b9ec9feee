//! # Plugin Command Tests
//!
//! End-to-end tests for host request dispatch through `PluginHandler`.

mod common;

use common::{RecordingConsole, RecordingStore, StubFactory};
use s3_artifact_publisher::plugin::validation::ValidationError;
use s3_artifact_publisher::plugin::PluginHandler;
use s3_artifact_publisher::publisher::ArtifactPublisher;
use serde_json::json;
use std::sync::Arc;
use tempfile::TempDir;

fn handler(store: RecordingStore) -> (PluginHandler, Arc<RecordingStore>) {
    let store = Arc::new(store);
    let publisher = ArtifactPublisher::new(
        Arc::new(StubFactory::new(Arc::clone(&store))),
        Arc::new(RecordingConsole::default()),
    );
    (PluginHandler::new(publisher), store)
}

fn publish_body(working_dir: &std::path::Path) -> String {
    json!({
        "artifact_store": {
            "id": "s3-store",
            "S3Bucket": "artifacts",
            "AWSAccessKey": "AKIA",
            "AWSSecretAccessKey": "secret"
        },
        "artifact_plan": {
            "id": "installer",
            "storeId": "s3-store",
            "source": "build-${GO_PIPELINE_COUNTER}.json",
            "destination": "DestinationFolder"
        },
        "agent_working_directory": working_dir,
        "environment_variables": { "GO_PIPELINE_COUNTER": "7" }
    })
    .to_string()
}

#[tokio::test]
async fn test_publish_request_success() {
    let working_dir = TempDir::new().unwrap();
    std::fs::write(working_dir.path().join("build-7.json"), "{}").unwrap();
    let (handler, store) = handler(RecordingStore::default());

    let response = handler
        .handle_request("cd.go.artifact.publish-artifact", &publish_body(working_dir.path()))
        .await;

    assert_eq!(response.code, 200);
    assert_eq!(response.body, r#"{"metadata":{"Source":"build-7.json"}}"#);
    assert_eq!(store.calls()[0].bucket_path, "artifacts/DestinationFolder");
}

#[tokio::test]
async fn test_publish_request_failure_is_error_envelope() {
    let working_dir = TempDir::new().unwrap();
    std::fs::write(working_dir.path().join("build-7.json"), "{}").unwrap();
    let (handler, _store) = handler(RecordingStore::failing("connection reset by peer"));

    let response = handler
        .handle_request("cd.go.artifact.publish-artifact", &publish_body(working_dir.path()))
        .await;

    assert_eq!(response.code, 500);
    assert!(response.body.starts_with("Failed to publish artifact plan `installer`"));
    assert!(response.body.contains("connection reset by peer"));
    assert!(!response.body.contains("metadata"));
}

#[tokio::test]
async fn test_validate_store_config_request() {
    let (handler, _store) = handler(RecordingStore::default());

    let response = handler
        .handle_request(
            "cd.go.artifact.validate-store-config",
            r#"{"S3Bucket": "", "AWSAccessKey": "AKIA"}"#,
        )
        .await;

    assert_eq!(response.code, 200);
    let errors: Vec<ValidationError> = serde_json::from_str(&response.body).unwrap();
    let keys: Vec<&str> = errors.iter().map(|e| e.key.as_str()).collect();
    assert_eq!(keys, vec!["S3Bucket", "AWSSecretAccessKey"]);
}

#[tokio::test]
async fn test_validate_publish_artifact_config_request() {
    let (handler, _store) = handler(RecordingStore::default());

    let response = handler
        .handle_request(
            "cd.go.artifact.validate-publish-artifact-config",
            r#"{"Source": "build.json", "Destination": "out"}"#,
        )
        .await;

    assert_eq!(response.code, 200);
    assert_eq!(response.body, "[]");
}

#[tokio::test]
async fn test_unknown_request_is_rejected() {
    let (handler, store) = handler(RecordingStore::default());

    let response = handler
        .handle_request("cd.go.artifact.get-icon", "{}")
        .await;

    assert_eq!(response.code, 400);
    assert!(response.body.contains("cd.go.artifact.get-icon"));
    assert!(store.calls().is_empty());
}

#[tokio::test]
async fn test_malformed_publish_request_is_rejected() {
    let (handler, _store) = handler(RecordingStore::default());

    let response = handler
        .handle_request("cd.go.artifact.publish-artifact", r#"{"artifact_plan": {}}"#)
        .await;

    assert_eq!(response.code, 400);
    assert!(response.body.contains("malformed"));
}
