//! Shared test doubles for the publisher integration tests.

#![allow(dead_code, reason = "Each test binary uses a different subset of helpers")]

use async_trait::async_trait;
use s3_artifact_publisher::console::ConsoleLogger;
use s3_artifact_publisher::error::{ConfigError, StorageError};
use s3_artifact_publisher::provider::{ObjectStore, StoreClientFactory};
use s3_artifact_publisher::{ArtifactStoreConfig, PublishArtifactRequest};
use s3_artifact_publisher::{ArtifactPlan, ArtifactStore};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// One recorded `put_object` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PutCall {
    pub bucket_path: String,
    pub object_key: String,
    pub local_file: PathBuf,
    pub content_type: String,
    pub contents: Vec<u8>,
}

/// Object store that records uploads and optionally fails them
#[derive(Debug, Default)]
pub struct RecordingStore {
    pub calls: Mutex<Vec<PutCall>>,
    pub failure: Option<String>,
}

impl RecordingStore {
    pub fn failing(message: &str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failure: Some(message.to_string()),
        }
    }

    pub fn calls(&self) -> Vec<PutCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ObjectStore for RecordingStore {
    async fn put_object(
        &self,
        bucket_path: &str,
        object_key: &str,
        local_file: &Path,
        content_type: &str,
    ) -> Result<(), StorageError> {
        let contents = tokio::fs::read(local_file).await.unwrap_or_default();
        self.calls.lock().unwrap().push(PutCall {
            bucket_path: bucket_path.to_string(),
            object_key: object_key.to_string(),
            local_file: local_file.to_path_buf(),
            content_type: content_type.to_string(),
            contents,
        });

        match &self.failure {
            Some(message) => Err(StorageError::new(bucket_path, object_key, message.clone())),
            None => Ok(()),
        }
    }
}

/// Factory handing out a shared `RecordingStore`, or a configuration error
#[derive(Debug)]
pub struct StubFactory {
    pub store: Arc<RecordingStore>,
    pub config_error: Option<String>,
    pub requested: Mutex<Vec<ArtifactStoreConfig>>,
}

impl StubFactory {
    pub fn new(store: Arc<RecordingStore>) -> Self {
        Self {
            store,
            config_error: None,
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn rejecting(message: &str) -> Self {
        Self {
            store: Arc::new(RecordingStore::default()),
            config_error: Some(message.to_string()),
            requested: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl StoreClientFactory for StubFactory {
    async fn client(
        &self,
        config: &ArtifactStoreConfig,
    ) -> Result<Arc<dyn ObjectStore>, ConfigError> {
        self.requested.lock().unwrap().push(config.clone());
        match &self.config_error {
            Some(message) => Err(ConfigError::new(message.clone())),
            None => Ok(Arc::clone(&self.store) as Arc<dyn ObjectStore>),
        }
    }
}

/// Console that keeps every line it receives
#[derive(Debug, Default)]
pub struct RecordingConsole {
    pub infos: Mutex<Vec<String>>,
    pub errors: Mutex<Vec<String>>,
}

impl RecordingConsole {
    pub fn infos(&self) -> Vec<String> {
        self.infos.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }
}

impl ConsoleLogger for RecordingConsole {
    fn info(&self, message: &str) {
        self.infos.lock().unwrap().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }
}

/// Publish request against bucket `test`, mirroring a typical pipeline job
pub fn publish_request(
    working_dir: &Path,
    source: &str,
    destination: Option<&str>,
) -> PublishArtifactRequest {
    let plan = ArtifactPlan::new("id", "storeId", source, destination.map(str::to_string));
    let store_config = ArtifactStoreConfig::new("test", "test", "test").with_region("us-east-1");
    PublishArtifactRequest::new(
        ArtifactStore::new(plan.id.clone(), store_config),
        plan,
        working_dir,
    )
}
