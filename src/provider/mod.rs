//! # Object Store Providers
//!
//! Storage client abstraction consumed by the publisher.
//!
//! - `ObjectStore`: uploads a local file under a bucket path and object key
//! - `StoreClientFactory`: builds (or reuses) an `ObjectStore` for a store config
//! - `s3`: AWS SDK implementation for S3 and S3-compatible servers

pub mod s3;

pub use s3::{S3ClientFactory, S3ObjectStore};

use crate::error::{ConfigError, StorageError};
use crate::model::ArtifactStoreConfig;
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;

/// Storage client used to upload artifacts
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Upload `local_file` as `object_key` under `bucket_path`
    ///
    /// `bucket_path` is the bucket name optionally followed by `/folder/...`.
    async fn put_object(
        &self,
        bucket_path: &str,
        object_key: &str,
        local_file: &Path,
        content_type: &str,
    ) -> Result<(), StorageError>;
}

/// Resolves a storage client for an artifact store config
#[async_trait]
pub trait StoreClientFactory: Send + Sync {
    async fn client(&self, config: &ArtifactStoreConfig)
        -> Result<Arc<dyn ObjectStore>, ConfigError>;
}

/// Check that a store config is complete enough to build a client
///
/// # Errors
/// Returns a `ConfigError` when the bucket is missing, only one half of the
/// static credentials is set, or the endpoint is not an http(s) URL.
pub fn check_client_config(config: &ArtifactStoreConfig) -> Result<(), ConfigError> {
    if config.bucket.trim().is_empty() {
        return Err(ConfigError::new("S3Bucket is required but is empty"));
    }

    match (config.access_key(), config.secret_key()) {
        (Some(_), None) => {
            return Err(ConfigError::new(
                "AWSSecretAccessKey is required when AWSAccessKey is set",
            ))
        }
        (None, Some(_)) => {
            return Err(ConfigError::new(
                "AWSAccessKey is required when AWSSecretAccessKey is set",
            ))
        }
        _ => {}
    }

    if let Some(endpoint) = config.endpoint() {
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(ConfigError::new(format!(
                "Endpoint '{endpoint}' must start with http:// or https://"
            )));
        }
    }

    Ok(())
}
