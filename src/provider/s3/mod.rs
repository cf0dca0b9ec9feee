//! # S3 Object Store
//!
//! Client for uploading artifacts to Amazon S3 or an S3-compatible server.
//!
//! This module provides functionality to:
//! - Build an S3 client from an artifact store config (static keys or default chain)
//! - Upload a local file with a fixed content type
//! - Cache clients per store config for the lifetime of the process

mod auth;
mod factory;

pub use auth::ConnectionSettings;
pub use factory::S3ClientFactory;

use crate::config::PublisherConfig;
use crate::error::{ConfigError, StorageError};
use crate::model::ArtifactStoreConfig;
use crate::provider::{check_client_config, ObjectStore};
use async_trait::async_trait;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client as S3Client;
use std::path::Path;
use tracing::{debug, info_span, Instrument};

use self::auth::create_sdk_config;

/// S3 provider implementation
pub struct S3ObjectStore {
    pub(crate) client: S3Client,
    pub(crate) settings: ConnectionSettings,
}

impl std::fmt::Debug for S3ObjectStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("S3ObjectStore")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl S3ObjectStore {
    /// Create a new S3 client for the given store config
    ///
    /// # Errors
    /// Returns a `ConfigError` when the store config cannot produce a valid client.
    pub async fn new(
        config: &ArtifactStoreConfig,
        defaults: &PublisherConfig,
    ) -> Result<Self, ConfigError> {
        check_client_config(config)?;

        let settings = ConnectionSettings::resolve(config, defaults);
        let sdk_config = create_sdk_config(config, &settings).await;
        let s3_config = aws_sdk_s3::config::Builder::from(&sdk_config)
            .force_path_style(settings.force_path_style)
            .build();

        Ok(Self {
            client: S3Client::from_conf(s3_config),
            settings,
        })
    }

    pub fn settings(&self) -> &ConnectionSettings {
        &self.settings
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn put_object(
        &self,
        bucket_path: &str,
        object_key: &str,
        local_file: &Path,
        content_type: &str,
    ) -> Result<(), StorageError> {
        let (bucket, key) = split_bucket_path(bucket_path, object_key);

        let span = info_span!(
            "s3.put_object",
            bucket = %bucket,
            key = %key,
            region = %self.settings.region
        );

        async {
            let body = ByteStream::from_path(local_file)
                .await
                .map_err(|e| StorageError::new(&bucket, &key, e.to_string()))?;

            self.client
                .put_object()
                .bucket(&bucket)
                .key(&key)
                .content_type(content_type)
                .body(body)
                .send()
                .await
                .map_err(|e| {
                    StorageError::new(&bucket, &key, DisplayErrorContext(&e).to_string())
                })?;

            debug!("Uploaded {} to s3://{}/{}", local_file.display(), bucket, key);
            Ok(())
        }
        .instrument(span)
        .await
    }
}

/// Split a bucket path (`bucket/folder/...`) into the S3 bucket and the full object key
///
/// Everything after the first `/` becomes a key prefix for `object_key`.
pub fn split_bucket_path(bucket_path: &str, object_key: &str) -> (String, String) {
    let object_key = object_key.trim_start_matches('/');

    match bucket_path.split_once('/') {
        Some((bucket, prefix)) => {
            let prefix = prefix.trim_matches('/');
            if prefix.is_empty() {
                (bucket.to_string(), object_key.to_string())
            } else {
                (bucket.to_string(), format!("{prefix}/{object_key}"))
            }
        }
        None => (bucket_path.to_string(), object_key.to_string()),
    }
}
