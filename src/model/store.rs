//! # Artifact Store Configuration
//!
//! Connection parameters for the destination object store.

use serde::{Deserialize, Serialize};

/// Artifact store as sent by the host: an optional store id plus its configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ArtifactStore {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub config: ArtifactStoreConfig,
}

impl ArtifactStore {
    pub fn new(id: impl Into<String>, config: ArtifactStoreConfig) -> Self {
        Self {
            id: Some(id.into()),
            config,
        }
    }
}

/// S3 artifact store configuration
///
/// Field names follow the plugin's store settings (`S3Bucket`, `AWSAccessKey`, ...);
/// snake_case aliases are accepted as well. Empty strings are treated as unset.
#[derive(Clone, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
pub struct ArtifactStoreConfig {
    /// Bucket name (required)
    #[serde(rename = "S3Bucket", alias = "bucket", default)]
    pub bucket: String,
    /// Static access key id. When both keys are unset the AWS default credential chain is used.
    #[serde(
        rename = "AWSAccessKey",
        alias = "access_key",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub access_key: Option<String>,
    /// Static secret access key
    #[serde(
        rename = "AWSSecretAccessKey",
        alias = "secret_key",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub secret_key: Option<String>,
    /// Region (e.g. "us-east-1")
    #[serde(
        rename = "Region",
        alias = "region",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub region: Option<String>,
    /// Endpoint URL for S3-compatible stores (MinIO, Ceph, LocalStack)
    #[serde(
        rename = "Endpoint",
        alias = "endpoint",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub endpoint: Option<String>,
}

impl std::fmt::Debug for ArtifactStoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArtifactStoreConfig")
            .field("bucket", &self.bucket)
            .field("access_key", &self.access_key)
            .field("region", &self.region)
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl ArtifactStoreConfig {
    /// Config with bucket and static credentials, no region or endpoint
    pub fn new(
        bucket: impl Into<String>,
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Self {
        Self {
            bucket: bucket.into(),
            access_key: Some(access_key.into()),
            secret_key: Some(secret_key.into()),
            region: None,
            endpoint: None,
        }
    }

    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn access_key(&self) -> Option<&str> {
        non_empty(self.access_key.as_deref())
    }

    pub fn secret_key(&self) -> Option<&str> {
        non_empty(self.secret_key.as_deref())
    }

    pub fn region(&self) -> Option<&str> {
        non_empty(self.region.as_deref())
    }

    pub fn endpoint(&self) -> Option<&str> {
        non_empty(self.endpoint.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
