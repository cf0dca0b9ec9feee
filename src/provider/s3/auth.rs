//! # S3 Authentication
//!
//! Handles AWS SDK configuration and authentication setup for an artifact store.

use crate::config::PublisherConfig;
use crate::constants::CREDENTIALS_PROVIDER_NAME;
use crate::model::ArtifactStoreConfig;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_credential_types::Credentials;
use tracing::{debug, info};

/// Resolved connection settings for one store config
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionSettings {
    pub region: String,
    pub endpoint: Option<String>,
    pub force_path_style: bool,
    pub static_credentials: bool,
}

impl ConnectionSettings {
    /// Merge the store config with process-level defaults
    pub fn resolve(config: &ArtifactStoreConfig, defaults: &PublisherConfig) -> Self {
        let region = config
            .region()
            .map_or_else(|| defaults.default_region.clone(), str::to_string);
        let endpoint = config
            .endpoint()
            .map(str::to_string)
            .or_else(|| defaults.endpoint_override.clone());
        let force_path_style = defaults.path_style_for(endpoint.as_deref());

        Self {
            region,
            endpoint,
            force_path_style,
            static_credentials: config.access_key().is_some() && config.secret_key().is_some(),
        }
    }
}

/// Create AWS SDK config using the static keys from the store config
pub async fn create_static_config(
    settings: &ConnectionSettings,
    access_key: &str,
    secret_key: &str,
) -> SdkConfig {
    let credentials = Credentials::new(
        access_key,
        secret_key,
        None,
        None,
        CREDENTIALS_PROVIDER_NAME,
    );

    let mut builder = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(settings.region.clone()))
        .credentials_provider(credentials);

    if let Some(endpoint) = &settings.endpoint {
        info!("Routing S3 requests to custom endpoint {}", endpoint);
        builder = builder.endpoint_url(endpoint);
    }

    builder.load().await
}

/// Create AWS SDK config using the default credential chain
pub async fn create_default_config(settings: &ConnectionSettings) -> SdkConfig {
    let mut builder = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(settings.region.clone()));

    if let Some(endpoint) = &settings.endpoint {
        info!("Routing S3 requests to custom endpoint {}", endpoint);
        builder = builder.endpoint_url(endpoint);
    }

    builder.load().await
}

/// Create AWS SDK config based on the credentials present in the store config
pub async fn create_sdk_config(
    config: &ArtifactStoreConfig,
    settings: &ConnectionSettings,
) -> SdkConfig {
    match (config.access_key(), config.secret_key()) {
        (Some(access_key), Some(secret_key)) => {
            debug!("Using static credentials from artifact store config");
            create_static_config(settings, access_key, secret_key).await
        }
        _ => {
            info!("No credentials in artifact store config, using the AWS default credential chain");
            create_default_config(settings).await
        }
    }
}
