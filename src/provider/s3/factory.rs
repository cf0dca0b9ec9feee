//! # S3 Client Factory
//!
//! Builds S3 clients per artifact store config and caches them for reuse.

use super::S3ObjectStore;
use crate::config::PublisherConfig;
use crate::error::ConfigError;
use crate::model::ArtifactStoreConfig;
use crate::provider::{ObjectStore, StoreClientFactory};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};

/// Factory that reuses one `S3ObjectStore` per distinct store config
pub struct S3ClientFactory {
    defaults: PublisherConfig,
    cache: Mutex<HashMap<ArtifactStoreConfig, Arc<S3ObjectStore>>>,
}

impl std::fmt::Debug for S3ClientFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("S3ClientFactory")
            .field("defaults", &self.defaults)
            .field("cached_clients", &self.cached_clients())
            .finish()
    }
}

impl S3ClientFactory {
    pub fn new(defaults: PublisherConfig) -> Self {
        Self {
            defaults,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Number of clients currently cached
    pub fn cached_clients(&self) -> usize {
        self.cache.lock().map_or(0, |cache| cache.len())
    }

    fn cached(&self, config: &ArtifactStoreConfig) -> Option<Arc<S3ObjectStore>> {
        match self.cache.lock() {
            Ok(cache) => cache.get(config).map(Arc::clone),
            Err(e) => {
                warn!("Failed to lock S3 client cache: {}, building a new client", e);
                None
            }
        }
    }
}

#[async_trait]
impl StoreClientFactory for S3ClientFactory {
    async fn client(
        &self,
        config: &ArtifactStoreConfig,
    ) -> Result<Arc<dyn ObjectStore>, ConfigError> {
        if let Some(store) = self.cached(config) {
            debug!("Reusing cached S3 client for bucket {}", config.bucket);
            return Ok(store);
        }

        let store = Arc::new(S3ObjectStore::new(config, &self.defaults).await?);

        // Concurrent misses may both build a client; the last insert wins
        if let Ok(mut cache) = self.cache.lock() {
            cache.insert(config.clone(), Arc::clone(&store));
        }

        Ok(store)
    }
}
