//! # Publish Artifact Response

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Metadata recorded for a published artifact, returned to the host as `{"metadata": {...}}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PublishArtifactResponse {
    metadata: BTreeMap<String, String>,
}

impl PublishArtifactResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_metadata(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.metadata.insert(key.into(), value.into());
    }

    pub fn metadata(&self) -> &BTreeMap<String, String> {
        &self.metadata
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
