//! # Publish Artifact Request

use crate::model::{ArtifactPlan, ArtifactStore};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Everything needed to publish one artifact, decoded once per invocation
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PublishArtifactRequest {
    pub artifact_store: ArtifactStore,
    pub artifact_plan: ArtifactPlan,
    pub agent_working_directory: PathBuf,
    /// Job environment, used for `${VAR}` substitution
    #[serde(default)]
    pub environment_variables: HashMap<String, String>,
}

impl PublishArtifactRequest {
    pub fn new(
        artifact_store: ArtifactStore,
        artifact_plan: ArtifactPlan,
        agent_working_directory: impl Into<PathBuf>,
    ) -> Self {
        Self {
            artifact_store,
            artifact_plan,
            agent_working_directory: agent_working_directory.into(),
            environment_variables: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_environment_variables(mut self, variables: HashMap<String, String>) -> Self {
        self.environment_variables = variables;
        self
    }

    pub fn from_json(body: &str) -> serde_json::Result<Self> {
        serde_json::from_str(body)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
