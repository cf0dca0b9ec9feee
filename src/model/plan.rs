//! # Artifact Plan
//!
//! Declarative description of one artifact to publish.

use serde::{Deserialize, Serialize};

/// Artifact plan: which file to publish and where to put it
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactPlan {
    pub id: String,
    pub store_id: String,
    /// Source path template, relative to the agent working directory. May embed `${VAR}` placeholders.
    #[serde(alias = "Source")]
    pub source: String,
    /// Destination folder template inside the bucket
    #[serde(default, alias = "Destination", skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
}

impl ArtifactPlan {
    pub fn new(
        id: impl Into<String>,
        store_id: impl Into<String>,
        source: impl Into<String>,
        destination: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            store_id: store_id.into(),
            source: source.into(),
            destination,
        }
    }

    /// Destination template, empty when none was configured
    pub fn destination_template(&self) -> &str {
        self.destination.as_deref().unwrap_or_default()
    }
}

impl std::fmt::Display for ArtifactPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "artifact plan `{}` (store `{}`, source `{}`",
            self.id, self.store_id, self.source
        )?;
        if let Some(destination) = &self.destination {
            write!(f, ", destination `{destination}`")?;
        }
        write!(f, ")")
    }
}

/// Publish-artifact settings as entered in the pipeline configuration, used for validation
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PublishArtifactConfig {
    #[serde(rename = "Source", alias = "source", default)]
    pub source: Option<String>,
    #[serde(rename = "Destination", alias = "destination", default)]
    pub destination: Option<String>,
}
