//! # Plugin Commands
//!
//! Explicit command dispatch for host plugin requests.
//!
//! Each host request name maps to one `Command` variant, and each variant has
//! exactly one handler in `PluginHandler`:
//!
//! - `cd.go.artifact.publish-artifact` -> `Command::PublishArtifact`
//! - `cd.go.artifact.validate-store-config` -> `Command::ValidateStoreConfig`
//! - `cd.go.artifact.validate-publish-artifact-config` -> `Command::ValidatePublishArtifactConfig`

pub mod validation;

use crate::constants::{
    REQUEST_PUBLISH_ARTIFACT, REQUEST_VALIDATE_PUBLISH_ARTIFACT_CONFIG,
    REQUEST_VALIDATE_STORE_CONFIG, RESPONSE_CODE_BAD_REQUEST, RESPONSE_CODE_ERROR,
    RESPONSE_CODE_SUCCESS,
};
use crate::error::CommandError;
use crate::model::{ArtifactStoreConfig, PublishArtifactConfig, PublishArtifactRequest};
use crate::publisher::ArtifactPublisher;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{error, info, warn};

use self::validation::{validate_publish_artifact_config, validate_store_config};

/// A decoded plugin request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    PublishArtifact(Box<PublishArtifactRequest>),
    ValidateStoreConfig(ArtifactStoreConfig),
    ValidatePublishArtifactConfig(PublishArtifactConfig),
}

impl Command {
    /// Decode a host request by name and JSON body
    ///
    /// # Errors
    /// Returns `CommandError::UnknownCommand` for unsupported request names and
    /// `CommandError::MalformedRequest` when the body does not match the command's payload.
    pub fn parse(name: &str, body: &str) -> Result<Self, CommandError> {
        match name {
            REQUEST_PUBLISH_ARTIFACT => decode(name, body).map(|r| Self::PublishArtifact(Box::new(r))),
            REQUEST_VALIDATE_STORE_CONFIG => decode(name, body).map(Self::ValidateStoreConfig),
            REQUEST_VALIDATE_PUBLISH_ARTIFACT_CONFIG => {
                decode(name, body).map(Self::ValidatePublishArtifactConfig)
            }
            other => Err(CommandError::UnknownCommand(other.to_string())),
        }
    }

    /// Host request name for this command
    pub fn name(&self) -> &'static str {
        match self {
            Self::PublishArtifact(_) => REQUEST_PUBLISH_ARTIFACT,
            Self::ValidateStoreConfig(_) => REQUEST_VALIDATE_STORE_CONFIG,
            Self::ValidatePublishArtifactConfig(_) => REQUEST_VALIDATE_PUBLISH_ARTIFACT_CONFIG,
        }
    }
}

fn decode<T: DeserializeOwned>(name: &str, body: &str) -> Result<T, CommandError> {
    serde_json::from_str(body).map_err(|source| CommandError::MalformedRequest {
        name: name.to_string(),
        source,
    })
}

/// Response envelope returned to the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginResponse {
    pub code: u16,
    pub body: String,
}

impl PluginResponse {
    pub fn success(body: impl Into<String>) -> Self {
        Self {
            code: RESPONSE_CODE_SUCCESS,
            body: body.into(),
        }
    }

    pub fn error(body: impl Into<String>) -> Self {
        Self {
            code: RESPONSE_CODE_ERROR,
            body: body.into(),
        }
    }

    pub fn bad_request(body: impl Into<String>) -> Self {
        Self {
            code: RESPONSE_CODE_BAD_REQUEST,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == RESPONSE_CODE_SUCCESS
    }

    fn json<T: Serialize>(value: &T) -> Self {
        match serde_json::to_string(value) {
            Ok(body) => Self::success(body),
            Err(e) => Self::error(format!("Failed to serialize response: {e}")),
        }
    }
}

/// Routes commands to their handlers
#[derive(Debug, Clone)]
pub struct PluginHandler {
    publisher: ArtifactPublisher,
}

impl PluginHandler {
    pub fn new(publisher: ArtifactPublisher) -> Self {
        Self { publisher }
    }

    /// Decode and handle a raw host request
    pub async fn handle_request(&self, name: &str, body: &str) -> PluginResponse {
        match Command::parse(name, body) {
            Ok(command) => self.handle(command).await,
            Err(e) => {
                warn!("Rejected plugin request: {}", e);
                PluginResponse::bad_request(e.to_string())
            }
        }
    }

    /// Handle a decoded command
    pub async fn handle(&self, command: Command) -> PluginResponse {
        info!("Handling plugin request {}", command.name());
        match command {
            Command::PublishArtifact(request) => self.publish_artifact(&request).await,
            Command::ValidateStoreConfig(config) => {
                PluginResponse::json(&validate_store_config(&config))
            }
            Command::ValidatePublishArtifactConfig(config) => {
                PluginResponse::json(&validate_publish_artifact_config(&config))
            }
        }
    }

    async fn publish_artifact(&self, request: &PublishArtifactRequest) -> PluginResponse {
        match self.publisher.publish(request).await {
            Ok(response) => match response.to_json() {
                Ok(body) => PluginResponse::success(body),
                Err(e) => {
                    error!("Failed to serialize publish response: {}", e);
                    PluginResponse::error(format!("Failed to serialize publish response: {e}"))
                }
            },
            Err(failure) => PluginResponse::error(failure.to_string()),
        }
    }
}
