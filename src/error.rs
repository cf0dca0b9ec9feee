//! # Publish Error Types
//!
//! Error types for artifact publishing. Every failure is terminal for the
//! invocation; there is no transient/permanent classification.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to publish a single artifact plan
///
/// The display form is the message returned to the host and written to the console:
/// `Failed to publish <plan>: <cause>`.
#[derive(Debug, Error)]
#[error("Failed to publish {plan}: {cause}")]
pub struct PublishFailure {
    /// Human-readable description of the artifact plan
    pub plan: String,
    /// Underlying cause
    #[source]
    pub cause: PublishError,
}

impl PublishFailure {
    pub fn new(plan: impl Into<String>, cause: PublishError) -> Self {
        Self {
            plan: plan.into(),
            cause,
        }
    }
}

/// Underlying cause of a publish failure
#[derive(Debug, Error)]
pub enum PublishError {
    /// Storage client could not be constructed from the store config
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Resolved source path is missing or unreadable
    #[error("unable to read source file `{}`: {source}", .path.display())]
    SourceFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Object store rejected the upload or could not be reached
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Invalid artifact store configuration
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid artifact store configuration: {message}")]
pub struct ConfigError {
    pub message: String,
}

impl ConfigError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Error reported by an object store implementation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("failed to upload `{key}` to bucket `{bucket}`: {message}")]
pub struct StorageError {
    pub bucket: String,
    pub key: String,
    pub message: String,
}

impl StorageError {
    pub fn new(bucket: impl Into<String>, key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
            message: message.into(),
        }
    }
}

/// Error decoding a plugin request into a command
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("unknown plugin request `{0}`")]
    UnknownCommand(String),
    #[error("malformed `{name}` request body: {source}")]
    MalformedRequest {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}
