//! # Validation
//!
//! Validates artifact store settings and publish-artifact settings before they are saved.
//! Each problem is reported against the setting key it belongs to.

use crate::model::{ArtifactStoreConfig, PublishArtifactConfig};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

// S3 bucket naming rules: 3-63 characters, lowercase letters/numbers/dots/hyphens,
// must start and end with a letter or number
// Reference: https://docs.aws.amazon.com/AmazonS3/latest/userguide/bucketnamingrules.html
static BUCKET_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9][a-z0-9.-]{1,61}[a-z0-9]$")
        .expect("Failed to compile bucket name regex - this should never happen")
});

// AWS region formats: standard (us-east-1), gov (us-gov-west-1), iso (us-iso-east-1),
// china (cn-north-1), plus "local" for localstack-style servers
// Reference: https://docs.aws.amazon.com/general/latest/gr/rande.html
static AWS_REGION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[a-z]{2}-(?:gov-|iso-)?[a-z]+-\d+|local)$")
        .expect("Failed to compile region regex - this should never happen")
});

static HTTP_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://[^\s/$.?#].[^\s]*$")
        .expect("Failed to compile URL regex - this should never happen")
});

/// A single validation problem, keyed by setting name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub key: String,
    pub message: String,
}

impl ValidationError {
    fn new(key: &str, message: impl Into<String>) -> Self {
        Self {
            key: key.to_string(),
            message: message.into(),
        }
    }
}

/// Validate an artifact store config
///
/// Returns every problem found; an empty list means the config is valid.
pub fn validate_store_config(config: &ArtifactStoreConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let bucket = config.bucket.trim();
    if bucket.is_empty() {
        errors.push(ValidationError::new("S3Bucket", "S3Bucket must not be blank."));
    } else if !BUCKET_NAME.is_match(bucket) || bucket.contains("..") {
        errors.push(ValidationError::new(
            "S3Bucket",
            format!(
                "S3Bucket '{bucket}' must be a valid bucket name (3-63 characters, lowercase letters/numbers/dots/hyphens, must start and end with a letter or number)."
            ),
        ));
    }

    match (config.access_key(), config.secret_key()) {
        (Some(_), None) => errors.push(ValidationError::new(
            "AWSSecretAccessKey",
            "AWSSecretAccessKey must be set when AWSAccessKey is set.",
        )),
        (None, Some(_)) => errors.push(ValidationError::new(
            "AWSAccessKey",
            "AWSAccessKey must be set when AWSSecretAccessKey is set.",
        )),
        _ => {}
    }

    if let Some(region) = config.region() {
        if !AWS_REGION.is_match(&region.to_lowercase()) {
            errors.push(ValidationError::new(
                "Region",
                format!(
                    "Region '{region}' must be a valid AWS region code (e.g., 'us-east-1', 'eu-west-1', 'us-gov-west-1', 'cn-north-1')."
                ),
            ));
        }
    }

    if let Some(endpoint) = config.endpoint() {
        if !HTTP_URL.is_match(endpoint) {
            errors.push(ValidationError::new(
                "Endpoint",
                format!("Endpoint '{endpoint}' must be a valid URL starting with http:// or https://."),
            ));
        }
    }

    errors
}

/// Validate the publish-artifact settings of a pipeline job
pub fn validate_publish_artifact_config(config: &PublishArtifactConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    match config.source.as_deref().map(str::trim) {
        None | Some("") => {
            errors.push(ValidationError::new("Source", "Source must not be blank."));
        }
        Some(source) => {
            if let Some(message) = path_problem(source, "Source") {
                errors.push(ValidationError::new("Source", message));
            }
        }
    }

    if let Some(destination) = config.destination.as_deref() {
        if let Some(message) = path_problem(destination, "Destination") {
            errors.push(ValidationError::new("Destination", message));
        }
    }

    errors
}

fn path_problem(path: &str, field_name: &str) -> Option<String> {
    if path.len() > 1024 {
        return Some(format!(
            "{field_name} exceeds maximum length of 1024 characters (got {})",
            path.len()
        ));
    }

    if path.chars().any(char::is_control) {
        return Some(format!("{field_name} '{path}' contains control characters"));
    }

    None
}
