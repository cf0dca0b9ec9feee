//! # Constants
//!
//! Shared constants for the artifact publisher.

/// Content type attached to every uploaded artifact
///
/// Fixed regardless of the artifact's real type. Kept verbatim for compatibility
/// with objects published by earlier plugin releases.
pub const ARTIFACT_CONTENT_TYPE: &str = "plain/text";

/// Metadata key under which the resolved source path is reported
pub const METADATA_SOURCE_KEY: &str = "Source";

/// Region used when neither the store config nor the environment provides one
pub const DEFAULT_REGION: &str = "us-east-1";

/// Provider name attached to static credentials built from the store config
pub const CREDENTIALS_PROVIDER_NAME: &str = "artifact-store-config";

/// Plugin request names understood by the command dispatcher
pub const REQUEST_PUBLISH_ARTIFACT: &str = "cd.go.artifact.publish-artifact";
pub const REQUEST_VALIDATE_STORE_CONFIG: &str = "cd.go.artifact.validate-store-config";
pub const REQUEST_VALIDATE_PUBLISH_ARTIFACT_CONFIG: &str =
    "cd.go.artifact.validate-publish-artifact-config";

/// Response codes returned to the host
pub const RESPONSE_CODE_SUCCESS: u16 = 200;
pub const RESPONSE_CODE_BAD_REQUEST: u16 = 400;
pub const RESPONSE_CODE_ERROR: u16 = 500;
