//! # Artifact Publisher
//!
//! Publishes one artifact plan to the configured object store.
//!
//! Steps, in order:
//! 1. Resolve the storage client for the store config
//! 2. Substitute `${VAR}` placeholders in the source and destination templates
//! 3. Compute the destination path (`bucket` or `bucket/folder`)
//! 4. Resolve the local file under the agent working directory, refusing `..` escapes
//! 5. Upload the file under the resolved source path
//!
//! Success records `Source` metadata; any failure is logged to the console and
//! the diagnostic log and returned as a `PublishFailure`.

pub mod paths;

use crate::console::ConsoleLogger;
use crate::constants::{ARTIFACT_CONTENT_TYPE, METADATA_SOURCE_KEY};
use crate::error::{PublishError, PublishFailure};
use crate::model::{PublishArtifactRequest, PublishArtifactResponse};
use crate::observability::metrics;
use crate::provider::StoreClientFactory;
use crate::template::substitute;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, info_span, Instrument};

use self::paths::{destination_path, local_file_path};

/// Publishes artifacts using an injected client factory and console
#[derive(Clone)]
pub struct ArtifactPublisher {
    factory: Arc<dyn StoreClientFactory>,
    console: Arc<dyn ConsoleLogger>,
}

impl std::fmt::Debug for ArtifactPublisher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArtifactPublisher").finish_non_exhaustive()
    }
}

impl ArtifactPublisher {
    pub fn new(factory: Arc<dyn StoreClientFactory>, console: Arc<dyn ConsoleLogger>) -> Self {
        Self { factory, console }
    }

    /// Publish the artifact described by `request`
    ///
    /// # Errors
    /// Returns a `PublishFailure` when the client cannot be built, the source
    /// file cannot be read, or the upload fails. No metadata is produced in that case.
    pub async fn publish(
        &self,
        request: &PublishArtifactRequest,
    ) -> Result<PublishArtifactResponse, PublishFailure> {
        let plan = &request.artifact_plan;
        let span = info_span!(
            "publisher.publish",
            plan.id = %plan.id,
            plan.store_id = %plan.store_id,
            store.bucket = %request.artifact_store.config.bucket
        );

        async {
            let start = Instant::now();
            metrics::increment_publish_total();

            match self.try_publish(request).await {
                Ok(response) => {
                    metrics::increment_publish_success();
                    metrics::observe_publish_duration(start.elapsed().as_secs_f64());
                    Ok(response)
                }
                Err(cause) => {
                    let failure = PublishFailure::new(plan.to_string(), cause);
                    self.console.error(&failure.to_string());
                    error!(
                        plan.id = %plan.id,
                        error = %failure.cause,
                        "Failed to publish {}: {}",
                        failure.plan,
                        failure.cause
                    );
                    metrics::increment_publish_errors();
                    Err(failure)
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn try_publish(
        &self,
        request: &PublishArtifactRequest,
    ) -> Result<PublishArtifactResponse, PublishError> {
        let plan = &request.artifact_plan;
        let store_config = &request.artifact_store.config;

        let store = self.factory.client(store_config).await?;

        let variables = &request.environment_variables;
        let source = substitute(&plan.source, variables);
        let destination_folder = substitute(plan.destination_template(), variables);
        let bucket_path = destination_path(&store_config.bucket, &destination_folder);
        let local_file = local_file_path(&request.agent_working_directory, &source).ok_or_else(
            || PublishError::SourceFile {
                path: request.agent_working_directory.join(&source),
                source: std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    "outside the agent working directory",
                ),
            },
        )?;

        debug!(
            "Resolved source `{}` -> {}, destination `{}`",
            source,
            local_file.display(),
            bucket_path
        );

        ensure_source_file(&local_file).await?;

        store
            .put_object(&bucket_path, &source, &local_file, ARTIFACT_CONTENT_TYPE)
            .await?;

        let mut response = PublishArtifactResponse::new();
        response.add_metadata(METADATA_SOURCE_KEY, source.as_str());

        self.console.info(&format!(
            "Source file `{source}` successfully pushed to S3 bucket `{}`.",
            store_config.bucket
        ));
        info!(
            "Published {} to {} as {}",
            local_file.display(),
            bucket_path,
            source
        );

        Ok(response)
    }
}

/// The resolved source must exist and be a regular file
async fn ensure_source_file(path: &Path) -> Result<(), PublishError> {
    let metadata = tokio::fs::metadata(path)
        .await
        .map_err(|source| PublishError::SourceFile {
            path: path.to_path_buf(),
            source,
        })?;

    if metadata.is_file() {
        Ok(())
    } else {
        Err(PublishError::SourceFile {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "not a regular file"),
        })
    }
}
