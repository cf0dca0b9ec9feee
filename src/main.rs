//! # S3 Artifact Publisher CLI
//!
//! Command-line entry point for the artifact publisher plugin.
//!
//! Reads a JSON plugin request, dispatches it to the matching command handler and
//! prints the response body. The exit status is non-zero when the handler fails.
//!
//! ## Usage
//!
//! ```bash
//! # Publish the artifact described by a publish-artifact request
//! s3-artifact-publisher publish --request request.json
//!
//! # Validate an artifact store configuration (reads stdin)
//! echo '{"S3Bucket": "artifacts"}' | s3-artifact-publisher validate-store --request -
//!
//! # Dispatch a raw host request by name
//! s3-artifact-publisher handle --name cd.go.artifact.publish-artifact --request request.json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use s3_artifact_publisher::config;
use s3_artifact_publisher::console::StdoutConsole;
use s3_artifact_publisher::constants::{
    REQUEST_PUBLISH_ARTIFACT, REQUEST_VALIDATE_PUBLISH_ARTIFACT_CONFIG,
    REQUEST_VALIDATE_STORE_CONFIG,
};
use s3_artifact_publisher::observability::metrics;
use s3_artifact_publisher::plugin::PluginHandler;
use s3_artifact_publisher::provider::S3ClientFactory;
use s3_artifact_publisher::publisher::ArtifactPublisher;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, warn};

/// S3 Artifact Publisher CLI
#[derive(Parser)]
#[command(name = "s3-artifact-publisher")]
#[command(about = "Publish build artifacts to S3-compatible object stores", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Print Prometheus metrics to stderr after handling the request
    #[arg(long, global = true)]
    metrics: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Publish an artifact described by a publish-artifact request
    Publish {
        /// Path to the JSON request, or `-` for stdin
        #[arg(short, long)]
        request: PathBuf,
    },
    /// Validate an artifact store configuration
    ValidateStore {
        /// Path to the JSON store configuration, or `-` for stdin
        #[arg(short, long)]
        request: PathBuf,
    },
    /// Validate publish-artifact settings (Source/Destination)
    ValidatePlan {
        /// Path to the JSON settings, or `-` for stdin
        #[arg(short, long)]
        request: PathBuf,
    },
    /// Dispatch a raw host request by name
    Handle {
        /// Host request name (e.g. cd.go.artifact.publish-artifact)
        #[arg(short, long)]
        name: String,

        /// Path to the JSON request body, or `-` for stdin
        #[arg(short, long)]
        request: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Load .env before reading any configuration
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("Failed to load .env file: {e}");
        }
    }

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "s3_artifact_publisher=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = metrics::register_metrics() {
        warn!("Failed to register metrics: {}", e);
    }

    let publisher_config = config::load_config();
    debug!("Publisher configuration: {:?}", publisher_config);

    let factory = Arc::new(S3ClientFactory::new(publisher_config));
    let publisher = ArtifactPublisher::new(factory, Arc::new(StdoutConsole));
    let handler = PluginHandler::new(publisher);

    let (name, request) = match cli.command {
        Commands::Publish { request } => (REQUEST_PUBLISH_ARTIFACT.to_string(), request),
        Commands::ValidateStore { request } => (REQUEST_VALIDATE_STORE_CONFIG.to_string(), request),
        Commands::ValidatePlan { request } => {
            (REQUEST_VALIDATE_PUBLISH_ARTIFACT_CONFIG.to_string(), request)
        }
        Commands::Handle { name, request } => (name, request),
    };

    let body = read_request(&request)?;
    let response = handler.handle_request(&name, &body).await;

    println!("{}", response.body);

    if cli.metrics {
        eprintln!("{}", metrics::gather_text()?);
    }

    Ok(if response.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Read the request body from a file, or stdin when the path is `-`
fn read_request(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut body = String::new();
        std::io::stdin()
            .read_to_string(&mut body)
            .context("Failed to read request from stdin")?;
        return Ok(body);
    }

    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read request file '{}'", path.display()))
}
