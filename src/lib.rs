//! S3 Artifact Publisher Library
//!
//! Publishes build artifacts from a continuous-delivery agent's working directory
//! to an S3-compatible object store.
//! Tests are included in the module files and under `tests/`.

pub mod config;
pub mod console;
pub mod constants;
pub mod error;
pub mod model;
pub mod observability;
pub mod plugin;
pub mod provider;
pub mod publisher;
pub mod template;

// Re-export the request/response model for convenience
pub use model::*;
