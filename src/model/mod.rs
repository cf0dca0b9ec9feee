//! # Plugin Data Model
//!
//! Serde types for the JSON payloads exchanged with the host.

mod plan;
mod request;
mod response;
mod store;

pub use plan::{ArtifactPlan, PublishArtifactConfig};
pub use request::PublishArtifactRequest;
pub use response::PublishArtifactResponse;
pub use store::{ArtifactStore, ArtifactStoreConfig};
