//! # Publisher Configuration
//!
//! Process-level configuration loaded from environment variables.
//!
//! All configuration has sensible defaults and can be overridden via environment variables.
//! Per-request settings (bucket, credentials) come from the artifact store config instead.

mod publisher;

pub use publisher::PublisherConfig;

/// Load configuration from environment variables with defaults
pub fn load_config() -> PublisherConfig {
    PublisherConfig::from_env()
}
