//! # Publisher Settings
//!
//! S3 client defaults loaded from environment variables.

/// S3 client defaults applied to every store config
///
/// All settings have sensible defaults and can be overridden via environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublisherConfig {
    /// Region used when the store config does not name one
    pub default_region: String,
    /// Endpoint override applied when the store config has no endpoint
    /// Useful for pointing every request at a local S3-compatible server
    pub endpoint_override: Option<String>,
    /// Use path-style addressing (`endpoint/bucket/key`)
    /// Required by most S3-compatible servers; `None` means "only when an endpoint is set"
    pub force_path_style: Option<bool>,
}

impl Default for PublisherConfig {
    fn default() -> Self {
        use crate::constants::DEFAULT_REGION;
        Self {
            default_region: DEFAULT_REGION.to_string(),
            endpoint_override: None,
            force_path_style: None,
        }
    }
}

impl PublisherConfig {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            default_region: non_empty("S3_DEFAULT_REGION").unwrap_or(defaults.default_region),
            endpoint_override: non_empty("S3_ENDPOINT_URL"),
            force_path_style: non_empty("S3_FORCE_PATH_STYLE").and_then(|v| parse_bool(&v)),
        }
    }

    /// Whether path-style addressing applies given the effective endpoint
    pub fn path_style_for(&self, endpoint: Option<&str>) -> bool {
        self.force_path_style.unwrap_or(endpoint.is_some())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
