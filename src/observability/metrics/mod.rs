//! # Metrics Module
//!
//! Prometheus metrics for monitoring the publisher, organized by responsibility.
//!
//! ## Sub-modules
//!
//! - `registry` - Metrics registry setup, registration and text export
//! - `publish_metrics` - Publish operation metrics (attempts, outcomes, duration)

pub mod publish_metrics;
pub mod registry;

pub use publish_metrics::*;
pub use registry::*;
