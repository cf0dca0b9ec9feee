//! # Observability
//!
//! Prometheus metrics for publish operations. Diagnostic logging goes through `tracing`.

pub mod metrics;
