//! # Publish Metrics
//!
//! Metrics for artifact publish operations.

use crate::observability::metrics::registry::REGISTRY;
use anyhow::Result;
use prometheus::{Histogram, IntCounter};
use std::sync::LazyLock;

static PUBLISH_TOTAL: LazyLock<IntCounter> = LazyLock::new(|| {
    IntCounter::new(
        "s3_artifact_publish_total",
        "Total number of artifact publish operations (attempts)",
    )
    .expect("Failed to create PUBLISH_TOTAL metric - this should never happen")
});

static PUBLISH_SUCCESS_TOTAL: LazyLock<IntCounter> = LazyLock::new(|| {
    IntCounter::new(
        "s3_artifact_publish_success_total",
        "Total number of successful artifact publish operations",
    )
    .expect("Failed to create PUBLISH_SUCCESS_TOTAL metric - this should never happen")
});

static PUBLISH_ERRORS_TOTAL: LazyLock<IntCounter> = LazyLock::new(|| {
    IntCounter::new(
        "s3_artifact_publish_errors_total",
        "Total number of failed artifact publish operations",
    )
    .expect("Failed to create PUBLISH_ERRORS_TOTAL metric - this should never happen")
});

static PUBLISH_DURATION: LazyLock<Histogram> = LazyLock::new(|| {
    Histogram::with_opts(
        prometheus::HistogramOpts::new(
            "s3_artifact_publish_duration_seconds",
            "Duration of successful artifact publish operations in seconds",
        )
        .buckets(vec![0.1, 0.5, 1.0, 2.0, 5.0, 10.0, 30.0, 60.0]),
    )
    .expect("Failed to create PUBLISH_DURATION metric - this should never happen")
});

/// Register publish metrics with the global registry
pub(crate) fn register_publish_metrics() -> Result<()> {
    REGISTRY.register(Box::new(PUBLISH_TOTAL.clone()))?;
    REGISTRY.register(Box::new(PUBLISH_SUCCESS_TOTAL.clone()))?;
    REGISTRY.register(Box::new(PUBLISH_ERRORS_TOTAL.clone()))?;
    REGISTRY.register(Box::new(PUBLISH_DURATION.clone()))?;
    Ok(())
}

pub fn increment_publish_total() {
    PUBLISH_TOTAL.inc();
}

pub fn increment_publish_success() {
    PUBLISH_SUCCESS_TOTAL.inc();
}

pub fn increment_publish_errors() {
    PUBLISH_ERRORS_TOTAL.inc();
}

pub fn observe_publish_duration(seconds: f64) {
    PUBLISH_DURATION.observe(seconds);
}

pub fn publish_total() -> u64 {
    PUBLISH_TOTAL.get()
}

pub fn publish_success_total() -> u64 {
    PUBLISH_SUCCESS_TOTAL.get()
}

pub fn publish_errors_total() -> u64 {
    PUBLISH_ERRORS_TOTAL.get()
}
