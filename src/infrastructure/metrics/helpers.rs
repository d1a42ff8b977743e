//! Metrics helper structs for convenient metric recording

use prometheus::{Encoder, TextEncoder};

use super::{
    ACTIONS_TOTAL, CUSTOM_MACROS_SET_TOTAL, MACROS_SUBSTITUTED_TOTAL, MACROS_UNRESOLVED_TOTAL,
    STORE_OPERATIONS_TOTAL, TEMPLATES_RENDERED_TOTAL,
};

/// Encode all metrics to Prometheus text format
pub fn encode_metrics() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8(buffer).unwrap_or_default())
}

/// Helper struct for recording action metrics
pub struct ActionMetrics;

impl ActionMetrics {
    /// Record an action that completed successfully
    pub fn record_success(action: &str) {
        ACTIONS_TOTAL.with_label_values(&[action, "success"]).inc();
    }

    /// Record an action rejected with a user-facing message
    pub fn record_rejected(action: &str) {
        ACTIONS_TOTAL.with_label_values(&[action, "rejected"]).inc();
    }

    /// Record an action that failed on a store or platform call
    pub fn record_failed(action: &str) {
        ACTIONS_TOTAL.with_label_values(&[action, "error"]).inc();
    }

    /// Record a custom macro write
    pub fn record_custom_macro_set() {
        CUSTOM_MACROS_SET_TOTAL.inc();
    }
}

/// Helper struct for recording render metrics
pub struct RenderMetrics;

impl RenderMetrics {
    /// Record one completed render
    pub fn record_render(substituted: usize, unresolved: usize) {
        TEMPLATES_RENDERED_TOTAL.inc();
        MACROS_SUBSTITUTED_TOTAL.inc_by(substituted as u64);
        MACROS_UNRESOLVED_TOTAL.inc_by(unresolved as u64);
    }
}

/// Helper struct for recording binding store metrics
pub struct StoreMetrics;

impl StoreMetrics {
    pub fn record_get(backend: &str, ok: bool) {
        Self::record(backend, "get", ok);
    }

    pub fn record_put(backend: &str, ok: bool) {
        Self::record(backend, "put", ok);
    }

    fn record(backend: &str, operation: &str, ok: bool) {
        let result = if ok { "ok" } else { "error" };
        STORE_OPERATIONS_TOTAL
            .with_label_values(&[backend, operation, result])
            .inc();
    }
}
