//! Prometheus metrics for the removal macro service.
//!
//! - Action metrics (invocations by action and outcome)
//! - Render metrics (templates rendered, macros substituted or left unresolved)
//! - Binding store metrics (operations by backend and result)

mod helpers;

pub use helpers::{encode_metrics, ActionMetrics, RenderMetrics, StoreMetrics};

use lazy_static::lazy_static;
use prometheus::{register_int_counter, register_int_counter_vec, IntCounter, IntCounterVec};

/// Prefix for all metrics
const METRIC_PREFIX: &str = "removal_macros";

lazy_static! {
    // ============================================================================
    // Action Metrics
    // ============================================================================

    /// Moderator actions by action name and outcome
    pub static ref ACTIONS_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_actions_total", METRIC_PREFIX),
        "Total moderator actions handled",
        &["action", "outcome"]
    ).unwrap();

    /// Custom macros written to the binding store
    pub static ref CUSTOM_MACROS_SET_TOTAL: IntCounter = register_int_counter!(
        format!("{}_custom_macros_set_total", METRIC_PREFIX),
        "Total custom macros registered"
    ).unwrap();

    // ============================================================================
    // Render Metrics
    // ============================================================================

    /// Templates rendered
    pub static ref TEMPLATES_RENDERED_TOTAL: IntCounter = register_int_counter!(
        format!("{}_templates_rendered_total", METRIC_PREFIX),
        "Total templates rendered"
    ).unwrap();

    /// Distinct macros substituted during rendering
    pub static ref MACROS_SUBSTITUTED_TOTAL: IntCounter = register_int_counter!(
        format!("{}_macros_substituted_total", METRIC_PREFIX),
        "Total distinct macros substituted"
    ).unwrap();

    /// Distinct macros that could not be resolved and were left verbatim
    pub static ref MACROS_UNRESOLVED_TOTAL: IntCounter = register_int_counter!(
        format!("{}_macros_unresolved_total", METRIC_PREFIX),
        "Total distinct macros left unresolved"
    ).unwrap();

    // ============================================================================
    // Store Metrics
    // ============================================================================

    /// Binding store operations by backend, operation and result
    pub static ref STORE_OPERATIONS_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_store_operations_total", METRIC_PREFIX),
        "Total binding store operations",
        &["backend", "operation", "result"]
    ).unwrap();
}
