//! Metrics definitions for the config store.
//!
//! All metrics follow Prometheus naming conventions:
//! - `config_store_` prefix
//! - `_total` suffix for counters
//! - `_seconds` suffix for duration histograms
//!
//! # Cardinality
//!
//! Labels are bounded:
//! - `operation`: 9 values (create/get/list for each entity kind)
//! - `status`: 4 values (success, conflict, not_found, error)

use metrics::{counter, histogram};
use std::time::Duration;

/// Record completion of a store operation
///
/// Metric: `config_store_operations_total`, `config_store_operation_duration_seconds`
/// Labels: `operation`, `status`
pub fn record_store_operation(operation: &'static str, status: &'static str, duration: Duration) {
    histogram!("config_store_operation_duration_seconds",
        "operation" => operation,
        "status" => status
    )
    .record(duration.as_secs_f64());

    counter!("config_store_operations_total",
        "operation" => operation,
        "status" => status
    )
    .increment(1);
}
