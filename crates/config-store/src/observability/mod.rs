//! Observability for the config store.
//!
//! Spans are emitted through `tracing` at each store operation. Metrics
//! go through the `metrics` facade, so the host application decides on the
//! exporter.

pub mod metrics;
