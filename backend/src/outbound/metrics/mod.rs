//! Outbound adapters for metrics exporting.
//!
//! Prometheus-backed implementations of domain metrics ports, compiled only
//! with the `metrics` feature.

mod prometheus_candidate_upserts;

pub use prometheus_candidate_upserts::PrometheusCandidateUpsertMetrics;
