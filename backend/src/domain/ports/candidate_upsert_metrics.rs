//! Domain port surface for recording candidate upsert outcomes.
//!
//! Keeps the upsert service independent of any metrics backend. The
//! Prometheus adapter lives behind the `metrics` feature; everything else
//! uses [`NoOpCandidateUpsertMetrics`].

use async_trait::async_trait;

use super::UpsertOutcome;
use super::define_port_error;

define_port_error! {
    /// Errors exposed when recording candidate upsert metrics.
    pub enum CandidateUpsertMetricsError {
        /// Metric exporter rejected the write.
        Export { message: String } => "candidate upsert metrics exporter failed: {message}",
    }
}

/// Metrics recording port for upsert outcomes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CandidateUpsertMetrics: Send + Sync {
    /// Record a successful upsert.
    async fn record_success(
        &self,
        outcome: UpsertOutcome,
    ) -> Result<(), CandidateUpsertMetricsError>;

    /// Record an upsert that failed in storage.
    async fn record_failure(&self) -> Result<(), CandidateUpsertMetricsError>;
}

/// No-op implementation for when metrics are disabled or in tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpCandidateUpsertMetrics;

#[async_trait]
impl CandidateUpsertMetrics for NoOpCandidateUpsertMetrics {
    async fn record_success(
        &self,
        _outcome: UpsertOutcome,
    ) -> Result<(), CandidateUpsertMetricsError> {
        Ok(())
    }

    async fn record_failure(&self) -> Result<(), CandidateUpsertMetricsError> {
        Ok(())
    }
}
