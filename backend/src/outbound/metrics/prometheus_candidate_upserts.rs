//! Prometheus adapter for candidate upsert outcomes.
//!
//! Counters are registered with the registry owned by the `actix-web-prom`
//! middleware, so they are served from the same `/metrics` endpoint.

use async_trait::async_trait;
use prometheus::{CounterVec, Opts, Registry};

use crate::domain::ports::{CandidateUpsertMetrics, CandidateUpsertMetricsError, UpsertOutcome};

const FAILED_OUTCOME: &str = "failed";

/// Prometheus-backed upsert outcome recorder.
///
/// # Metric Specification
///
/// - **Name**: `candidates_upserts_total`
/// - **Type**: Counter
/// - **Labels**: `outcome` = `created`, `updated` or `failed`
pub struct PrometheusCandidateUpsertMetrics {
    upserts_total: CounterVec,
}

impl PrometheusCandidateUpsertMetrics {
    /// Create and register the counter with `registry`.
    ///
    /// # Errors
    ///
    /// Returns an error when Prometheus rejects metric registration, for
    /// example when the name is already registered.
    pub fn new(registry: &Registry) -> Result<Self, prometheus::Error> {
        let upserts_total = CounterVec::new(
            Opts::new("candidates_upserts_total", "Total candidate upserts by outcome"),
            &["outcome"],
        )?;
        registry.register(Box::new(upserts_total.clone()))?;
        Ok(Self { upserts_total })
    }

    fn record(&self, outcome: &str) {
        self.upserts_total.with_label_values(&[outcome]).inc();
    }
}

#[async_trait]
impl CandidateUpsertMetrics for PrometheusCandidateUpsertMetrics {
    async fn record_success(
        &self,
        outcome: UpsertOutcome,
    ) -> Result<(), CandidateUpsertMetricsError> {
        self.record(outcome.as_str());
        Ok(())
    }

    async fn record_failure(&self) -> Result<(), CandidateUpsertMetricsError> {
        self.record(FAILED_OUTCOME);
        Ok(())
    }
}
