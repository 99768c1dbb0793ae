//! Candidate upsert domain service.
//!
//! Implements [`CandidateCommand`] on top of a [`CandidateRepository`]. The
//! stored record is looked up by e-mail, merged in memory with the incoming
//! fields and written back with a single `save`, so a failed attempt never
//! leaves a half-applied record behind.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::domain::ports::{
    CandidateCommand, CandidateRepository, CandidateRepositoryError, CandidateUpsertMetrics,
    NoOpCandidateUpsertMetrics, UpsertOutcome,
};
use crate::domain::{Candidate, CandidateInput, Error};

/// Candidate service implementing the upsert driving port.
#[derive(Clone)]
pub struct CandidateUpsertService<R, M = NoOpCandidateUpsertMetrics> {
    repository: Arc<R>,
    metrics: Arc<M>,
}

impl<R> CandidateUpsertService<R> {
    /// Create a service that does not record metrics.
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_metrics(repository, Arc::new(NoOpCandidateUpsertMetrics))
    }
}

impl<R, M> CandidateUpsertService<R, M> {
    /// Create a service that reports outcomes to `metrics`.
    pub fn with_metrics(repository: Arc<R>, metrics: Arc<M>) -> Self {
        Self {
            repository,
            metrics,
        }
    }
}

impl<R, M> CandidateUpsertService<R, M>
where
    R: CandidateRepository,
    M: CandidateUpsertMetrics,
{
    fn map_repository_error(error: CandidateRepositoryError) -> Error {
        match error {
            CandidateRepositoryError::Connection { message } => {
                Error::internal(format!("candidate repository unavailable: {message}"))
            }
            CandidateRepositoryError::Query { message } => {
                Error::internal(format!("candidate repository error: {message}"))
            }
        }
    }

    async fn record_failure(
        &self,
        input: &CandidateInput,
        source: CandidateRepositoryError,
    ) -> Error {
        error!(email = %input.email, error = %source, "candidate upsert failed");
        if let Err(metrics_error) = self.metrics.record_failure().await {
            warn!(error = %metrics_error, "failed to record candidate upsert failure");
        }
        Self::map_repository_error(source)
    }

    async fn persist(
        &self,
        input: &CandidateInput,
    ) -> Result<UpsertOutcome, CandidateRepositoryError> {
        let existing = self.repository.find_by_email(&input.email).await?;
        let (candidate, outcome) = match existing {
            Some(stored) => (stored.merge(input), UpsertOutcome::Updated),
            None => (Candidate::from_input(input), UpsertOutcome::Created),
        };
        self.repository.save(&candidate).await?;
        Ok(outcome)
    }
}

#[async_trait]
impl<R, M> CandidateCommand for CandidateUpsertService<R, M>
where
    R: CandidateRepository,
    M: CandidateUpsertMetrics,
{
    async fn upsert(&self, input: CandidateInput) -> Result<UpsertOutcome, Error> {
        let outcome = match self.persist(&input).await {
            Ok(outcome) => outcome,
            Err(source) => return Err(self.record_failure(&input, source).await),
        };

        info!(email = %input.email, outcome = outcome.as_str(), "candidate upserted");
        if let Err(metrics_error) = self.metrics.record_success(outcome).await {
            warn!(error = %metrics_error, "failed to record candidate upsert outcome");
        }
        Ok(outcome)
    }
}

#[cfg(test)]
#[path = "candidate_service_tests.rs"]
mod tests;
