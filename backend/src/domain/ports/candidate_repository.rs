//! Port abstraction for candidate persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{Candidate, Email};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by candidate repository adapters.
    pub enum CandidateRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "candidate repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "candidate repository query failed: {message}",
    }
}

/// Driven port for candidate storage.
///
/// Implementations must keep at most one record per e-mail address: `save`
/// inserts a new record or replaces the one already stored under the same key.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CandidateRepository: Send + Sync {
    /// Fetch the candidate stored under `email`, if any.
    async fn find_by_email(
        &self,
        email: &Email,
    ) -> Result<Option<Candidate>, CandidateRepositoryError>;

    /// Insert or replace the candidate keyed by its e-mail address.
    async fn save(&self, candidate: &Candidate) -> Result<(), CandidateRepositoryError>;
}
