//! Driving port for candidate upserts.
//!
//! Inbound adapters validate a submission, then hand the resulting
//! [`CandidateInput`] to a [`CandidateCommand`]. The command decides whether
//! the record is created or updated and reports which happened.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{CandidateInput, Error};

/// Confirmation returned to callers after any successful upsert.
pub const CANDIDATE_SAVED_MESSAGE: &str = "Candidate added/updated successfully.";

/// What a successful upsert did to storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpsertOutcome {
    /// No record existed for the e-mail address.
    Created,
    /// An existing record was merged and rewritten.
    Updated,
}

impl UpsertOutcome {
    /// Label used in logs and metrics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
        }
    }

    /// Caller-facing confirmation. Identical for both outcomes.
    pub const fn message(self) -> &'static str {
        CANDIDATE_SAVED_MESSAGE
    }
}

/// Driving port for the candidate upsert use-case.
///
/// # Errors
///
/// Implementations return [`Error::internal`] when storage cannot be read or
/// written. They do not re-validate the input.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CandidateCommand: Send + Sync {
    /// Create or merge the candidate keyed by `input.email`.
    async fn upsert(&self, input: CandidateInput) -> Result<UpsertOutcome, Error>;
}

/// Fixture implementation for wiring tests.
///
/// Reports every upsert as [`UpsertOutcome::Created`] without storing
/// anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCandidateCommand;

#[async_trait]
impl CandidateCommand for FixtureCandidateCommand {
    async fn upsert(&self, _input: CandidateInput) -> Result<UpsertOutcome, Error> {
        Ok(UpsertOutcome::Created)
    }
}
