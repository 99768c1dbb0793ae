//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports ([`CandidateRepository`], [`CandidateUpsertMetrics`]) expose
//! strongly typed errors generated by `define_port_error!` so adapters map
//! their failures into predictable variants. The driving port
//! ([`CandidateCommand`]) speaks the domain [`Error`](crate::domain::Error).

mod macros;
pub(crate) use macros::define_port_error;

mod candidate_command;
mod candidate_repository;
mod candidate_upsert_metrics;

#[cfg(test)]
pub use candidate_command::MockCandidateCommand;
pub use candidate_command::{
    CANDIDATE_SAVED_MESSAGE, CandidateCommand, FixtureCandidateCommand, UpsertOutcome,
};
#[cfg(test)]
pub use candidate_repository::MockCandidateRepository;
pub use candidate_repository::{CandidateRepository, CandidateRepositoryError};
#[cfg(test)]
pub use candidate_upsert_metrics::MockCandidateUpsertMetrics;
pub use candidate_upsert_metrics::{
    CandidateUpsertMetrics, CandidateUpsertMetricsError, NoOpCandidateUpsertMetrics,
};
