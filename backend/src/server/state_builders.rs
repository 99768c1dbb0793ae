//! Builders wiring the candidate upsert service to its adapters.

use std::sync::Arc;

use actix_web::web;
use tracing::warn;

use candidate_backend::domain::CandidateUpsertService;
use candidate_backend::domain::ports::{CandidateCommand, CandidateRepository};
use candidate_backend::inbound::http::state::HttpState;
use candidate_backend::outbound::memory::InMemoryCandidateRepository;
use candidate_backend::outbound::persistence::DieselCandidateRepository;
#[cfg(feature = "metrics")]
use candidate_backend::outbound::metrics::PrometheusCandidateUpsertMetrics;

use super::ServerConfig;

/// Wrap `repository` in the upsert service, recording Prometheus counters
/// when a registry is available.
///
/// # Errors
/// Returns [`std::io::Error`] if Prometheus metric registration fails.
#[cfg(feature = "metrics")]
fn build_service<R>(
    config: &ServerConfig,
    repository: Arc<R>,
) -> std::io::Result<Arc<dyn CandidateCommand>>
where
    R: CandidateRepository + 'static,
{
    match &config.prometheus {
        Some(prom) => {
            let metrics = PrometheusCandidateUpsertMetrics::new(&prom.registry).map_err(|e| {
                std::io::Error::other(format!("candidate metrics registration failed: {e}"))
            })?;
            Ok(Arc::new(CandidateUpsertService::with_metrics(
                repository,
                Arc::new(metrics),
            )))
        }
        None => Ok(Arc::new(CandidateUpsertService::new(repository))),
    }
}

#[cfg(not(feature = "metrics"))]
fn build_service<R>(
    _config: &ServerConfig,
    repository: Arc<R>,
) -> std::io::Result<Arc<dyn CandidateCommand>>
where
    R: CandidateRepository + 'static,
{
    Ok(Arc::new(CandidateUpsertService::new(repository)))
}

/// Build the candidate command, backed by PostgreSQL when a pool is
/// configured and by process memory otherwise.
pub(super) fn build_candidate_command(
    config: &ServerConfig,
) -> std::io::Result<Arc<dyn CandidateCommand>> {
    match &config.db_pool {
        Some(pool) => build_service(
            config,
            Arc::new(DieselCandidateRepository::new(pool.clone())),
        ),
        None => {
            warn!("no database configured; candidates are stored in memory and lost on restart");
            build_service(config, Arc::new(InMemoryCandidateRepository::new()))
        }
    }
}

/// Build the shared HTTP state.
pub(super) fn build_http_state(
    candidates: Arc<dyn CandidateCommand>,
) -> web::Data<HttpState> {
    web::Data::new(HttpState::new(candidates))
}
