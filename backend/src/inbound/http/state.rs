//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on the candidate driving port and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::CandidateCommand;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub candidates: Arc<dyn CandidateCommand>,
}

impl HttpState {
    /// Construct state from the candidate upsert port.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use candidate_backend::domain::ports::FixtureCandidateCommand;
    /// use candidate_backend::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(Arc::new(FixtureCandidateCommand));
    /// let _ = state.candidates;
    /// ```
    pub fn new(candidates: Arc<dyn CandidateCommand>) -> Self {
        Self { candidates }
    }
}
