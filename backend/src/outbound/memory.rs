//! In-process candidate store.
//!
//! Used when no database URL is configured and by behaviour tests. Records
//! live in a mutex-guarded map keyed by e-mail, so the one-record-per-address
//! rule holds by construction. The store can be switched into an unavailable
//! state to exercise storage-failure handling without a real outage.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{CandidateRepository, CandidateRepositoryError};
use crate::domain::{Candidate, Email};

/// Mutex-backed implementation of the [`CandidateRepository`] port.
#[derive(Debug, Default)]
pub struct InMemoryCandidateRepository {
    records: Mutex<HashMap<Email, Candidate>>,
    unavailable: AtomicBool,
}

impl InMemoryCandidateRepository {
    /// Create an empty, available store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail with a connection error, or recover.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::Release);
    }

    /// Number of stored records.
    ///
    /// # Errors
    ///
    /// Returns [`CandidateRepositoryError::Connection`] when the store lock is
    /// poisoned.
    pub fn len(&self) -> Result<usize, CandidateRepositoryError> {
        Ok(self.lock()?.len())
    }

    /// Whether the store holds no records.
    ///
    /// # Errors
    ///
    /// Returns [`CandidateRepositoryError::Connection`] when the store lock is
    /// poisoned.
    pub fn is_empty(&self) -> Result<bool, CandidateRepositoryError> {
        Ok(self.lock()?.is_empty())
    }

    /// Copy of the record stored under `email`, bypassing availability.
    ///
    /// # Errors
    ///
    /// Returns [`CandidateRepositoryError::Connection`] when the store lock is
    /// poisoned.
    pub fn get(&self, email: &Email) -> Result<Option<Candidate>, CandidateRepositoryError> {
        Ok(self.lock()?.get(email).cloned())
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<Email, Candidate>>, CandidateRepositoryError> {
        self.records
            .lock()
            .map_err(|_| CandidateRepositoryError::connection("in-memory store lock poisoned"))
    }

    fn ensure_available(&self) -> Result<(), CandidateRepositoryError> {
        if self.unavailable.load(Ordering::Acquire) {
            return Err(CandidateRepositoryError::connection(
                "in-memory store marked unavailable",
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl CandidateRepository for InMemoryCandidateRepository {
    async fn find_by_email(
        &self,
        email: &Email,
    ) -> Result<Option<Candidate>, CandidateRepositoryError> {
        self.ensure_available()?;
        self.get(email)
    }

    async fn save(&self, candidate: &Candidate) -> Result<(), CandidateRepositoryError> {
        self.ensure_available()?;
        self.lock()?
            .insert(candidate.email.clone(), candidate.clone());
        Ok(())
    }
}
