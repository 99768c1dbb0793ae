//! PostgreSQL-backed `CandidateRepository` implementation using Diesel ORM.
//!
//! `save` is a single `INSERT ... ON CONFLICT (email) DO UPDATE`, so two
//! concurrent writers for one address converge on one row and the last write
//! wins.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::upsert::excluded;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{CandidateRepository, CandidateRepositoryError};
use crate::domain::{Candidate, Email};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{CandidateRow, NewCandidateRow};
use super::pool::{DbPool, PoolError};
use super::schema::candidates;

/// Diesel-backed implementation of the [`CandidateRepository`] port.
#[derive(Clone)]
pub struct DieselCandidateRepository {
    pool: DbPool,
}

impl DieselCandidateRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> CandidateRepositoryError {
    map_basic_pool_error(error, |message| {
        CandidateRepositoryError::connection(message)
    })
}

fn map_diesel_error(error: diesel::result::Error) -> CandidateRepositoryError {
    map_basic_diesel_error(
        error,
        |message| CandidateRepositoryError::query(message),
        |message| CandidateRepositoryError::connection(message),
    )
}

/// Convert a database row into a domain record.
fn row_to_candidate(row: CandidateRow) -> Result<Candidate, CandidateRepositoryError> {
    let email = Email::new(row.email).map_err(|err| {
        CandidateRepositoryError::query(format!("stored candidate email is invalid: {err}"))
    })?;
    Ok(Candidate {
        email,
        first_name: row.first_name,
        last_name: row.last_name,
        phone_number: row.phone_number,
        call_interval_time: row.call_interval_time,
        linked_in_url: row.linked_in_url,
        git_hub_url: row.git_hub_url,
        comments: row.comments,
    })
}

#[async_trait]
impl CandidateRepository for DieselCandidateRepository {
    async fn find_by_email(
        &self,
        email: &Email,
    ) -> Result<Option<Candidate>, CandidateRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<CandidateRow> = candidates::table
            .filter(candidates::email.eq(email.as_ref()))
            .select(CandidateRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_candidate).transpose()
    }

    async fn save(&self, candidate: &Candidate) -> Result<(), CandidateRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewCandidateRow::from_candidate(Uuid::new_v4(), candidate);

        diesel::insert_into(candidates::table)
            .values(&row)
            .on_conflict(candidates::email)
            .do_update()
            .set((
                candidates::first_name.eq(excluded(candidates::first_name)),
                candidates::last_name.eq(excluded(candidates::last_name)),
                candidates::phone_number.eq(excluded(candidates::phone_number)),
                candidates::call_interval_time.eq(excluded(candidates::call_interval_time)),
                candidates::linked_in_url.eq(excluded(candidates::linked_in_url)),
                candidates::git_hub_url.eq(excluded(candidates::git_hub_url)),
                candidates::comments.eq(excluded(candidates::comments)),
                candidates::updated_at.eq(diesel::dsl::now),
            ))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }
}
