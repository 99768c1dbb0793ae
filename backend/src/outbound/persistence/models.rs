//! Internal Diesel row structs for the `candidates` table.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::Candidate;

use super::schema::candidates;

/// Row struct for reading candidate fields.
///
/// Audit columns are not selected; the domain record does not carry them.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable)]
#[diesel(table_name = candidates)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CandidateRow {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub call_interval_time: String,
    pub linked_in_url: String,
    pub git_hub_url: String,
    pub comments: String,
}

/// Insertable struct for the upsert statement.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = candidates)]
pub(crate) struct NewCandidateRow<'a> {
    pub id: Uuid,
    pub email: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub phone_number: &'a str,
    pub call_interval_time: &'a str,
    pub linked_in_url: &'a str,
    pub git_hub_url: &'a str,
    pub comments: &'a str,
}

impl<'a> NewCandidateRow<'a> {
    /// Borrow a domain record for insertion under a fresh surrogate key.
    ///
    /// When the e-mail already exists the key is discarded by the conflict
    /// clause and the stored row keeps its original id.
    pub(crate) fn from_candidate(id: Uuid, candidate: &'a Candidate) -> Self {
        Self {
            id,
            email: candidate.email.as_ref(),
            first_name: &candidate.first_name,
            last_name: &candidate.last_name,
            phone_number: &candidate.phone_number,
            call_interval_time: &candidate.call_interval_time,
            linked_in_url: &candidate.linked_in_url,
            git_hub_url: &candidate.git_hub_url,
            comments: &candidate.comments,
        }
    }
}
