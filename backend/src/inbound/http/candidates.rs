//! Candidate upsert API handlers.
//!
//! ```text
//! POST /api/v1/candidates {"email":"jane@example.com","firstName":"Jane",...}
//! PATCH /api/v1/candidates {"email":"jane@example.com","phoneNumber":"9999999999"}
//! ```
//!
//! `POST` expects a complete submission. `PATCH` only requires the e-mail key
//! and leaves empty or missing fields untouched on the stored record.

use actix_web::{HttpResponse, patch, post, web};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use crate::domain::{CandidateSubmission, ValidationMode, validate_candidate};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::candidate_validation_error;

/// Request body for candidate upserts.
///
/// Every property is optional at the JSON level; which ones are required
/// depends on the endpoint. `null` is treated the same as an absent property.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CandidateRequest {
    #[schema(example = "john.doe@example.com")]
    pub email: Option<String>,
    #[schema(example = "John", max_length = 50)]
    pub first_name: Option<String>,
    #[schema(example = "Doe", max_length = 50)]
    pub last_name: Option<String>,
    #[schema(example = "1234567890")]
    pub phone_number: Option<String>,
    /// Preferred call interval in minutes, as a string of digits.
    #[schema(example = "30")]
    pub call_interval_time: Option<String>,
    #[schema(example = "https://linkedin.com/johndoe", max_length = 200)]
    pub linked_in_url: Option<String>,
    #[schema(example = "https://github.com/johndoe", max_length = 200)]
    pub git_hub_url: Option<String>,
    #[schema(example = "New candidate", max_length = 1000)]
    pub comments: Option<String>,
}

impl From<CandidateRequest> for CandidateSubmission {
    fn from(value: CandidateRequest) -> Self {
        Self {
            email: value.email,
            first_name: value.first_name,
            last_name: value.last_name,
            phone_number: value.phone_number,
            call_interval_time: value.call_interval_time,
            linked_in_url: value.linked_in_url,
            git_hub_url: value.git_hub_url,
            comments: value.comments,
        }
    }
}

/// Confirmation body returned by both upsert endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct CandidateSavedResponse {
    #[schema(example = "Candidate added/updated successfully.")]
    pub message: String,
}

async fn handle_upsert(
    state: &HttpState,
    payload: CandidateRequest,
    mode: ValidationMode,
) -> ApiResult<HttpResponse> {
    let input = validate_candidate(payload.into(), mode).map_err(|errors| {
        debug!(?mode, failures = errors.len(), "candidate submission rejected");
        candidate_validation_error(&errors)
    })?;
    let outcome = state.candidates.upsert(input).await?;
    Ok(HttpResponse::Ok().json(CandidateSavedResponse {
        message: outcome.message().to_owned(),
    }))
}

/// Create a candidate or replace every field of an existing one.
///
/// The e-mail address identifies the record. All fields are required and
/// `callIntervalTime` must be numeric.
#[utoipa::path(
    post,
    path = "/api/v1/candidates",
    request_body = CandidateRequest,
    responses(
        (status = 200, description = "Candidate saved", body = CandidateSavedResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["candidates"],
    operation_id = "upsertCandidate"
)]
#[post("/candidates")]
pub async fn upsert_candidate(
    state: web::Data<HttpState>,
    payload: web::Json<CandidateRequest>,
) -> ApiResult<HttpResponse> {
    handle_upsert(&state, payload.into_inner(), ValidationMode::Full).await
}

/// Create or partially update a candidate.
///
/// Only the e-mail address is required. Empty or missing fields keep their
/// stored values.
#[utoipa::path(
    patch,
    path = "/api/v1/candidates",
    request_body = CandidateRequest,
    responses(
        (status = 200, description = "Candidate saved", body = CandidateSavedResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["candidates"],
    operation_id = "patchCandidate"
)]
#[patch("/candidates")]
pub async fn patch_candidate(
    state: web::Data<HttpState>,
    payload: web::Json<CandidateRequest>,
) -> ApiResult<HttpResponse> {
    handle_upsert(&state, payload.into_inner(), ValidationMode::Partial).await
}

#[cfg(test)]
#[path = "candidates_tests.rs"]
mod tests;
