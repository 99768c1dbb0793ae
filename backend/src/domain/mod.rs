//! Domain primitives, services and ports.
//!
//! Purpose: Define the candidate record, its validation rules and the upsert
//! use-case independently of HTTP and storage. Adapters depend on this module;
//! it depends on none of them.
//!
//! Public surface:
//! - Error (alias to `error::Error`): transport-agnostic error payload.
//! - ErrorCode (alias to `error::ErrorCode`): stable error identifier.
//! - Candidate / CandidateInput / Email: the stored record, the upsert
//!   payload and its natural key.
//! - validate_candidate: turns a raw submission into a `CandidateInput`.
//! - CandidateUpsertService: implementation of the `CandidateCommand` port.

pub mod candidate;
pub mod candidate_service;
pub mod candidate_validation;
pub mod error;
pub mod ports;
pub mod trace_id;

pub use self::candidate::{
    COMMENTS_MAX, Candidate, CandidateField, CandidateInput, Email, EmailValidationError,
    NAME_MAX, PROFILE_URL_MAX,
};
pub use self::candidate_service::CandidateUpsertService;
pub use self::candidate_validation::{
    CandidateSubmission, CandidateValidationErrors, ValidationMode, validate_candidate,
};
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::trace_id::TraceId;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use candidate_backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::invalid_request("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
