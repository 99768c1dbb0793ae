//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their domain counterparts and register under the
//! domain type names through utoipa's `as` attribute.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
///
/// API error response payload with machine-readable code and human-readable
/// message.
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "candidate validation failed")]
    message: String,
    /// Correlation identifier matching the `trace-id` response header.
    #[schema(example = "6f1c2b9e-3f0a-4b61-9d0e-2a7f3c1d5e40")]
    trace_id: Option<String>,
    /// Field report for validation failures.
    #[schema(example = json!({
        "code": "validation_failed",
        "fields": {"FirstName": ["The FirstName field is required."]}
    }))]
    details: Option<serde_json::Value>,
}
