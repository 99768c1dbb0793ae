//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the candidate upsert endpoints, the health probes and
//! the schema wrappers from [`crate::inbound::http::schemas`]. Swagger UI
//! serves the generated document at `/docs` in debug builds.

use crate::inbound::http::candidates::{CandidateRequest, CandidateSavedResponse};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Candidate backend API",
        description = "Create and update candidate records keyed by e-mail address."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::candidates::upsert_candidate,
        crate::inbound::http::candidates::patch_candidate,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        CandidateRequest,
        CandidateSavedResponse,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "candidates", description = "Candidate create and update operations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
