//! Candidate backend library modules.
//!
//! The crate follows a hexagonal layout: [`domain`] holds the candidate
//! record, validation and the upsert service; [`inbound`] adapts HTTP
//! requests onto the domain; [`outbound`] provides storage and metrics.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
