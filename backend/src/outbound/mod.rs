//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL-backed candidate repository using Diesel ORM
//! - **memory**: in-process candidate store used without a database
//! - **metrics**: Prometheus-backed metrics exporters (feature-gated)
//!
//! Adapters are thin translators between domain types and infrastructure
//! representations. They contain no business logic.

pub mod memory;
#[cfg(feature = "metrics")]
pub mod metrics;
pub mod persistence;
