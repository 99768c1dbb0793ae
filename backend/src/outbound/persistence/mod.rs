//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repository implementations only translate between Diesel rows and domain
//! types. Row structs (`models.rs`) and table definitions (`schema.rs`) stay
//! private to this module, and every database error is mapped to the port's
//! error type before it leaves.
//!
//! # Example
//!
//! ```no_run
//! use candidate_backend::outbound::persistence::{
//!     DbPool, DieselCandidateRepository, PoolConfig,
//! };
//!
//! # async fn connect() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/candidates")).await?;
//! let repo = DieselCandidateRepository::new(pool);
//! # let _ = repo;
//! # Ok(())
//! # }
//! ```

mod diesel_basic_error_mapping;
mod diesel_candidate_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_candidate_repository::DieselCandidateRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{
    DEFAULT_CONNECTION_TIMEOUT, DEFAULT_MAX_SIZE, DbPool, PoolConfig, PoolError,
};
