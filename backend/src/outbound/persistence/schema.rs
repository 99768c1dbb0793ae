//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `migrations/` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Candidate records keyed by e-mail address.
    ///
    /// `email` carries a unique constraint so concurrent upserts for the same
    /// address resolve to one row.
    candidates (id) {
        /// Surrogate primary key assigned on first insert.
        id -> Uuid,
        /// Natural key used for upsert matching.
        email -> Varchar,
        /// Given name (max 50 characters).
        first_name -> Varchar,
        /// Family name (max 50 characters).
        last_name -> Varchar,
        phone_number -> Varchar,
        /// Preferred call interval, stored as submitted.
        call_interval_time -> Varchar,
        /// LinkedIn profile URL (max 200 characters).
        linked_in_url -> Varchar,
        /// GitHub profile URL (max 200 characters).
        git_hub_url -> Varchar,
        /// Free-text notes (max 1000 characters).
        comments -> Varchar,
        created_at -> Timestamptz,
        /// Refreshed on every upsert that touches the row.
        updated_at -> Timestamptz,
    }
}
