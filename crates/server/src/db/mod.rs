//! Database operations for the contacts `PostgreSQL` database.
//!
//! ## Tables
//!
//! - `person` - Contact records (soft-deleted rows stay in place)
//!
//! # Migrations
//!
//! Migrations are stored in `crates/server/migrations/` and run via:
//! ```bash
//! cargo run -p contacts-cli -- migrate
//! ```
//!
//! The [`PersonStore`] trait abstracts the storage backend so the service
//! layer never sees a concrete database. [`PgPersonStore`] backs it with
//! Postgres; [`InMemoryPersonStore`] backs it with a map for tests.

pub mod memory;
pub mod person;

use std::time::Duration;

use async_trait::async_trait;
use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

use contacts_core::PersonId;

use crate::models::{NewPerson, Person};

pub use memory::InMemoryPersonStore;
pub use person::PgPersonStore;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,
}

/// Storage backend for person records.
///
/// All lookups operate on the full record set including soft-deleted rows;
/// only [`find_all`](Self::find_all) filters them out.
#[async_trait]
pub trait PersonStore: Send + Sync {
    /// Look up a person by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    async fn find_by_id(&self, id: PersonId) -> Result<Option<Person>, RepositoryError>;

    /// Insert a new person. The stored record starts with `deleted = false`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    async fn insert(&self, person: NewPerson) -> Result<Person, RepositoryError>;

    /// Overwrite an existing person.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no record has `person.id`.
    /// Returns `RepositoryError::Database` for other database errors.
    async fn update(&self, person: &Person) -> Result<Person, RepositoryError>;

    /// List all persons that are not soft-deleted, ordered by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    async fn find_all(&self) -> Result<Vec<Person>, RepositoryError>;

    /// List all persons including soft-deleted ones, ordered by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    async fn find_all_including_deleted(&self) -> Result<Vec<Person>, RepositoryError>;

    /// Verify the backend is reachable. Used by the readiness probe.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the backend is unreachable.
    async fn ping(&self) -> Result<(), RepositoryError>;
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
