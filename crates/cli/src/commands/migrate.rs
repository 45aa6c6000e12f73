//! Database migration command.
//!
//! # Usage
//!
//! ```bash
//! contacts-cli migrate
//! ```
//!
//! # Environment Variables
//!
//! - `CONTACTS_DATABASE_URL` - `PostgreSQL` connection string
//!   (falls back to `DATABASE_URL`)
//!
//! Migration files live in `crates/server/migrations/`.

use sqlx::PgPool;
use thiserror::Error;

/// Errors that can occur while running migrations.
#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Run contacts database migrations.
///
/// # Errors
///
/// Returns `MigrationError` if the database URL is missing, the
/// connection fails, or a migration fails to apply.
pub async fn run() -> Result<(), MigrationError> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("CONTACTS_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map_err(|_| MigrationError::MissingEnvVar("CONTACTS_DATABASE_URL"))?;

    tracing::info!("Connecting to contacts database...");
    let pool = PgPool::connect(&database_url).await?;

    tracing::info!("Running contacts migrations...");
    sqlx::migrate!("../server/migrations").run(&pool).await?;

    tracing::info!("Contacts migrations complete!");
    Ok(())
}
