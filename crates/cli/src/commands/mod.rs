//! Subcommand implementations.

pub mod clinician;
pub mod migrate;
pub mod seed;

use prosper_api::config::{self, ConfigError};
use prosper_api::db::{self, PgStore};
use prosper_api::error::AppError;
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Required environment variable is missing or invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Database connection error.
    #[error("Database connection error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration failed.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A store operation or input check failed.
    #[error(transparent)]
    App(#[from] AppError),
}

/// Connect to the configured database.
async fn connect() -> Result<PgStore, CliError> {
    let database_url = config::database_url_from_env()?;

    tracing::info!("Connecting to database...");
    let pool = db::create_pool(&database_url).await?;
    Ok(PgStore::new(pool))
}
