//! Database migration command.
//!
//! Applies the SQL files in `crates/api/migrations/` that have not yet run.
//! Migrations are embedded at compile time.

use super::{CliError, connect};

/// Run pending database migrations.
///
/// # Errors
///
/// Returns `CliError` if the database is unreachable or a migration fails.
pub async fn run() -> Result<(), CliError> {
    let store = connect().await?;

    tracing::info!("Running migrations...");
    sqlx::migrate!("../api/migrations").run(store.pool()).await?;

    tracing::info!("Migrations complete!");
    store.close().await;
    Ok(())
}
