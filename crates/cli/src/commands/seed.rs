//! Seed the database with the demo data set.
//!
//! Destructive: every appointment, client and clinician is deleted first.

use chrono::Utc;
use prosper_api::seed::seed_demo_data;

use super::{CliError, connect};

/// Replace all data with the demo data set.
///
/// # Errors
///
/// Returns `CliError` if the database is unreachable or any insert fails.
pub async fn run() -> Result<(), CliError> {
    let store = connect().await?;

    let summary = seed_demo_data(&store, Utc::now()).await?;

    #[allow(clippy::print_stdout)]
    {
        println!(
            "Seeded {} clients, {} clinicians and {} appointments",
            summary.clients, summary.clinicians, summary.appointments
        );
    }

    store.close().await;
    Ok(())
}
