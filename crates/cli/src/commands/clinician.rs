//! Clinician management commands.
//!
//! Clinicians cannot sign up through the API; operators add them here.

use prosper_api::services::ClinicianService;
use prosper_api::validation::CreateClinicianInput;

use super::{CliError, connect};

/// Register a new clinician and print its id.
///
/// # Errors
///
/// Returns `CliError` if the input is invalid or the insert fails.
pub async fn create(name: String, email: String, specialty: String) -> Result<(), CliError> {
    let store = connect().await?;

    let clinician = ClinicianService::new(&store)
        .create(CreateClinicianInput {
            name,
            email,
            specialty,
        })
        .await?;

    #[allow(clippy::print_stdout)]
    {
        println!("Created clinician {} ({})", clinician.name, clinician.id);
    }

    store.close().await;
    Ok(())
}
