//! `clinician.*` procedures.

use prosper_core::ClinicianId;

use crate::error::{AppError, Result};
use crate::models::{Clinician, ClinicianWithAppointments};
use crate::store::Store;
use crate::validation::{CreateClinicianInput, validate_create_clinician};

/// Clinician directory.
pub struct ClinicianService<'a, S> {
    store: &'a S,
}

impl<'a, S: Store> ClinicianService<'a, S> {
    #[must_use]
    pub const fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Register a clinician.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` if the input is malformed.
    /// Returns `AppError::Store` if the insert fails.
    pub async fn create(&self, input: CreateClinicianInput) -> Result<Clinician> {
        let new_clinician = validate_create_clinician(input)?;
        let clinician = self.store.create_clinician(new_clinician).await?;

        tracing::info!(clinician_id = %clinician.id, "Clinician registered");
        Ok(clinician)
    }

    /// Every clinician ordered by name.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Store` if the query fails.
    pub async fn list(&self) -> Result<Vec<Clinician>> {
        let clinicians = self.store.list_clinicians().await?;
        tracing::debug!(count = clinicians.len(), "Listed clinicians");
        Ok(clinicians)
    }

    /// A clinician with their appointments.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if no clinician has this id.
    /// Returns `AppError::Store` if the query fails.
    pub async fn get_by_id(&self, id: &str) -> Result<ClinicianWithAppointments> {
        let Ok(clinician_id) = ClinicianId::parse(id) else {
            return Err(AppError::not_found("clinician", id));
        };

        self.store
            .get_clinician(clinician_id)
            .await?
            .ok_or_else(|| AppError::not_found("clinician", id))
    }
}
