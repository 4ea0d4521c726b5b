//! `appointment.*` procedures.

use prosper_core::{AppointmentId, ClientId, ClinicianId};

use crate::db::RepositoryError;
use crate::error::{AppError, Result};
use crate::models::{Appointment, AppointmentWithClient, AppointmentWithClinician, NewAppointment};
use crate::store::Store;
use crate::validation::{CreateAppointmentInput, DeleteAppointmentInput, parse_date};

/// Booking, listing and cancelling appointments.
pub struct AppointmentService<'a, S> {
    store: &'a S,
}

impl<'a, S: Store> AppointmentService<'a, S> {
    #[must_use]
    pub const fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Book an appointment between an existing client and clinician.
    ///
    /// Past dates are accepted and nothing prevents double booking.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` if the date cannot be parsed.
    /// Returns `AppError::Store` with `MissingReference` if either id does not
    /// name an existing record.
    pub async fn create(&self, input: CreateAppointmentInput) -> Result<Appointment> {
        let date = parse_date(&input.date)?;

        let client_id = ClientId::parse(&input.client_id).map_err(|_| {
            RepositoryError::MissingReference(format!("client {} does not exist", input.client_id))
        })?;
        let clinician_id = ClinicianId::parse(&input.clinician_id).map_err(|_| {
            RepositoryError::MissingReference(format!(
                "clinician {} does not exist",
                input.clinician_id
            ))
        })?;

        let appointment = self
            .store
            .create_appointment(NewAppointment {
                date,
                client_id,
                clinician_id,
            })
            .await?;

        tracing::info!(
            appointment_id = %appointment.id,
            client_id = %appointment.client_id,
            clinician_id = %appointment.clinician_id,
            date = %appointment.date,
            "Appointment booked"
        );
        Ok(appointment)
    }

    /// A client's appointments with clinician details, earliest first.
    ///
    /// Unknown ids yield an empty list.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Store` if the query fails.
    pub async fn list_by_client_id(&self, client_id: &str) -> Result<Vec<AppointmentWithClinician>> {
        let Ok(client_id) = ClientId::parse(client_id) else {
            return Ok(Vec::new());
        };

        let appointments = self.store.list_appointments_for_client(client_id).await?;
        tracing::debug!(%client_id, count = appointments.len(), "Listed client appointments");
        Ok(appointments)
    }

    /// A clinician's appointments with client details, earliest first.
    ///
    /// Unknown ids yield an empty list.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Store` if the query fails.
    pub async fn list_by_clinician_id(
        &self,
        clinician_id: &str,
    ) -> Result<Vec<AppointmentWithClient>> {
        let Ok(clinician_id) = ClinicianId::parse(clinician_id) else {
            return Ok(Vec::new());
        };

        let appointments = self.store.list_appointments_for_clinician(clinician_id).await?;
        tracing::debug!(%clinician_id, count = appointments.len(), "Listed clinician appointments");
        Ok(appointments)
    }

    /// Cancel an appointment, returning it as it was before removal.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if no appointment has this id.
    /// Returns `AppError::Store` if the delete fails.
    pub async fn delete(&self, input: DeleteAppointmentInput) -> Result<Appointment> {
        let Ok(id) = AppointmentId::parse(&input.id) else {
            return Err(AppError::not_found("appointment", &input.id));
        };

        let deleted = self
            .store
            .delete_appointment(id)
            .await?
            .ok_or_else(|| AppError::not_found("appointment", &input.id))?;

        tracing::info!(appointment_id = %deleted.id, "Appointment cancelled");
        Ok(deleted)
    }
}
