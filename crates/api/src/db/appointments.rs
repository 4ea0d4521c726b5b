//! Appointment repository for database operations.
//!
//! Joined listings select the related row's columns under a prefix
//! (`clinician_name`, `client_age`, ...) so a single query fills both halves.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use prosper_core::{AppointmentId, ClientId, ClinicianId, Neurotype};

use super::clients::ClientRow;
use super::{RepositoryError, classify_write_error};
use crate::models::{
    Appointment, AppointmentWithClient, AppointmentWithClinician, Client, Clinician,
    NewAppointment,
};

/// Raw `appointment` row.
#[derive(Debug, sqlx::FromRow)]
struct AppointmentRow {
    id: AppointmentId,
    date: DateTime<Utc>,
    client_id: ClientId,
    clinician_id: ClinicianId,
}

impl From<AppointmentRow> for Appointment {
    fn from(row: AppointmentRow) -> Self {
        Self {
            id: row.id,
            date: row.date,
            client_id: row.client_id,
            clinician_id: row.clinician_id,
        }
    }
}

/// Appointment joined with its clinician.
#[derive(Debug, sqlx::FromRow)]
struct AppointmentClinicianRow {
    #[sqlx(flatten)]
    appointment: AppointmentRow,
    clinician_name: String,
    clinician_email: String,
    clinician_specialty: String,
}

/// Appointment joined with its client.
#[derive(Debug, sqlx::FromRow)]
struct AppointmentClientRow {
    #[sqlx(flatten)]
    appointment: AppointmentRow,
    client_name: String,
    client_email: String,
    client_age: i32,
    client_neurotype: Neurotype,
    client_created_at: DateTime<Utc>,
}

/// Repository for appointment database operations.
pub struct AppointmentRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AppointmentRepository<'a> {
    /// Create a new appointment repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Book an appointment.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::MissingReference` if the client or clinician
    /// does not exist; nothing is inserted in that case.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(&self, appointment: &NewAppointment) -> Result<Appointment, RepositoryError> {
        let row = sqlx::query_as::<_, AppointmentRow>(
            r"
            INSERT INTO appointment (id, date, client_id, clinician_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, date, client_id, clinician_id
            ",
        )
        .bind(AppointmentId::generate())
        .bind(appointment.date)
        .bind(appointment.client_id)
        .bind(appointment.clinician_id)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            classify_write_error(e, |constraint| match constraint {
                Some("appointment_clinician_id_fkey") => {
                    format!("clinician {} does not exist", appointment.clinician_id)
                }
                Some("appointment_client_id_fkey") => {
                    format!("client {} does not exist", appointment.client_id)
                }
                _ => "appointment references a missing client or clinician".to_owned(),
            })
        })?;

        Ok(row.into())
    }

    /// A client's appointments, earliest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_for_client(&self, client_id: ClientId) -> Result<Vec<Appointment>, RepositoryError> {
        let rows = sqlx::query_as::<_, AppointmentRow>(
            r"
            SELECT id, date, client_id, clinician_id
            FROM appointment
            WHERE client_id = $1
            ORDER BY date ASC
            ",
        )
        .bind(client_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Appointment::from).collect())
    }

    /// A clinician's appointments, earliest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_for_clinician(
        &self,
        clinician_id: ClinicianId,
    ) -> Result<Vec<Appointment>, RepositoryError> {
        let rows = sqlx::query_as::<_, AppointmentRow>(
            r"
            SELECT id, date, client_id, clinician_id
            FROM appointment
            WHERE clinician_id = $1
            ORDER BY date ASC
            ",
        )
        .bind(clinician_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Appointment::from).collect())
    }

    /// A client's appointments with clinician details, earliest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_for_client_with_clinician(
        &self,
        client_id: ClientId,
    ) -> Result<Vec<AppointmentWithClinician>, RepositoryError> {
        let rows = sqlx::query_as::<_, AppointmentClinicianRow>(
            r"
            SELECT a.id, a.date, a.client_id, a.clinician_id,
                   c.name AS clinician_name,
                   c.email AS clinician_email,
                   c.specialty AS clinician_specialty
            FROM appointment a
            JOIN clinician c ON c.id = a.clinician_id
            WHERE a.client_id = $1
            ORDER BY a.date ASC
            ",
        )
        .bind(client_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| AppointmentWithClinician {
                clinician: Clinician {
                    id: r.appointment.clinician_id,
                    name: r.clinician_name,
                    email: r.clinician_email,
                    specialty: r.clinician_specialty,
                },
                appointment: r.appointment.into(),
            })
            .collect())
    }

    /// A clinician's appointments with client details, earliest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a stored client email is invalid.
    pub async fn list_for_clinician_with_client(
        &self,
        clinician_id: ClinicianId,
    ) -> Result<Vec<AppointmentWithClient>, RepositoryError> {
        let rows = sqlx::query_as::<_, AppointmentClientRow>(
            r"
            SELECT a.id, a.date, a.client_id, a.clinician_id,
                   c.name AS client_name,
                   c.email AS client_email,
                   c.age AS client_age,
                   c.neurotype AS client_neurotype,
                   c.created_at AS client_created_at
            FROM appointment a
            JOIN client c ON c.id = a.client_id
            WHERE a.clinician_id = $1
            ORDER BY a.date ASC
            ",
        )
        .bind(clinician_id)
        .fetch_all(self.pool)
        .await?;

        rows.into_iter()
            .map(|r| {
                let client = Client::try_from(ClientRow {
                    id: r.appointment.client_id,
                    name: r.client_name,
                    email: r.client_email,
                    age: r.client_age,
                    neurotype: r.client_neurotype,
                    created_at: r.client_created_at,
                })?;
                Ok(AppointmentWithClient {
                    appointment: r.appointment.into(),
                    client,
                })
            })
            .collect()
    }

    /// Delete an appointment, returning the row as it was.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: AppointmentId) -> Result<Option<Appointment>, RepositoryError> {
        let row = sqlx::query_as::<_, AppointmentRow>(
            r"
            DELETE FROM appointment
            WHERE id = $1
            RETURNING id, date, client_id, clinician_id
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Appointment::from))
    }
}
