//! Database operations for the Prosper `PostgreSQL` database.
//!
//! ## Tables
//!
//! - `client` - People who signed up for care
//! - `clinician` - Care providers
//! - `appointment` - Bookings, with foreign keys to `client` and `clinician`
//!
//! # Migrations
//!
//! Migrations are stored in `crates/api/migrations/` and run via:
//! ```bash
//! cargo run -p prosper-cli -- migrate
//! ```
//!
//! Queries are built at runtime with `query_as` so the crate compiles without
//! a live database.

pub mod appointments;
pub mod clients;
pub mod clinicians;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

use prosper_core::{AppointmentId, ClientId, ClinicianId};

pub use appointments::AppointmentRepository;
pub use clients::ClientRepository;
pub use clinicians::ClinicianRepository;

use crate::models::{
    Appointment, AppointmentWithClient, AppointmentWithClinician, Client, ClientWithAppointments,
    Clinician, ClinicianWithAppointments, NewAppointment, NewClient, NewClinician,
};
use crate::store::Store;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Constraint violation (e.g., a unique index).
    #[error("constraint violation: {0}")]
    Conflict(String),

    /// A foreign key points at a row that does not exist.
    #[error("referential integrity violation: {0}")]
    MissingReference(String),
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

/// Map an insert failure onto the repository taxonomy.
fn classify_write_error(e: sqlx::Error, what: impl FnOnce(Option<&str>) -> String) -> RepositoryError {
    if let sqlx::Error::Database(ref db_err) = e {
        if db_err.is_foreign_key_violation() {
            return RepositoryError::MissingReference(what(db_err.constraint()));
        }
        if db_err.is_unique_violation() {
            return RepositoryError::Conflict(db_err.message().to_owned());
        }
    }
    RepositoryError::Database(e)
}

/// [`Store`] backed by a `PostgreSQL` pool.
///
/// Cloning is cheap; all clones share the pool.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Close every pooled connection. Called once on shutdown.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

impl Store for PgStore {
    async fn ping(&self) -> Result<(), RepositoryError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn create_client(&self, client: NewClient) -> Result<Client, RepositoryError> {
        ClientRepository::new(&self.pool).create(&client).await
    }

    async fn list_clients(&self) -> Result<Vec<Client>, RepositoryError> {
        ClientRepository::new(&self.pool).list().await
    }

    async fn get_client(&self, id: ClientId) -> Result<Option<ClientWithAppointments>, RepositoryError> {
        let Some(client) = ClientRepository::new(&self.pool).get_by_id(id).await? else {
            return Ok(None);
        };
        let appointments = AppointmentRepository::new(&self.pool)
            .list_for_client(id)
            .await?;
        Ok(Some(ClientWithAppointments {
            client,
            appointments,
        }))
    }

    async fn create_clinician(&self, clinician: NewClinician) -> Result<Clinician, RepositoryError> {
        ClinicianRepository::new(&self.pool).create(&clinician).await
    }

    async fn list_clinicians(&self) -> Result<Vec<Clinician>, RepositoryError> {
        ClinicianRepository::new(&self.pool).list().await
    }

    async fn get_clinician(
        &self,
        id: ClinicianId,
    ) -> Result<Option<ClinicianWithAppointments>, RepositoryError> {
        let Some(clinician) = ClinicianRepository::new(&self.pool).get_by_id(id).await? else {
            return Ok(None);
        };
        let appointments = AppointmentRepository::new(&self.pool)
            .list_for_clinician(id)
            .await?;
        Ok(Some(ClinicianWithAppointments {
            clinician,
            appointments,
        }))
    }

    async fn create_appointment(
        &self,
        appointment: NewAppointment,
    ) -> Result<Appointment, RepositoryError> {
        AppointmentRepository::new(&self.pool)
            .create(&appointment)
            .await
    }

    async fn list_appointments_for_client(
        &self,
        client_id: ClientId,
    ) -> Result<Vec<AppointmentWithClinician>, RepositoryError> {
        AppointmentRepository::new(&self.pool)
            .list_for_client_with_clinician(client_id)
            .await
    }

    async fn list_appointments_for_clinician(
        &self,
        clinician_id: ClinicianId,
    ) -> Result<Vec<AppointmentWithClient>, RepositoryError> {
        AppointmentRepository::new(&self.pool)
            .list_for_clinician_with_client(clinician_id)
            .await
    }

    async fn delete_appointment(
        &self,
        id: AppointmentId,
    ) -> Result<Option<Appointment>, RepositoryError> {
        AppointmentRepository::new(&self.pool).delete(id).await
    }

    async fn clear(&self) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("DELETE FROM appointment").execute(&mut *tx).await?;
        sqlx::query("DELETE FROM client").execute(&mut *tx).await?;
        sqlx::query("DELETE FROM clinician").execute(&mut *tx).await?;
        tx.commit().await?;
        Ok(())
    }
}
