//! Store access.
//!
//! Every procedure reaches the data through a [`Store`] handle that is created
//! at start-up and passed in through [`AppState`](crate::state::AppState).
//! Two implementations exist:
//!
//! - [`PgStore`](crate::db::PgStore) - `PostgreSQL` via sqlx (production)
//! - [`MemoryStore`] - in-process tables (tests, local development)
//!
//! Each method is a single store operation. Implementations must uphold:
//!
//! - referential integrity: `create_appointment` fails with
//!   [`RepositoryError::MissingReference`] and persists nothing when either
//!   referenced id is unknown
//! - ordering: clients by `created_at` descending, clinicians by name
//!   ascending in byte order (uppercase before lowercase), appointments by
//!   date ascending

mod memory;

pub use memory::MemoryStore;

use prosper_core::{AppointmentId, ClientId, ClinicianId};

use crate::db::RepositoryError;
use crate::models::{
    Appointment, AppointmentWithClient, AppointmentWithClinician, Client, ClientWithAppointments,
    Clinician, ClinicianWithAppointments, NewAppointment, NewClient, NewClinician,
};

/// Data access used by the procedure layer.
pub trait Store: Clone + Send + Sync + 'static {
    /// Check that the store is reachable.
    fn ping(&self) -> impl Future<Output = Result<(), RepositoryError>> + Send;

    /// Insert a client, assigning its id and creation time.
    fn create_client(
        &self,
        client: NewClient,
    ) -> impl Future<Output = Result<Client, RepositoryError>> + Send;

    /// All clients, most recently created first.
    fn list_clients(&self) -> impl Future<Output = Result<Vec<Client>, RepositoryError>> + Send;

    /// A client and their appointments, or `None` if the id is unknown.
    fn get_client(
        &self,
        id: ClientId,
    ) -> impl Future<Output = Result<Option<ClientWithAppointments>, RepositoryError>> + Send;

    /// Insert a clinician, assigning its id.
    fn create_clinician(
        &self,
        clinician: NewClinician,
    ) -> impl Future<Output = Result<Clinician, RepositoryError>> + Send;

    /// All clinicians ordered by name, compared byte-wise.
    fn list_clinicians(
        &self,
    ) -> impl Future<Output = Result<Vec<Clinician>, RepositoryError>> + Send;

    /// A clinician and their appointments, or `None` if the id is unknown.
    fn get_clinician(
        &self,
        id: ClinicianId,
    ) -> impl Future<Output = Result<Option<ClinicianWithAppointments>, RepositoryError>> + Send;

    /// Book an appointment.
    fn create_appointment(
        &self,
        appointment: NewAppointment,
    ) -> impl Future<Output = Result<Appointment, RepositoryError>> + Send;

    /// A client's appointments with clinician details, earliest first.
    fn list_appointments_for_client(
        &self,
        client_id: ClientId,
    ) -> impl Future<Output = Result<Vec<AppointmentWithClinician>, RepositoryError>> + Send;

    /// A clinician's appointments with client details, earliest first.
    fn list_appointments_for_clinician(
        &self,
        clinician_id: ClinicianId,
    ) -> impl Future<Output = Result<Vec<AppointmentWithClient>, RepositoryError>> + Send;

    /// Delete an appointment, returning its prior state, or `None` if absent.
    fn delete_appointment(
        &self,
        id: AppointmentId,
    ) -> impl Future<Output = Result<Option<Appointment>, RepositoryError>> + Send;

    /// Remove every appointment, client and clinician.
    fn clear(&self) -> impl Future<Output = Result<(), RepositoryError>> + Send;
}
