use std::sync::Arc;

use chrono::{SubsecRound, Utc};
use tokio::sync::RwLock;

use prosper_core::{AppointmentId, ClientId, ClinicianId};

use super::Store;
use crate::db::RepositoryError;
use crate::models::{
    Appointment, AppointmentWithClient, AppointmentWithClinician, Client, ClientWithAppointments,
    Clinician, ClinicianWithAppointments, NewAppointment, NewClient, NewClinician,
};

/// In-memory [`Store`] for tests and running without a database.
///
/// Rows are kept in insertion order; every read sorts a copy. Appointment
/// creation checks both references and inserts under one write lock.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

#[derive(Debug, Default)]
struct Tables {
    clients: Vec<Client>,
    clinicians: Vec<Clinician>,
    appointments: Vec<Appointment>,
}

impl Tables {
    fn client(&self, id: ClientId) -> Option<&Client> {
        self.clients.iter().find(|c| c.id == id)
    }

    fn clinician(&self, id: ClinicianId) -> Option<&Clinician> {
        self.clinicians.iter().find(|c| c.id == id)
    }

    /// Appointments matching `pred`, earliest first. Ties keep booking order.
    fn appointments_where(&self, pred: impl Fn(&Appointment) -> bool) -> Vec<Appointment> {
        let mut found: Vec<Appointment> = self
            .appointments
            .iter()
            .filter(|a| pred(a))
            .cloned()
            .collect();
        found.sort_by_key(|a| a.date);
        found
    }
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    async fn ping(&self) -> Result<(), RepositoryError> {
        Ok(())
    }

    async fn create_client(&self, client: NewClient) -> Result<Client, RepositoryError> {
        let created = Client {
            id: ClientId::generate(),
            name: client.name,
            email: client.email,
            age: client.age,
            neurotype: client.neurotype,
            // Match the microsecond resolution of a Postgres timestamptz
            created_at: Utc::now().trunc_subsecs(6),
        };
        self.tables.write().await.clients.push(created.clone());
        Ok(created)
    }

    async fn list_clients(&self) -> Result<Vec<Client>, RepositoryError> {
        let tables = self.tables.read().await;
        // Newest insert first so equal timestamps still list newest first
        let mut clients: Vec<Client> = tables.clients.iter().rev().cloned().collect();
        clients.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(clients)
    }

    async fn get_client(&self, id: ClientId) -> Result<Option<ClientWithAppointments>, RepositoryError> {
        let tables = self.tables.read().await;
        Ok(tables.client(id).map(|client| ClientWithAppointments {
            client: client.clone(),
            appointments: tables.appointments_where(|a| a.client_id == id),
        }))
    }

    async fn create_clinician(&self, clinician: NewClinician) -> Result<Clinician, RepositoryError> {
        let created = Clinician {
            id: ClinicianId::generate(),
            name: clinician.name,
            email: clinician.email,
            specialty: clinician.specialty,
        };
        self.tables.write().await.clinicians.push(created.clone());
        Ok(created)
    }

    async fn list_clinicians(&self) -> Result<Vec<Clinician>, RepositoryError> {
        let mut clinicians = self.tables.read().await.clinicians.clone();
        clinicians.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(clinicians)
    }

    async fn get_clinician(
        &self,
        id: ClinicianId,
    ) -> Result<Option<ClinicianWithAppointments>, RepositoryError> {
        let tables = self.tables.read().await;
        Ok(tables.clinician(id).map(|clinician| ClinicianWithAppointments {
            clinician: clinician.clone(),
            appointments: tables.appointments_where(|a| a.clinician_id == id),
        }))
    }

    async fn create_appointment(
        &self,
        appointment: NewAppointment,
    ) -> Result<Appointment, RepositoryError> {
        let mut tables = self.tables.write().await;

        if tables.client(appointment.client_id).is_none() {
            return Err(RepositoryError::MissingReference(format!(
                "client {} does not exist",
                appointment.client_id
            )));
        }
        if tables.clinician(appointment.clinician_id).is_none() {
            return Err(RepositoryError::MissingReference(format!(
                "clinician {} does not exist",
                appointment.clinician_id
            )));
        }

        let created = Appointment {
            id: AppointmentId::generate(),
            date: appointment.date,
            client_id: appointment.client_id,
            clinician_id: appointment.clinician_id,
        };
        tables.appointments.push(created.clone());
        Ok(created)
    }

    async fn list_appointments_for_client(
        &self,
        client_id: ClientId,
    ) -> Result<Vec<AppointmentWithClinician>, RepositoryError> {
        let tables = self.tables.read().await;
        tables
            .appointments_where(|a| a.client_id == client_id)
            .into_iter()
            .map(|appointment| {
                let clinician = tables.clinician(appointment.clinician_id).cloned().ok_or_else(|| {
                    RepositoryError::DataCorruption(format!(
                        "appointment {} references missing clinician",
                        appointment.id
                    ))
                })?;
                Ok(AppointmentWithClinician {
                    appointment,
                    clinician,
                })
            })
            .collect()
    }

    async fn list_appointments_for_clinician(
        &self,
        clinician_id: ClinicianId,
    ) -> Result<Vec<AppointmentWithClient>, RepositoryError> {
        let tables = self.tables.read().await;
        tables
            .appointments_where(|a| a.clinician_id == clinician_id)
            .into_iter()
            .map(|appointment| {
                let client = tables.client(appointment.client_id).cloned().ok_or_else(|| {
                    RepositoryError::DataCorruption(format!(
                        "appointment {} references missing client",
                        appointment.id
                    ))
                })?;
                Ok(AppointmentWithClient {
                    appointment,
                    client,
                })
            })
            .collect()
    }

    async fn delete_appointment(
        &self,
        id: AppointmentId,
    ) -> Result<Option<Appointment>, RepositoryError> {
        let mut tables = self.tables.write().await;
        let position = tables.appointments.iter().position(|a| a.id == id);
        Ok(position.map(|i| tables.appointments.remove(i)))
    }

    async fn clear(&self) -> Result<(), RepositoryError> {
        let mut tables = self.tables.write().await;
        tables.appointments.clear();
        tables.clients.clear();
        tables.clinicians.clear();
        Ok(())
    }
}
