//! Appointment domain types.
//!
//! Appointments are immutable: they are created by a booking and removed by a
//! cancellation. There is no status field and no reschedule.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use prosper_core::{AppointmentId, ClientId, ClinicianId};

use super::{Client, Clinician};

/// A scheduled meeting between one client and one clinician.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: AppointmentId,
    /// Start time, UTC, millisecond precision.
    pub date: DateTime<Utc>,
    pub client_id: ClientId,
    pub clinician_id: ClinicianId,
}

/// Validated input for booking an appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewAppointment {
    pub date: DateTime<Utc>,
    pub client_id: ClientId,
    pub clinician_id: ClinicianId,
}

/// An appointment with its clinician attached (client-side listing).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentWithClinician {
    #[serde(flatten)]
    pub appointment: Appointment,
    pub clinician: Clinician,
}

/// An appointment with its client attached (clinician-side listing).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentWithClient {
    #[serde(flatten)]
    pub appointment: Appointment,
    pub client: Client,
}
