//! Clinician domain types.

use serde::{Deserialize, Serialize};

use prosper_core::ClinicianId;

use super::Appointment;

/// A care provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Clinician {
    pub id: ClinicianId,
    pub name: String,
    pub email: String,
    /// Free-text area of practice, e.g. "Behavioral Therapy".
    pub specialty: String,
}

/// Input for inserting a clinician (CLI and seeding only).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClinician {
    pub name: String,
    pub email: String,
    pub specialty: String,
}

/// A clinician together with every appointment booked with them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClinicianWithAppointments {
    #[serde(flatten)]
    pub clinician: Clinician,
    /// Appointments ordered by date, earliest first.
    pub appointments: Vec<Appointment>,
}
