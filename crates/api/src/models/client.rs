//! Client domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use prosper_core::{ClientId, Email, Neurotype};

use super::Appointment;

/// A person receiving care.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    /// Unique client ID.
    pub id: ClientId,
    /// Display name.
    pub name: String,
    /// Contact email. Not unique.
    pub email: Email,
    /// Age in years.
    pub age: i32,
    pub neurotype: Neurotype,
    /// When the client signed up.
    pub created_at: DateTime<Utc>,
}

/// Validated input for inserting a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClient {
    pub name: String,
    pub email: Email,
    pub age: i32,
    pub neurotype: Neurotype,
}

/// A client together with every appointment they hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientWithAppointments {
    #[serde(flatten)]
    pub client: Client,
    /// Appointments ordered by date, earliest first.
    pub appointments: Vec<Appointment>,
}
