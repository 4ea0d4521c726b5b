//! Domain models.
//!
//! These are the validated records returned by the store and serialized onto
//! the wire. Field names serialize in camelCase (`createdAt`, `clientId`).
//!
//! `New*` structs carry already-validated input for inserts; the store assigns
//! ids and creation timestamps.

pub mod appointment;
pub mod client;
pub mod clinician;

pub use appointment::{Appointment, AppointmentWithClient, AppointmentWithClinician, NewAppointment};
pub use client::{Client, ClientWithAppointments, NewClient};
pub use clinician::{Clinician, ClinicianWithAppointments, NewClinician};
