//! Procedure implementations.
//!
//! One service per RPC namespace. A service borrows the store for the length
//! of a single call, validates its input, performs one store operation and
//! maps the outcome onto [`AppError`](crate::error::AppError).
//!
//! Ids arrive as strings. A string that is not a UUID cannot name a record,
//! so it is handled exactly like an unknown id.

mod appointment;
mod client;
mod clinician;

pub use appointment::AppointmentService;
pub use client::ClientService;
pub use clinician::ClinicianService;
