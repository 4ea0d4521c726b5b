//! Procedure input shapes and their validation.
//!
//! Each mutation has a raw input struct deserialized from the request and a
//! validation function that turns it into a typed insert, or a
//! [`ValidationError`] naming the first rule it breaks. Validation never
//! touches the store.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, SubsecRound, Utc};
use serde::Deserialize;
use serde_json::Number;
use thiserror::Error;

use prosper_core::{Email, EmailError, Neurotype, NeurotypeError};

use crate::models::{NewClient, NewClinician};

/// Longest accepted client name, in characters.
pub const MAX_NAME_LENGTH: usize = 200;
/// Youngest accepted client age.
pub const MIN_AGE: i64 = 1;
/// Oldest accepted client age.
pub const MAX_AGE: i64 = 120;

/// Input rejected before reaching the store.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The request body or query input could not be decoded.
    #[error("invalid input: {0}")]
    MalformedInput(String),

    #[error("name cannot be empty")]
    EmptyName,

    #[error("name must be at most {max} characters")]
    NameTooLong { max: usize },

    #[error("invalid email: {0}")]
    Email(#[from] EmailError),

    #[error("age must be an integer")]
    AgeNotInteger,

    #[error("age must be between {min} and {max} (got {got})")]
    AgeOutOfRange { min: i64, max: i64, got: i64 },

    #[error(transparent)]
    Neurotype(#[from] NeurotypeError),

    #[error("specialty cannot be empty")]
    EmptySpecialty,

    #[error("invalid date {0:?}: expected an ISO 8601 date or date-time")]
    InvalidDate(String),
}

/// `client.create` input.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateClientInput {
    pub name: String,
    pub email: String,
    /// Kept as a JSON number so non-integers surface as a validation error.
    pub age: Number,
    pub neurotype: String,
}

/// Clinician registration input. Clinicians are added by operators, not
/// through the RPC surface.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateClinicianInput {
    pub name: String,
    pub email: String,
    pub specialty: String,
}

/// `appointment.create` input.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentInput {
    /// ISO 8601 date-time.
    pub date: String,
    pub client_id: String,
    pub clinician_id: String,
}

/// `appointment.delete` input.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteAppointmentInput {
    pub id: String,
}

/// Validate a `client.create` request.
///
/// # Errors
///
/// Returns the first [`ValidationError`] found, checking name, email, age and
/// neurotype in that order.
pub fn validate_create_client(input: CreateClientInput) -> Result<NewClient, ValidationError> {
    let name = validate_name(&input.name)?;
    let email = Email::parse(&input.email)?;
    let age = validate_age(&input.age)?;
    let neurotype = input.neurotype.parse::<Neurotype>()?;

    Ok(NewClient {
        name,
        email,
        age,
        neurotype,
    })
}

/// Validate a clinician registration.
///
/// # Errors
///
/// Returns the first [`ValidationError`] found, checking name, email and
/// specialty in that order.
pub fn validate_create_clinician(
    input: CreateClinicianInput,
) -> Result<NewClinician, ValidationError> {
    let name = validate_name(&input.name)?;
    let email = Email::parse(&input.email)?;
    let specialty = input.specialty.trim();
    if specialty.is_empty() {
        return Err(ValidationError::EmptySpecialty);
    }

    Ok(NewClinician {
        name,
        email: email.into_inner(),
        specialty: specialty.to_owned(),
    })
}

/// Trim a display name and check its length.
///
/// # Errors
///
/// Returns `EmptyName` or `NameTooLong`.
pub fn validate_name(raw: &str) -> Result<String, ValidationError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::NameTooLong {
            max: MAX_NAME_LENGTH,
        });
    }
    Ok(name.to_owned())
}

/// Check that an age is a whole number within [`MIN_AGE`]..=[`MAX_AGE`].
///
/// Floats with no fractional part (`32.0`) are accepted.
///
/// # Errors
///
/// Returns `AgeNotInteger` or `AgeOutOfRange`.
pub fn validate_age(raw: &Number) -> Result<i32, ValidationError> {
    let age = raw
        .as_i64()
        .or_else(|| raw.as_f64().and_then(whole_number))
        .ok_or(ValidationError::AgeNotInteger)?;

    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        return Err(ValidationError::AgeOutOfRange {
            min: MIN_AGE,
            max: MAX_AGE,
            got: age,
        });
    }

    i32::try_from(age).map_err(|_| ValidationError::AgeOutOfRange {
        min: MIN_AGE,
        max: MAX_AGE,
        got: age,
    })
}

// Out-of-range floats saturate and are caught by the range check.
#[allow(clippy::cast_possible_truncation)]
fn whole_number(value: f64) -> Option<i64> {
    (value.is_finite() && value.fract() == 0.0).then(|| value as i64)
}

/// Parse an appointment date into a UTC instant with millisecond precision.
///
/// Accepted forms:
/// - RFC 3339 with an offset (`2030-05-01T14:30:00.000Z`, `2030-05-01T09:30:00-05:00`)
/// - a local date-time without offset (`2030-05-01T14:30`, `2030-05-01T14:30:00.5`), read as UTC
/// - a bare date (`2030-05-01`), read as UTC midnight
///
/// # Errors
///
/// Returns `InvalidDate` carrying the original input.
pub fn parse_date(raw: &str) -> Result<DateTime<Utc>, ValidationError> {
    let s = raw.trim();

    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f").map(|n| n.and_utc()))
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M").map(|n| n.and_utc()))
        .or_else(|_| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .map(|d| d.and_time(NaiveTime::default()).and_utc())
        })
        .map(|dt| dt.trunc_subsecs(3))
        .map_err(|_| ValidationError::InvalidDate(raw.to_owned()))
}
