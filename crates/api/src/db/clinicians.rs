//! Clinician repository for database operations.

use sqlx::PgPool;

use prosper_core::ClinicianId;

use super::{RepositoryError, classify_write_error};
use crate::models::{Clinician, NewClinician};

/// Repository for clinician database operations.
pub struct ClinicianRepository<'a> {
    pool: &'a PgPool,
}

/// Raw `clinician` row.
#[derive(Debug, sqlx::FromRow)]
struct ClinicianRow {
    id: ClinicianId,
    name: String,
    email: String,
    specialty: String,
}

impl From<ClinicianRow> for Clinician {
    fn from(row: ClinicianRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            specialty: row.specialty,
        }
    }
}

impl<'a> ClinicianRepository<'a> {
    /// Create a new clinician repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new clinician.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, clinician: &NewClinician) -> Result<Clinician, RepositoryError> {
        let row = sqlx::query_as::<_, ClinicianRow>(
            r"
            INSERT INTO clinician (id, name, email, specialty)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, specialty
            ",
        )
        .bind(ClinicianId::generate())
        .bind(&clinician.name)
        .bind(&clinician.email)
        .bind(&clinician.specialty)
        .fetch_one(self.pool)
        .await
        .map_err(|e| classify_write_error(e, |_| "clinician references a missing row".to_owned()))?;

        Ok(row.into())
    }

    /// List every clinician ordered by name.
    ///
    /// Uses the `C` collation so the order does not depend on the database locale.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Clinician>, RepositoryError> {
        let rows = sqlx::query_as::<_, ClinicianRow>(
            r#"
            SELECT id, name, email, specialty
            FROM clinician
            ORDER BY name COLLATE "C" ASC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Clinician::from).collect())
    }

    /// Get a clinician by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(&self, id: ClinicianId) -> Result<Option<Clinician>, RepositoryError> {
        let row = sqlx::query_as::<_, ClinicianRow>(
            r"
            SELECT id, name, email, specialty
            FROM clinician
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Clinician::from))
    }
}
