//! Client repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use prosper_core::{ClientId, Email, Neurotype};

use super::{RepositoryError, classify_write_error};
use crate::models::{Client, NewClient};

/// Raw `client` row.
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct ClientRow {
    pub id: ClientId,
    pub name: String,
    pub email: String,
    pub age: i32,
    pub neurotype: Neurotype,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<ClientRow> for Client {
    type Error = RepositoryError;

    fn try_from(row: ClientRow) -> Result<Self, Self::Error> {
        let email = Email::parse(&row.email).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
        })?;

        Ok(Self {
            id: row.id,
            name: row.name,
            email,
            age: row.age,
            neurotype: row.neurotype,
            created_at: row.created_at,
        })
    }
}

/// Repository for client database operations.
pub struct ClientRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ClientRepository<'a> {
    /// Create a new client repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new client.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` on a constraint violation.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(&self, client: &NewClient) -> Result<Client, RepositoryError> {
        let row = sqlx::query_as::<_, ClientRow>(
            r"
            INSERT INTO client (id, name, email, age, neurotype)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, email, age, neurotype, created_at
            ",
        )
        .bind(ClientId::generate())
        .bind(&client.name)
        .bind(&client.email)
        .bind(client.age)
        .bind(client.neurotype)
        .fetch_one(self.pool)
        .await
        .map_err(|e| classify_write_error(e, |_| "client references a missing row".to_owned()))?;

        row.try_into()
    }

    /// List every client, most recently created first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a stored email is invalid.
    pub async fn list(&self) -> Result<Vec<Client>, RepositoryError> {
        let rows = sqlx::query_as::<_, ClientRow>(
            r"
            SELECT id, name, email, age, neurotype, created_at
            FROM client
            ORDER BY created_at DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(Client::try_from).collect()
    }

    /// Get a client by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored email is invalid.
    pub async fn get_by_id(&self, id: ClientId) -> Result<Option<Client>, RepositoryError> {
        let row = sqlx::query_as::<_, ClientRow>(
            r"
            SELECT id, name, email, age, neurotype, created_at
            FROM client
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        row.map(Client::try_from).transpose()
    }
}
