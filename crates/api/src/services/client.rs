//! `client.*` procedures.

use prosper_core::ClientId;

use crate::error::{AppError, Result};
use crate::models::{Client, ClientWithAppointments};
use crate::store::Store;
use crate::validation::{CreateClientInput, validate_create_client};

/// Client signup and lookup.
pub struct ClientService<'a, S> {
    store: &'a S,
}

impl<'a, S: Store> ClientService<'a, S> {
    #[must_use]
    pub const fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Sign up a new client.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` if the input is malformed, before any
    /// store access. Returns `AppError::Store` if the insert fails.
    pub async fn create(&self, input: CreateClientInput) -> Result<Client> {
        let new_client = validate_create_client(input)?;
        let client = self.store.create_client(new_client).await?;

        tracing::info!(client_id = %client.id, neurotype = %client.neurotype, "Client created");
        Ok(client)
    }

    /// Every client, most recently created first.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Store` if the query fails.
    pub async fn list(&self) -> Result<Vec<Client>> {
        let clients = self.store.list_clients().await?;
        tracing::debug!(count = clients.len(), "Listed clients");
        Ok(clients)
    }

    /// A client with their appointments.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if no client has this id.
    /// Returns `AppError::Store` if the query fails.
    pub async fn get_by_id(&self, id: &str) -> Result<ClientWithAppointments> {
        let Ok(client_id) = ClientId::parse(id) else {
            return Err(AppError::not_found("client", id));
        };

        self.store
            .get_client(client_id)
            .await?
            .ok_or_else(|| AppError::not_found("client", id))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use prosper_core::Neurotype;
    use serde_json::json;

    use super::*;
    use crate::store::MemoryStore;
    use crate::validation::ValidationError;

    fn input(value: serde_json::Value) -> CreateClientInput {
        serde_json::from_value(value).unwrap()
    }

    fn jane() -> CreateClientInput {
        input(json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "age": 32,
            "neurotype": "ADHD",
        }))
    }

    #[tokio::test]
    async fn test_create_then_get_by_id() {
        let store = MemoryStore::new();
        let service = ClientService::new(&store);

        let created = service.create(jane()).await.unwrap();
        let fetched = service.get_by_id(&created.id.to_string()).await.unwrap();

        assert_eq!(fetched.client, created);
        assert_eq!(fetched.client.name, "Jane Doe");
        assert_eq!(fetched.client.email.as_str(), "jane@example.com");
        assert_eq!(fetched.client.age, 32);
        assert_eq!(fetched.client.neurotype, Neurotype::Adhd);
        assert!(fetched.appointments.is_empty());
    }

    #[tokio::test]
    async fn test_create_invalid_input_persists_nothing() {
        let store = MemoryStore::new();
        let service = ClientService::new(&store);

        let err = service
            .create(input(json!({
                "name": "Jane",
                "email": "jane@example.com",
                "age": 0,
                "neurotype": "ADHD",
            })))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::Validation(ValidationError::AgeOutOfRange { got: 0, .. })
        ));
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let store = MemoryStore::new();
        let service = ClientService::new(&store);

        let first = service.create(jane()).await.unwrap();
        let second = service
            .create(input(json!({
                "name": "John Smith",
                "email": "john@example.com",
                "age": 28,
                "neurotype": "Autistic",
            })))
            .await
            .unwrap();

        let listed = service.list().await.unwrap();
        assert_eq!(listed, vec![second, first]);
    }

    #[tokio::test]
    async fn test_get_by_id_unknown_and_malformed() {
        let store = MemoryStore::new();
        let service = ClientService::new(&store);

        let unknown = ClientId::generate().to_string();
        assert!(matches!(
            service.get_by_id(&unknown).await.unwrap_err(),
            AppError::NotFound(_)
        ));
        assert!(matches!(
            service.get_by_id("not-an-id").await.unwrap_err(),
            AppError::NotFound(_)
        ));
    }
}
