//! Demo data set for local development.

use chrono::{DateTime, Duration, SubsecRound, Utc};

use prosper_core::{Email, Neurotype};

use crate::error::Result;
use crate::models::{Client, Clinician, NewAppointment, NewClient, NewClinician};
use crate::store::Store;
use crate::validation::ValidationError;

/// What [`seed_demo_data`] inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub clients: usize,
    pub clinicians: usize,
    pub appointments: usize,
}

/// Wipe the store and insert two clients, two clinicians and three
/// appointments scheduled relative to `now`.
///
/// # Errors
///
/// Returns `AppError::Store` if clearing or any insert fails.
pub async fn seed_demo_data<S: Store>(store: &S, now: DateTime<Utc>) -> Result<SeedSummary> {
    store.clear().await?;
    tracing::info!("Cleared existing data");

    let jane = add_client(store, "Jane Doe", "jane@example.com", 32, Neurotype::Adhd).await?;
    let john = add_client(store, "John Smith", "john@example.com", 28, Neurotype::Autistic).await?;

    let maria = add_clinician(
        store,
        "Dr. Maria Rodriguez",
        "maria@prosper.health",
        "Neurodevelopmental Psychology",
    )
    .await?;
    let james = add_clinician(
        store,
        "Dr. James Wilson",
        "james@prosper.health",
        "Behavioral Therapy",
    )
    .await?;

    let bookings = [(&jane, &maria, 3), (&john, &james, 5), (&jane, &james, 10)];
    for (client, clinician, days) in bookings {
        store
            .create_appointment(NewAppointment {
                date: (now + Duration::days(days)).trunc_subsecs(3),
                client_id: client.id,
                clinician_id: clinician.id,
            })
            .await?;
    }

    let summary = SeedSummary {
        clients: 2,
        clinicians: 2,
        appointments: bookings.len(),
    };
    tracing::info!(
        clients = summary.clients,
        clinicians = summary.clinicians,
        appointments = summary.appointments,
        "Seeded demo data"
    );
    Ok(summary)
}

async fn add_client<S: Store>(
    store: &S,
    name: &str,
    email: &str,
    age: i32,
    neurotype: Neurotype,
) -> Result<Client> {
    let email = Email::parse(email).map_err(ValidationError::from)?;
    Ok(store
        .create_client(NewClient {
            name: name.to_owned(),
            email,
            age,
            neurotype,
        })
        .await?)
}

async fn add_clinician<S: Store>(
    store: &S,
    name: &str,
    email: &str,
    specialty: &str,
) -> Result<Clinician> {
    Ok(store
        .create_clinician(NewClinician {
            name: name.to_owned(),
            email: email.to_owned(),
            specialty: specialty.to_owned(),
        })
        .await?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::store::MemoryStore;

    #[tokio::test]
    async fn test_seed_inserts_demo_data() {
        let store = MemoryStore::new();
        let now = Utc.with_ymd_and_hms(2030, 1, 1, 12, 0, 0).unwrap();

        let summary = seed_demo_data(&store, now).await.unwrap();
        assert_eq!(
            summary,
            SeedSummary {
                clients: 2,
                clinicians: 2,
                appointments: 3,
            }
        );

        let clinicians = store.list_clinicians().await.unwrap();
        let names: Vec<&str> = clinicians.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Dr. James Wilson", "Dr. Maria Rodriguez"]);

        let jane = store
            .list_clients()
            .await
            .unwrap()
            .into_iter()
            .find(|c| c.name == "Jane Doe")
            .unwrap();
        assert_eq!(jane.neurotype, Neurotype::Adhd);

        let jane_appointments = store.list_appointments_for_client(jane.id).await.unwrap();
        let dates: Vec<_> = jane_appointments.iter().map(|a| a.appointment.date).collect();
        assert_eq!(dates, [now + Duration::days(3), now + Duration::days(10)]);
        assert_eq!(jane_appointments[0].clinician.name, "Dr. Maria Rodriguez");
        assert_eq!(jane_appointments[1].clinician.name, "Dr. James Wilson");
    }

    #[tokio::test]
    async fn test_seed_replaces_existing_data() {
        let store = MemoryStore::new();
        let now = Utc::now();

        seed_demo_data(&store, now).await.unwrap();
        seed_demo_data(&store, now).await.unwrap();

        assert_eq!(store.list_clients().await.unwrap().len(), 2);
        assert_eq!(store.list_clinicians().await.unwrap().len(), 2);
    }
}
