use std::sync::Arc;

use models::{Appointment, EntityKind};
use tracing::{info, warn};

use crate::errors::ServiceError;
use crate::registry::{owners::OwnerRegistry, pets::PetRegistry};
use crate::storage::FileStore;

const COLLECTION: &str = EntityKind::Appointment.collection();

/// Append-only appointment log.
#[derive(Clone)]
pub struct AppointmentRegistry {
    store: Arc<FileStore>,
    owners: OwnerRegistry,
    pets: PetRegistry,
}

impl AppointmentRegistry {
    pub fn new(store: Arc<FileStore>, owners: OwnerRegistry, pets: PetRegistry) -> Self {
        Self { store, owners, pets }
    }

    /// Record an appointment for a registered owner and one of their pets.
    pub async fn register(&self, appointment: Appointment) -> Result<Appointment, ServiceError> {
        if !self.owners.exists(&appointment.owner_name).await? {
            warn!(owner = %appointment.owner_name, "appointment rejected, owner not found");
            return Err(ServiceError::OwnerNotFound(appointment.owner_name));
        }
        if !self.pets.is_owned_by(&appointment.owner_name, &appointment.pet_name).await? {
            warn!(owner = %appointment.owner_name, pet = %appointment.pet_name, "appointment rejected, pet not associated");
            return Err(ServiceError::PetNotAssociated {
                owner: appointment.owner_name,
                pet: appointment.pet_name,
            });
        }

        let mut appointments: Vec<Appointment> = self.store.load(COLLECTION).await?;
        appointments.push(appointment.clone());
        self.store.save(COLLECTION, &appointments).await?;
        info!(owner = %appointment.owner_name, pet = %appointment.pet_name, "appointment registered");
        Ok(appointment)
    }

    pub async fn list(&self) -> Result<Vec<Appointment>, ServiceError> {
        self.store.load(COLLECTION).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::registries;
    use models::{OwnerInput, PetInput};

    fn appointment(owner: &str, pet: &str) -> Appointment {
        Appointment {
            owner_name: owner.into(),
            pet_name: pet.into(),
            treatment: "vacuna".into(),
            urgency: "alta".into(),
            start: "2024-05-01".into(),
            end: "2024-05-02".into(),
        }
    }

    fn owner(name: &str) -> OwnerInput {
        OwnerInput { name: name.into(), phone: "1".into(), email: "e".into() }
    }

    fn pet(owner: &str, name: &str) -> PetInput {
        PetInput {
            owner_name: owner.into(),
            pet_name: name.into(),
            species: "gato".into(),
            breed: Some("siames".into()),
            age: 2,
            treatments: None,
        }
    }

    #[tokio::test]
    async fn pet_of_another_owner_is_not_associated() -> Result<(), anyhow::Error> {
        let (regs, dir) = registries();
        regs.owners.register(owner("Ana")).await?;
        regs.owners.register(owner("Luis")).await?;
        regs.pets.register(pet("Luis", "Rex")).await?;

        let err = regs.appointments.register(appointment("Ana", "Rex")).await.unwrap_err();
        assert!(matches!(err, ServiceError::PetNotAssociated { ref owner, ref pet } if owner == "Ana" && pet == "Rex"));
        assert!(regs.appointments.list().await?.is_empty());

        let err = regs.appointments.register(appointment("Pedro", "Rex")).await.unwrap_err();
        assert!(matches!(err, ServiceError::OwnerNotFound(_)));

        let _ = tokio::fs::remove_dir_all(&dir).await;
        Ok(())
    }

    #[tokio::test]
    async fn owner_removal_leaves_appointments_orphaned() -> Result<(), anyhow::Error> {
        let (regs, dir) = registries();
        regs.owners.register(owner("Ana")).await?;
        regs.pets.register(pet("Ana", "Rex")).await?;
        regs.appointments.register(appointment("Ana", "Rex")).await?;

        regs.owners.remove("Ana").await?;

        let err = regs.appointments.register(appointment("Ana", "Rex")).await.unwrap_err();
        assert!(matches!(err, ServiceError::OwnerNotFound(ref n) if n == "Ana"));
        let stored = regs.appointments.list().await?;
        assert_eq!(stored, vec![appointment("Ana", "Rex")]);

        let _ = tokio::fs::remove_dir_all(&dir).await;
        Ok(())
    }
}
