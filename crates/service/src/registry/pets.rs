use std::sync::Arc;

use models::{EntityKind, Pet, PetInput};
use tracing::{info, warn};

use crate::errors::ServiceError;
use crate::registry::owners::OwnerRegistry;
use crate::sequence::SequenceGenerator;
use crate::storage::FileStore;

const COLLECTION: &str = EntityKind::Pet.collection();

/// Pets, each pointing at an owner by name.
#[derive(Clone)]
pub struct PetRegistry {
    store: Arc<FileStore>,
    ids: Arc<SequenceGenerator>,
    owners: OwnerRegistry,
}

impl PetRegistry {
    pub fn new(store: Arc<FileStore>, ids: Arc<SequenceGenerator>, owners: OwnerRegistry) -> Self {
        Self { store, ids, owners }
    }

    /// Register a pet; the owner must already be registered.
    pub async fn register(&self, input: PetInput) -> Result<Pet, ServiceError> {
        input.validate()?;
        if !self.owners.exists(&input.owner_name).await? {
            warn!(owner = %input.owner_name, pet = %input.pet_name, "pet rejected, owner not registered");
            return Err(ServiceError::OwnerNotRegistered(input.owner_name));
        }

        let mut pets: Vec<Pet> = self.store.load(COLLECTION).await?;
        let pet = input.into_pet(self.ids.next(EntityKind::Pet));
        pets.push(pet.clone());
        self.store.save(COLLECTION, &pets).await?;
        info!(owner = %pet.owner, pet = %pet.name, id = pet.id, "pet registered");
        Ok(pet)
    }

    pub async fn list(&self) -> Result<Vec<Pet>, ServiceError> {
        self.store.load(COLLECTION).await
    }

    /// True when a pet with this name is registered under this owner.
    pub async fn is_owned_by(&self, owner: &str, pet: &str) -> Result<bool, ServiceError> {
        Ok(self.list().await?.iter().any(|p| p.name == pet && p.belongs_to(owner)))
    }
}

/// Drop every pet whose owner is `owner` and rewrite the collection.
pub(crate) async fn remove_owned_by(store: &FileStore, owner: &str) -> Result<usize, ServiceError> {
    let mut pets: Vec<Pet> = store.load(COLLECTION).await?;
    let before = pets.len();
    pets.retain(|p| !p.belongs_to(owner));
    store.save(COLLECTION, &pets).await?;
    Ok(before - pets.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::registries;
    use models::OwnerInput;

    fn pet(owner: &str, name: &str) -> PetInput {
        PetInput {
            owner_name: owner.into(),
            pet_name: name.into(),
            species: "perro".into(),
            breed: None,
            age: 4,
            treatments: None,
        }
    }

    #[tokio::test]
    async fn pet_for_unknown_owner_is_not_written() -> Result<(), anyhow::Error> {
        let (regs, dir) = registries();
        let err = regs.pets.register(pet("Nadie", "Rex")).await.unwrap_err();
        assert!(matches!(err, ServiceError::OwnerNotRegistered(ref n) if n == "Nadie"));
        assert!(regs.pets.list().await?.is_empty());
        assert!(tokio::fs::metadata(dir.join("mascotas.json")).await.is_err());
        let _ = tokio::fs::remove_dir_all(&dir).await;
        Ok(())
    }

    #[tokio::test]
    async fn removing_owner_cascades_to_its_pets_only() -> Result<(), anyhow::Error> {
        let (regs, dir) = registries();
        for name in ["Ana", "Luis"] {
            regs.owners
                .register(OwnerInput { name: name.into(), phone: "1".into(), email: "e".into() })
                .await?;
        }
        let rex = regs.pets.register(pet("Ana", "Rex")).await?;
        let misi = regs.pets.register(pet("Ana", "Misi")).await?;
        regs.pets.register(pet("Luis", "Toby")).await?;
        assert_eq!((rex.id, misi.id), (1, 2));

        let removed = regs.owners.remove("Ana").await?;
        assert_eq!(removed, 2);

        let owners = regs.owners.list().await?;
        assert_eq!(owners.len(), 1);
        assert_eq!(owners[0].name, "Luis");
        let pets = regs.pets.list().await?;
        assert_eq!(pets.len(), 1);
        assert!(pets.iter().all(|p| p.owner != "Ana"));

        let _ = tokio::fs::remove_dir_all(&dir).await;
        Ok(())
    }
}
