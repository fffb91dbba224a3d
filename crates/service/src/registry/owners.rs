use std::sync::Arc;

use models::{errors::validate_name, EntityKind, Owner, OwnerInput};
use tracing::{info, warn};

use crate::errors::ServiceError;
use crate::registry::pets;
use crate::sequence::SequenceGenerator;
use crate::storage::FileStore;

const COLLECTION: &str = EntityKind::Owner.collection();

/// Owners, unique by name.
#[derive(Clone)]
pub struct OwnerRegistry {
    store: Arc<FileStore>,
    ids: Arc<SequenceGenerator>,
}

impl OwnerRegistry {
    pub fn new(store: Arc<FileStore>, ids: Arc<SequenceGenerator>) -> Self {
        Self { store, ids }
    }

    /// Register a new owner; fails with `DuplicateOwner` when the name is taken.
    pub async fn register(&self, input: OwnerInput) -> Result<Owner, ServiceError> {
        input.validate()?;
        let mut owners: Vec<Owner> = self.store.load(COLLECTION).await?;
        if owners.iter().any(|o| o.name == input.name) {
            warn!(owner = %input.name, "duplicate owner rejected");
            return Err(ServiceError::DuplicateOwner(input.name));
        }

        let owner = input.into_owner(self.ids.next(EntityKind::Owner));
        owners.push(owner.clone());
        self.store.save(COLLECTION, &owners).await?;
        info!(owner = %owner.name, id = owner.id, "owner registered");
        Ok(owner)
    }

    pub async fn list(&self) -> Result<Vec<Owner>, ServiceError> {
        self.store.load(COLLECTION).await
    }

    pub async fn exists(&self, name: &str) -> Result<bool, ServiceError> {
        Ok(self.list().await?.iter().any(|o| o.name == name))
    }

    /// Remove an owner and every pet pointing at it; returns the number of pets removed.
    ///
    /// The owners file is rewritten before the pets file. Appointments and
    /// invoices naming this owner are left as they are.
    pub async fn remove(&self, name: &str) -> Result<usize, ServiceError> {
        validate_name("nombre_dueño", name)?;
        let mut owners: Vec<Owner> = self.store.load(COLLECTION).await?;
        let before = owners.len();
        owners.retain(|o| o.name != name);
        if owners.len() == before {
            return Err(ServiceError::OwnerNotFound(name.to_string()));
        }
        self.store.save(COLLECTION, &owners).await?;

        let removed_pets = pets::remove_owned_by(&self.store, name).await?;
        info!(owner = %name, removed_pets, "owner removed");
        Ok(removed_pets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::registries;

    fn owner(name: &str) -> OwnerInput {
        OwnerInput { name: name.into(), phone: "600000000".into(), email: format!("{name}@example.com") }
    }

    #[tokio::test]
    async fn duplicate_name_rejected_and_collection_unchanged() -> Result<(), anyhow::Error> {
        let (regs, dir) = registries();
        let first = regs.owners.register(owner("Ana")).await?;
        assert_eq!(first.id, 1);

        let err = regs.owners.register(owner("Ana")).await.unwrap_err();
        assert!(matches!(err, ServiceError::DuplicateOwner(ref n) if n == "Ana"));
        assert_eq!(regs.owners.list().await?.len(), 1);

        let second = regs.owners.register(owner("Luis")).await?;
        assert_eq!(second.id, 2);

        let _ = tokio::fs::remove_dir_all(&dir).await;
        Ok(())
    }

    #[tokio::test]
    async fn remove_unknown_owner_fails() -> Result<(), anyhow::Error> {
        let (regs, dir) = registries();
        regs.owners.register(owner("Ana")).await?;
        assert!(matches!(regs.owners.remove("Pedro").await, Err(ServiceError::OwnerNotFound(_))));
        assert!(matches!(regs.owners.remove(" ").await, Err(ServiceError::Model(_))));
        assert_eq!(regs.owners.list().await?.len(), 1);
        let _ = tokio::fs::remove_dir_all(&dir).await;
        Ok(())
    }
}
