use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("owner {0} is already registered")]
    DuplicateOwner(String),
    #[error("owner {0} not found")]
    OwnerNotFound(String),
    #[error("owner {0} is not registered")]
    OwnerNotRegistered(String),
    #[error("pet {pet} is not associated with owner {owner}")]
    PetNotAssociated { owner: String, pet: String },
    #[error("collection {collection} is unreadable: {reason}")]
    CollectionUnreadable { collection: String, reason: String },
    #[error("storage error: {0}")]
    Io(String),
    #[error("report unavailable: {0}")]
    Report(String),
    #[error("unexpected error: {0}")]
    Unexpected(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}
