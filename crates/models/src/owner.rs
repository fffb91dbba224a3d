use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::{validate_name, ModelError};

/// Registered owner. `Nombre` is the unique key other records refer to.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct Owner {
    /// Files written before ids were assigned load with id 0.
    #[serde(default)]
    pub id: u64,
    #[serde(rename = "Nombre")]
    pub name: String,
    #[serde(rename = "Telefono")]
    pub phone: String,
    pub email: String,
}

/// Body of `POST /envio/`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct OwnerInput {
    #[serde(rename = "Nombre")]
    pub name: String,
    #[serde(rename = "Telefono")]
    pub phone: String,
    pub email: String,
}

impl OwnerInput {
    pub fn validate(&self) -> Result<(), ModelError> {
        validate_name("Nombre", &self.name)
    }

    pub fn into_owner(self, id: u64) -> Owner {
        Owner { id, name: self.name, phone: self.phone, email: self.email }
    }
}
