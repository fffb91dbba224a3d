use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::{validate_name, ModelError};

/// Pet record as stored in the pets collection.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct Pet {
    pub id: u64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "tipo")]
    pub species: String,
    #[serde(rename = "raza", default)]
    pub breed: Option<String>,
    #[serde(rename = "edad")]
    pub age: u32,
    #[serde(rename = "tratamientos", default)]
    pub treatments: Option<String>,
    /// Owner `Nombre`; the only link between a pet and its owner.
    #[serde(rename = "dueño")]
    pub owner: String,
}

/// Body of `POST /registro_mascota/`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct PetInput {
    #[serde(rename = "nombre_dueño")]
    pub owner_name: String,
    #[serde(rename = "nombre_mascota")]
    pub pet_name: String,
    #[serde(rename = "tipo")]
    pub species: String,
    #[serde(rename = "raza", default)]
    pub breed: Option<String>,
    #[serde(rename = "edad")]
    pub age: u32,
    #[serde(rename = "tratamientos", default)]
    pub treatments: Option<String>,
}

impl PetInput {
    pub fn validate(&self) -> Result<(), ModelError> {
        validate_name("nombre_mascota", &self.pet_name)
    }

    pub fn into_pet(self, id: u64) -> Pet {
        Pet {
            id,
            name: self.pet_name,
            species: self.species,
            breed: self.breed,
            age: self.age,
            treatments: self.treatments,
            owner: self.owner_name,
        }
    }
}

impl Pet {
    pub fn belongs_to(&self, owner: &str) -> bool {
        self.owner == owner
    }
}
