use axum::{extract::State, Json};
use models::{Pet, PetInput};
use serde::Serialize;
use utoipa::ToSchema;

use crate::errors::JsonApiError;
use crate::extract::ApiJson;
use crate::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct PetCreated {
    pub message: String,
    pub mascota: Pet,
}

#[utoipa::path(
    post, path = "/registro_mascota/", tag = "pets",
    request_body = PetInput,
    responses(
        (status = 200, description = "Pet registered", body = PetCreated),
        (status = 400, description = "Owner not registered")
    )
)]
pub async fn register_pet(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<PetInput>,
) -> Result<Json<PetCreated>, JsonApiError> {
    let pet = state.registries.pets.register(input).await?;
    Ok(Json(PetCreated { message: "Mascota registrada con éxito".into(), mascota: pet }))
}

#[utoipa::path(
    get, path = "/get_mascotas/", tag = "pets",
    responses((status = 200, description = "All pets", body = [Pet]))
)]
pub async fn list_pets(State(state): State<AppState>) -> Result<Json<Vec<Pet>>, JsonApiError> {
    Ok(Json(state.registries.pets.list().await?))
}
