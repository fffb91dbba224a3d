use axum::{extract::State, Json};
use models::{Owner, OwnerInput};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::JsonApiError;
use crate::extract::ApiJson;
use crate::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct OwnerCreated {
    pub message: String,
    pub data: Owner,
}

/// Body of `POST /baja/`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct RemoveOwnerInput {
    #[serde(rename = "nombre_dueño")]
    pub owner_name: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OwnerRemoved {
    pub message: String,
    pub mascotas_eliminadas: usize,
}

#[utoipa::path(
    post, path = "/envio/", tag = "owners",
    request_body = OwnerInput,
    responses(
        (status = 200, description = "Owner registered", body = OwnerCreated),
        (status = 400, description = "Duplicate owner or blank name"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn register_owner(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<OwnerInput>,
) -> Result<Json<OwnerCreated>, JsonApiError> {
    let owner = state.registries.owners.register(input).await?;
    Ok(Json(OwnerCreated { message: "Formulario recibido y guardado".into(), data: owner }))
}

#[utoipa::path(
    get, path = "/get_dueños/", tag = "owners",
    responses((status = 200, description = "All owners", body = [Owner]))
)]
pub async fn list_owners(State(state): State<AppState>) -> Result<Json<Vec<Owner>>, JsonApiError> {
    Ok(Json(state.registries.owners.list().await?))
}

#[utoipa::path(
    post, path = "/baja/", tag = "owners",
    request_body = RemoveOwnerInput,
    responses(
        (status = 200, description = "Owner and their pets removed", body = OwnerRemoved),
        (status = 400, description = "Blank owner name"),
        (status = 404, description = "Owner not found")
    )
)]
pub async fn remove_owner(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<RemoveOwnerInput>,
) -> Result<Json<OwnerRemoved>, JsonApiError> {
    let removed = state.registries.owners.remove(&input.owner_name).await?;
    Ok(Json(OwnerRemoved {
        message: format!("Dueño {} dado de baja", input.owner_name),
        mascotas_eliminadas: removed,
    }))
}
