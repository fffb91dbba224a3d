use axum::{extract::State, Json};
use models::{ContractListing, Statistics};
use tracing::info;

use crate::errors::JsonApiError;
use crate::state::AppState;

#[utoipa::path(
    get, path = "/retrieve_data/", tag = "reports",
    responses(
        (status = 200, description = "Contract dataset", body = ContractListing),
        (status = 500, description = "Dataset missing or malformed")
    )
)]
pub async fn retrieve_data(State(state): State<AppState>) -> Result<Json<ContractListing>, JsonApiError> {
    let contratos = state.contracts.fetch().await?;
    info!(count = contratos.len(), "contract report served");
    Ok(Json(ContractListing { contratos }))
}

#[utoipa::path(
    get, path = "/estadisticas/", tag = "reports",
    responses((status = 200, description = "Counts and revenue", body = Statistics))
)]
pub async fn statistics(State(state): State<AppState>) -> Result<Json<Statistics>, JsonApiError> {
    Ok(Json(state.statistics.compute().await?))
}
