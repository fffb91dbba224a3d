use axum::{extract::State, Json};
use common::types::Message;
use models::Invoice;

use crate::errors::JsonApiError;
use crate::extract::ApiJson;
use crate::state::AppState;

#[utoipa::path(
    post, path = "/generar_factura/", tag = "invoices",
    request_body = Invoice,
    responses((status = 200, description = "Invoice recorded"))
)]
pub async fn create_invoice(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<Invoice>,
) -> Result<Json<Message>, JsonApiError> {
    state.registries.invoices.record(input).await?;
    Ok(Json(Message::new("Factura generada con éxito")))
}

#[utoipa::path(
    get, path = "/get_facturas/", tag = "invoices",
    responses((status = 200, description = "All invoices", body = [Invoice]))
)]
pub async fn list_invoices(State(state): State<AppState>) -> Result<Json<Vec<Invoice>>, JsonApiError> {
    Ok(Json(state.registries.invoices.list().await?))
}
