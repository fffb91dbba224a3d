pub mod appointments;
pub mod invoices;
pub mod owners;
pub mod pets;
pub mod reports;

use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;

use crate::openapi;
use crate::state::AppState;

/// Owner listing path, literal and as clients send it on the wire.
pub const OWNERS_PATH: &str = "/get_dueños/";
pub const OWNERS_PATH_ENCODED: &str = "/get_due%C3%B1os/";

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK")))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router
pub fn build_router(cors: CorsLayer, state: AppState) -> Router {
    let records = Router::new()
        .route("/envio/", post(owners::register_owner))
        .route("/baja/", post(owners::remove_owner))
        .route(OWNERS_PATH, get(owners::list_owners))
        .route(OWNERS_PATH_ENCODED, get(owners::list_owners))
        .route("/registro_mascota/", post(pets::register_pet))
        .route("/get_mascotas/", get(pets::list_pets))
        .route("/registro_cita/", post(appointments::register_appointment))
        .route("/get_citas/", get(appointments::list_appointments))
        .route("/generar_factura/", post(invoices::create_invoice))
        .route("/get_facturas/", get(invoices::list_invoices));

    let reports = Router::new()
        .route("/retrieve_data/", get(reports::retrieve_data))
        .route("/estadisticas/", get(reports::statistics));

    let public = Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi::openapi_json));

    public
        .merge(records)
        .merge(reports)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx responses are logged at ERROR
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
