use axum::{extract::State, http::StatusCode, Json};
use common::types::Message;
use models::Appointment;
use service::errors::ServiceError;

use crate::errors::JsonApiError;
use crate::extract::ApiJson;
use crate::state::AppState;

#[utoipa::path(
    post, path = "/registro_cita/", tag = "appointments",
    request_body = Appointment,
    responses(
        (status = 200, description = "Appointment registered"),
        (status = 400, description = "Owner not found or pet not associated")
    )
)]
pub async fn register_appointment(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<Appointment>,
) -> Result<Json<Message>, JsonApiError> {
    state
        .registries
        .appointments
        .register(input)
        .await
        .map_err(|e| match e {
            // a missing owner is a bad request here, not a missing resource
            ServiceError::OwnerNotFound(_) => {
                JsonApiError::new(StatusCode::BAD_REQUEST, "Owner Not Found", Some(e.to_string()))
            }
            other => other.into(),
        })?;
    Ok(Json(Message::new("Cita registrada con éxito")))
}

#[utoipa::path(
    get, path = "/get_citas/", tag = "appointments",
    responses((status = 200, description = "All appointments", body = [Appointment]))
)]
pub async fn list_appointments(State(state): State<AppState>) -> Result<Json<Vec<Appointment>>, JsonApiError> {
    Ok(Json(state.registries.appointments.list().await?))
}
