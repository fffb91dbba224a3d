use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

/// JSON error body: `{"error": <title>, "detail": <message>}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub title: &'static str,
    pub detail: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, title: &'static str, detail: Option<String>) -> Self {
        Self { status, title, detail }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, title = self.title, detail = ?self.detail, "request failed");
        }
        let body = serde_json::json!({"error": self.title, "detail": self.detail});
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        let (status, title) = match &e {
            ServiceError::DuplicateOwner(_) => (StatusCode::BAD_REQUEST, "Duplicate Owner"),
            ServiceError::OwnerNotFound(_) => (StatusCode::NOT_FOUND, "Owner Not Found"),
            ServiceError::OwnerNotRegistered(_) => (StatusCode::BAD_REQUEST, "Owner Not Registered"),
            ServiceError::PetNotAssociated { .. } => (StatusCode::BAD_REQUEST, "Pet Not Associated"),
            ServiceError::Model(_) => (StatusCode::BAD_REQUEST, "Validation Error"),
            ServiceError::CollectionUnreadable { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "Collection Unreadable"),
            ServiceError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Storage Error"),
            ServiceError::Report(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Report Unavailable"),
            ServiceError::Unexpected(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
        };
        JsonApiError::new(status, title, Some(e.to_string()))
    }
}

impl From<JsonRejection> for JsonApiError {
    fn from(rejection: JsonRejection) -> Self {
        JsonApiError::new(StatusCode::BAD_REQUEST, "Validation Error", Some(rejection.body_text()))
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("runtime check failed: {0}")]
    Runtime(String),
}
