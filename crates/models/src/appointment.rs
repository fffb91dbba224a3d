use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Appointment; both the request body of `POST /registro_cita/` and the stored record.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct Appointment {
    #[serde(rename = "Nombre_dueño")]
    pub owner_name: String,
    #[serde(rename = "Nombre_mascota")]
    pub pet_name: String,
    #[serde(rename = "Tratamiento")]
    pub treatment: String,
    #[serde(rename = "Nivel_urgencia")]
    pub urgency: String,
    #[serde(rename = "Fecha_inicio")]
    pub start: String,
    #[serde(rename = "Fecha_fin")]
    pub end: String,
}
