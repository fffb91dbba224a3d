use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Invoice; both the request body of `POST /generar_factura/` and the stored record.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct Invoice {
    #[serde(rename = "nombre_dueño")]
    pub owner_name: String,
    #[serde(rename = "nombre_mascota")]
    pub pet_name: String,
    #[serde(rename = "tratamiento")]
    pub treatment: String,
    #[serde(rename = "precio")]
    pub price: f64,
    #[serde(rename = "fecha")]
    pub date: String,
}
