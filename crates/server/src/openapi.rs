use axum::Json;
use utoipa::OpenApi;

use models::{
    Appointment, ContractListing, ContractRecord, Invoice, Owner, OwnerInput, OwnerRevenue, Pet, PetInput, Statistics,
};

use crate::routes::{
    owners::{OwnerCreated, OwnerRemoved, RemoveOwnerInput},
    pets::PetCreated,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::owners::register_owner,
        crate::routes::owners::list_owners,
        crate::routes::owners::remove_owner,
        crate::routes::pets::register_pet,
        crate::routes::pets::list_pets,
        crate::routes::appointments::register_appointment,
        crate::routes::appointments::list_appointments,
        crate::routes::invoices::create_invoice,
        crate::routes::invoices::list_invoices,
        crate::routes::reports::retrieve_data,
        crate::routes::reports::statistics,
    ),
    components(
        schemas(
            Owner,
            OwnerInput,
            OwnerCreated,
            RemoveOwnerInput,
            OwnerRemoved,
            Pet,
            PetInput,
            PetCreated,
            Appointment,
            Invoice,
            Statistics,
            OwnerRevenue,
            ContractRecord,
            ContractListing,
        )
    ),
    tags(
        (name = "health"),
        (name = "owners"),
        (name = "pets"),
        (name = "appointments"),
        (name = "invoices"),
        (name = "reports")
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
