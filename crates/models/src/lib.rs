//! Record types persisted by the veterinary registries.
//!
//! Foreign keys between records are names, not ids: a pet points at its
//! owner's `Nombre`, appointments and invoices point at both names.

pub mod errors;
pub mod kind;
pub mod owner;
pub mod pet;
pub mod appointment;
pub mod invoice;
pub mod statistics;
pub mod contract;

pub use appointment::Appointment;
pub use contract::{ContractListing, ContractRecord, CONTRACT_COLUMNS};
pub use invoice::Invoice;
pub use kind::EntityKind;
pub use owner::{Owner, OwnerInput};
pub use pet::{Pet, PetInput};
pub use statistics::{OwnerRevenue, Statistics};
