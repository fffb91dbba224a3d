//! Registries over the four collections.
//!
//! References between records are by name and are checked only when the
//! dependent record is written. Nothing is re-checked afterwards.

pub mod owners;
pub mod pets;
pub mod appointments;
pub mod invoices;

use std::sync::Arc;

use crate::{sequence::SequenceGenerator, storage::FileStore};

pub use appointments::AppointmentRegistry;
pub use invoices::InvoiceRegistry;
pub use owners::OwnerRegistry;
pub use pets::PetRegistry;

/// All registries wired to one store and one id sequence.
#[derive(Clone)]
pub struct Registries {
    pub owners: OwnerRegistry,
    pub pets: PetRegistry,
    pub appointments: AppointmentRegistry,
    pub invoices: InvoiceRegistry,
}

impl Registries {
    pub fn new(store: Arc<FileStore>, ids: Arc<SequenceGenerator>) -> Self {
        let owners = OwnerRegistry::new(Arc::clone(&store), Arc::clone(&ids));
        let pets = PetRegistry::new(Arc::clone(&store), ids, owners.clone());
        let appointments = AppointmentRegistry::new(Arc::clone(&store), owners.clone(), pets.clone());
        let invoices = InvoiceRegistry::new(store);
        Self { owners, pets, appointments, invoices }
    }
}
