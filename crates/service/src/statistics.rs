use models::{Invoice, OwnerRevenue, Statistics};
use tracing::info;

use crate::errors::ServiceError;
use crate::registry::Registries;

/// Counts and revenue over all four collections, recomputed on every call.
#[derive(Clone)]
pub struct StatisticsAggregator {
    registries: Registries,
}

impl StatisticsAggregator {
    pub fn new(registries: Registries) -> Self {
        Self { registries }
    }

    pub async fn compute(&self) -> Result<Statistics, ServiceError> {
        let (owners, pets, appointments, invoices) = tokio::try_join!(
            self.registries.owners.list(),
            self.registries.pets.list(),
            self.registries.appointments.list(),
            self.registries.invoices.list(),
        )?;
        let stats = summarize(owners.len(), pets.len(), appointments.len(), &invoices);
        info!(
            owners = stats.total_owners,
            invoices = stats.total_facturas,
            revenue = stats.total_ingresos,
            "statistics computed"
        );
        Ok(stats)
    }
}

/// Fold invoices into totals; revenue per owner keeps first-seen order.
pub fn summarize(owners: usize, pets: usize, appointments: usize, invoices: &[Invoice]) -> Statistics {
    let mut revenue_by_owner = OwnerRevenue::default();
    let mut total = 0.0;
    for invoice in invoices {
        total += invoice.price;
        revenue_by_owner.add(&invoice.owner_name, invoice.price);
    }
    Statistics {
        total_owners: owners,
        total_mascotas: pets,
        total_citas: appointments,
        total_facturas: invoices.len(),
        total_ingresos: total,
        revenue_by_owner,
    }
}
