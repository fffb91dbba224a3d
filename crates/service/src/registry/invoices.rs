use std::sync::Arc;

use models::{EntityKind, Invoice};
use tracing::info;

use crate::errors::ServiceError;
use crate::storage::FileStore;

const COLLECTION: &str = EntityKind::Invoice.collection();

/// Append-only invoice log.
///
/// Unlike appointments, invoices are written without checking that the
/// owner or pet exist.
#[derive(Clone)]
pub struct InvoiceRegistry {
    store: Arc<FileStore>,
}

impl InvoiceRegistry {
    pub fn new(store: Arc<FileStore>) -> Self {
        Self { store }
    }

    pub async fn record(&self, invoice: Invoice) -> Result<Invoice, ServiceError> {
        let mut invoices: Vec<Invoice> = self.store.load(COLLECTION).await?;
        invoices.push(invoice.clone());
        self.store.save(COLLECTION, &invoices).await?;
        info!(owner = %invoice.owner_name, pet = %invoice.pet_name, price = invoice.price, "invoice recorded");
        Ok(invoice)
    }

    pub async fn list(&self) -> Result<Vec<Invoice>, ServiceError> {
        self.store.load(COLLECTION).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::registries;

    #[tokio::test]
    async fn invoice_for_unknown_owner_is_recorded() -> Result<(), anyhow::Error> {
        let (regs, dir) = registries();
        let invoice = Invoice {
            owner_name: "Nadie".into(),
            pet_name: "Fantasma".into(),
            treatment: "revision".into(),
            price: 25.5,
            date: "2024-01-10".into(),
        };
        regs.invoices.record(invoice.clone()).await?;
        assert_eq!(regs.invoices.list().await?, vec![invoice]);
        let _ = tokio::fs::remove_dir_all(&dir).await;
        Ok(())
    }
}
