//! Contract report: an external tabular dataset republished as JSON.
//!
//! Unrelated to the registries; nothing here writes.

pub mod csv_source;

use async_trait::async_trait;
use models::ContractRecord;

use crate::errors::ServiceError;

pub use csv_source::CsvContractReader;

/// Trait abstraction for the contract dataset.
/// Implementations can be file-backed or fixed in memory.
#[async_trait]
pub trait ContractSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<ContractRecord>, ServiceError>;
}

/// Fixed set of records, mostly useful in tests.
#[derive(Clone, Debug, Default)]
pub struct StaticContracts(pub Vec<ContractRecord>);

#[async_trait]
impl ContractSource for StaticContracts {
    async fn fetch(&self) -> Result<Vec<ContractRecord>, ServiceError> {
        Ok(self.0.clone())
    }
}
