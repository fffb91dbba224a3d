use std::{
    io,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use models::{ContractRecord, CONTRACT_COLUMNS};
use tracing::info;

use crate::errors::ServiceError;
use crate::report::ContractSource;

/// Reads the `;`-separated contracts CSV on every fetch.
#[derive(Clone, Debug)]
pub struct CsvContractReader {
    path: PathBuf,
}

impl CsvContractReader {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Parse rows from any reader. Short rows and empty cells come back as `"0"`.
    pub fn read_from<R: io::Read>(reader: R) -> Result<Vec<ContractRecord>, ServiceError> {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(b';')
            .flexible(true)
            .from_reader(reader);

        let headers = rdr
            .headers()
            .map_err(|e| ServiceError::Report(format!("header: {e}")))?
            .clone();
        let absent: Vec<&str> = CONTRACT_COLUMNS
            .iter()
            .copied()
            .filter(|col| !headers.iter().any(|h| h == *col))
            .collect();
        if !absent.is_empty() {
            return Err(ServiceError::Report(format!("missing column(s): {}", absent.join(", "))));
        }

        let mut records = Vec::new();
        for (line, result) in rdr.records().enumerate() {
            let mut row = result.map_err(|e| ServiceError::Report(format!("row {}: {e}", line + 1)))?;
            while row.len() < headers.len() {
                row.push_field("");
            }
            row.truncate(headers.len());
            let record: ContractRecord = row
                .deserialize(Some(&headers))
                .map_err(|e| ServiceError::Report(format!("row {}: {e}", line + 1)))?;
            records.push(record.fill_missing());
        }
        Ok(records)
    }

    fn read_path(path: &Path) -> Result<Vec<ContractRecord>, ServiceError> {
        let file = std::fs::File::open(path)
            .map_err(|e| ServiceError::Report(format!("open {}: {e}", path.display())))?;
        Self::read_from(file)
    }
}

#[async_trait]
impl ContractSource for CsvContractReader {
    async fn fetch(&self) -> Result<Vec<ContractRecord>, ServiceError> {
        let path = self.path.clone();
        let records = tokio::task::spawn_blocking(move || Self::read_path(&path))
            .await
            .map_err(|e| ServiceError::Unexpected(e.to_string()))??;
        info!(path = %self.path.display(), count = records.len(), "contract report loaded");
        Ok(records)
    }
}
