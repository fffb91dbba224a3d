use std::{path::PathBuf, sync::Arc};

use configs::StorageConfig;
use service::{
    registry::Registries,
    report::{ContractSource, CsvContractReader},
    sequence::SequenceGenerator,
    statistics::StatisticsAggregator,
    storage::FileStore,
};

/// Process-scoped state shared by every handler.
///
/// Built once at startup; the id sequence lives here and is lost on restart.
#[derive(Clone)]
pub struct AppState {
    pub registries: Registries,
    pub statistics: StatisticsAggregator,
    pub contracts: Arc<dyn ContractSource>,
}

impl AppState {
    pub fn new<P: Into<PathBuf>>(data_dir: P, contracts: Arc<dyn ContractSource>) -> Self {
        let store = Arc::new(FileStore::new(data_dir));
        let registries = Registries::new(store, Arc::new(SequenceGenerator::new()));
        let statistics = StatisticsAggregator::new(registries.clone());
        Self { registries, statistics, contracts }
    }

    pub fn from_storage(cfg: &StorageConfig) -> Self {
        let contracts: Arc<dyn ContractSource> = Arc::new(CsvContractReader::new(&cfg.report_path));
        Self::new(&cfg.data_dir, contracts)
    }
}
