#![cfg(test)]
use std::{path::PathBuf, sync::Arc};

use crate::{registry::Registries, sequence::SequenceGenerator, storage::FileStore};

/// Fresh, not yet created directory under the system temp dir.
pub fn temp_data_dir() -> PathBuf {
    std::env::temp_dir().join(format!("vet_records_{}", uuid::Uuid::new_v4()))
}

/// Registries over an isolated data directory with fresh id counters.
pub fn registries() -> (Registries, PathBuf) {
    let dir = temp_data_dir();
    let store = Arc::new(FileStore::new(&dir));
    let regs = Registries::new(store, Arc::new(SequenceGenerator::new()));
    (regs, dir)
}
