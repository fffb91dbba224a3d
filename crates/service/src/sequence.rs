use dashmap::DashMap;
use models::EntityKind;

/// Per-kind id counters, starting at 1.
///
/// Lives only in process memory: ids restart after a restart and two
/// processes sharing a data directory will hand out the same ids.
#[derive(Debug, Default)]
pub struct SequenceGenerator {
    counters: DashMap<EntityKind, u64>,
}

impl SequenceGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&self, kind: EntityKind) -> u64 {
        let mut counter = self.counters.entry(kind).or_insert(0);
        *counter += 1;
        *counter
    }
}
