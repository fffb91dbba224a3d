//! Service layer for the veterinary records backend.
//! - Registries own the referential checks between collections.
//! - Every operation reads and rewrites whole collection files through `FileStore`.
//! - The contract report is an independent read path behind `ContractSource`.

pub mod errors;
pub mod runtime;
pub mod storage;
pub mod sequence;
pub mod registry;
pub mod statistics;
pub mod report;
#[cfg(test)]
pub mod test_support;
