//! Storage abstractions for service layer
//!
//! Each collection lives in its own JSON file and is always read and
//! written whole.

pub mod file_store;

pub use file_store::FileStore;
