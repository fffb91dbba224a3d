//! Runtime environment helpers
//!
//! Thin wrapper around `common::env` to keep binary crates importing
//! `service::runtime::ensure_env` without depending directly on `common`.

/// Ensure the data directory exists; warn when the report dataset is missing.
pub async fn ensure_env(data_dir: &str, report_path: &str) -> anyhow::Result<()> {
    common::env::ensure_env(data_dir, report_path).await
}
