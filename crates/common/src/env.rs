//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories and files exist at startup.

use tracing::warn;

/// Ensure the data directory exists; warn when the report dataset is missing.
pub async fn ensure_env(data_dir: &str, report_path: &str) -> anyhow::Result<()> {
    if tokio::fs::metadata(report_path).await.is_err() {
        warn!(%report_path, "contract report dataset not found; /retrieve_data/ will fail");
    }
    tokio::fs::create_dir_all(data_dir)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {data_dir}: {e}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn creates_missing_data_dir() -> anyhow::Result<()> {
        let dir = std::env::temp_dir().join(format!("vet_env_{}", uuid::Uuid::new_v4()));
        let dir_str = dir.to_string_lossy().to_string();
        ensure_env(&dir_str, "/nonexistent/report.csv").await?;
        assert!(tokio::fs::metadata(&dir).await?.is_dir());
        let _ = tokio::fs::remove_dir_all(&dir).await;
        Ok(())
    }
}
