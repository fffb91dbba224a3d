use std::{io, path::PathBuf};

use serde::{de::DeserializeOwned, Serialize};
use serde_json::ser::PrettyFormatter;
use tokio::fs;
use tracing::debug;

use crate::errors::ServiceError;

/// JSON file-backed collection store.
///
/// A collection named `duenos` lives at `<root>/duenos.json` and holds the
/// full record list as a JSON array. There is no caching and no locking:
/// every `load` reads the file and every `save` overwrites it.
#[derive(Clone, Debug)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(format!("{name}.json"))
    }

    /// Load every record of a collection. A missing file is an empty collection.
    pub async fn load<T>(&self, name: &str) -> Result<Vec<T>, ServiceError>
    where
        T: DeserializeOwned,
    {
        let path = self.path_for(name);
        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(collection = name, "collection file absent, treating as empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(ServiceError::Io(format!("read {}: {e}", path.display()))),
        };

        serde_json::from_slice(&bytes).map_err(|e| ServiceError::CollectionUnreadable {
            collection: name.to_string(),
            reason: e.to_string(),
        })
    }

    /// Replace the whole collection file with `records`, indented for humans.
    pub async fn save<T>(&self, name: &str, records: &[T]) -> Result<(), ServiceError>
    where
        T: Serialize,
    {
        let path = self.path_for(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ServiceError::Io(format!("create {}: {e}", parent.display())))?;
        }

        let mut buf = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        records
            .serialize(&mut ser)
            .map_err(|e| ServiceError::Unexpected(format!("serialize {name}: {e}")))?;

        fs::write(&path, buf)
            .await
            .map_err(|e| ServiceError::Io(format!("write {}: {e}", path.display())))?;
        debug!(collection = name, count = records.len(), "collection rewritten");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::temp_data_dir;
    use serde::Deserialize;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Row {
        name: String,
        n: u32,
    }

    #[tokio::test]
    async fn missing_file_loads_empty() -> Result<(), anyhow::Error> {
        let store = FileStore::new(temp_data_dir());
        let rows: Vec<Row> = store.load("nothing_here").await?;
        assert!(rows.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn save_rewrites_whole_collection() -> Result<(), anyhow::Error> {
        let dir = temp_data_dir();
        let store = FileStore::new(&dir);

        store.save("rows", &[Row { name: "a".into(), n: 1 }, Row { name: "b".into(), n: 2 }]).await?;
        store.save("rows", &[Row { name: "c".into(), n: 3 }]).await?;

        let rows: Vec<Row> = store.load("rows").await?;
        assert_eq!(rows, vec![Row { name: "c".into(), n: 3 }]);

        // human readable, four-space indent
        let text = tokio::fs::read_to_string(store.path_for("rows")).await?;
        assert!(text.contains("\n        \"name\": \"c\""));

        let _ = tokio::fs::remove_dir_all(&dir).await;
        Ok(())
    }

    #[tokio::test]
    async fn corrupt_file_is_unreadable() -> Result<(), anyhow::Error> {
        let dir = temp_data_dir();
        tokio::fs::create_dir_all(&dir).await?;
        let store = FileStore::new(&dir);
        tokio::fs::write(store.path_for("rows"), b"{not json").await?;

        let res: Result<Vec<Row>, _> = store.load("rows").await;
        assert!(matches!(res, Err(ServiceError::CollectionUnreadable { ref collection, .. }) if collection == "rows"));

        let _ = tokio::fs::remove_dir_all(&dir).await;
        Ok(())
    }
}
