//! Flat-file store: the collection lives in one JSON array file.
//!
//! Every load reads and decodes the whole file; every save re-serializes the whole
//! collection and overwrites it. Writes are not atomic.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use fruit_core::FruitCollection;
use tokio::fs;
use tracing::{debug, info, instrument};

use crate::error::StorageError;
use crate::store::CollectionStore;

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the directory holding the data file if it does not exist yet.
    pub async fn ensure_parent_dir(&self) -> Result<(), StorageError> {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => {
                fs::create_dir_all(dir).await.map_err(|source| StorageError::Io {
                    path: dir.to_path_buf(),
                    source,
                })?;
                info!(dir = %dir.display(), "Data directory ready");
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

#[async_trait]
impl CollectionStore for JsonFileStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn load(&self) -> Result<FruitCollection, StorageError> {
        let text = match fs::read_to_string(&self.path).await {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Data file absent, starting with an empty collection");
                return Ok(FruitCollection::default());
            }
            Err(e) => return Err(self.io_error(e)),
        };

        if text.trim().is_empty() {
            return Ok(FruitCollection::default());
        }

        let fruits: FruitCollection =
            serde_json::from_str(&text).map_err(|source| StorageError::Malformed {
                path: self.path.clone(),
                source,
            })?;

        debug!(count = fruits.len(), "Loaded collection");
        Ok(fruits)
    }

    #[instrument(skip(self, fruits), fields(path = %self.path.display(), count = fruits.len()))]
    async fn save(&self, fruits: &FruitCollection) -> Result<(), StorageError> {
        let text = serde_json::to_string_pretty(fruits)?;
        fs::write(&self.path, text)
            .await
            .map_err(|e| self.io_error(e))?;

        debug!("Saved collection");
        Ok(())
    }
}
