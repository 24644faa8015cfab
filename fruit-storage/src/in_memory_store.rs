//! In-memory store, for tests and runs without a data file.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use fruit_core::FruitCollection;
use tokio::sync::Mutex;

use crate::error::StorageError;
use crate::store::CollectionStore;

/// Holds the collection in process memory and counts saves.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    fruits: Mutex<FruitCollection>,
    saves: AtomicUsize,
}

impl InMemoryStore {
    pub fn new(fruits: FruitCollection) -> Self {
        Self {
            fruits: Mutex::new(fruits),
            saves: AtomicUsize::new(0),
        }
    }

    /// Number of completed `save` calls.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CollectionStore for InMemoryStore {
    async fn load(&self) -> Result<FruitCollection, StorageError> {
        Ok(self.fruits.lock().await.clone())
    }

    async fn save(&self, fruits: &FruitCollection) -> Result<(), StorageError> {
        *self.fruits.lock().await = fruits.clone();
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
