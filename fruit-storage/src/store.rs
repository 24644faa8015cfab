use async_trait::async_trait;
use fruit_core::FruitCollection;

use crate::error::StorageError;

/// Whole-collection persistence: every load reads everything, every save writes everything.
#[async_trait]
pub trait CollectionStore: Send + Sync {
    /// Reads the full collection. An absent or blank source yields an empty collection.
    async fn load(&self) -> Result<FruitCollection, StorageError>;

    /// Overwrites the stored collection. Returns once the data is written.
    async fn save(&self, fruits: &FruitCollection) -> Result<(), StorageError>;
}
