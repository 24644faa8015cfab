//! Shared server state: the store, the per-request collection and the request gate.

use std::sync::Arc;

use fruit_core::FruitCollection;
use fruit_storage::CollectionStore;
use tokio::sync::{Mutex, MutexGuard};

/// State injected into every handler through axum `State`.
///
/// `collection` is replaced from `store` at the start of each request. `request_gate`
/// is held for the whole request, so reload, mutation and save never interleave
/// between concurrent requests.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CollectionStore>,
    pub collection: Arc<Mutex<FruitCollection>>,
    request_gate: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(store: Arc<dyn CollectionStore>) -> Self {
        Self {
            store,
            collection: Arc::new(Mutex::new(FruitCollection::default())),
            request_gate: Arc::new(Mutex::new(())),
        }
    }

    /// Waits until no other request is in flight.
    pub async fn enter_request(&self) -> MutexGuard<'_, ()> {
        self.request_gate.lock().await
    }
}
