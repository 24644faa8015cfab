//! Storage crate: persistence of the fruit collection.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`store`] – CollectionStore trait
//! - [`json_file_store`] – JsonFileStore (flat JSON file)
//! - [`in_memory_store`] – InMemoryStore

mod error;
mod in_memory_store;
mod json_file_store;
mod store;

#[cfg(test)]
mod json_file_store_test;

pub use error::StorageError;
pub use in_memory_store::InMemoryStore;
pub use json_file_store::JsonFileStore;
pub use store::CollectionStore;
