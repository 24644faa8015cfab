//! Unit tests for JsonFileStore.
//!
//! Covers empty/absent files, malformed content and parent directory creation.

use crate::error::StorageError;
use crate::json_file_store::JsonFileStore;
use crate::store::CollectionStore;

#[tokio::test]
async fn test_load_missing_file_is_empty() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let store = JsonFileStore::new(dir.path().join("fruits.json"));

    let fruits = store.load().await.expect("Failed to load");

    assert!(fruits.is_empty());
}

#[tokio::test]
async fn test_load_blank_file_is_empty() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("fruits.json");
    std::fs::write(&path, "  \n").unwrap();
    let store = JsonFileStore::new(&path);

    let fruits = store.load().await.expect("Failed to load");

    assert!(fruits.is_empty());
}

#[tokio::test]
async fn test_load_malformed_file_is_error() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("fruits.json");
    std::fs::write(&path, "[{\"id\": 1,").unwrap();
    let store = JsonFileStore::new(&path);

    let result = store.load().await;

    assert!(matches!(result, Err(StorageError::Malformed { .. })));
}

#[tokio::test]
async fn test_load_wrong_shape_is_error() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("fruits.json");
    std::fs::write(&path, r#"{"fruits": []}"#).unwrap();
    let store = JsonFileStore::new(&path);

    assert!(matches!(
        store.load().await,
        Err(StorageError::Malformed { .. })
    ));
}

#[tokio::test]
async fn test_ensure_parent_dir_creates_nested_dirs() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("data").join("fruits.json");
    let store = JsonFileStore::new(&path);

    store
        .ensure_parent_dir()
        .await
        .expect("Failed to create data dir");

    assert!(path.parent().unwrap().is_dir());
}

#[tokio::test]
async fn test_ensure_parent_dir_bare_file_name() {
    let store = JsonFileStore::new("fruits.json");

    store
        .ensure_parent_dir()
        .await
        .expect("Bare file name needs no directory");
}
