use std::io;

use bytes::Bytes;
use futures::StreamExt;
use futures::stream;

use doc_translator::application::ports::{StagingStore, StagingStoreError};
use doc_translator::domain::{Document, DocumentFormat};
use doc_translator::infrastructure::storage::LocalStagingStore;

fn create_test_store(max_file_size: u64) -> (tempfile::TempDir, LocalStagingStore) {
    let dir = tempfile::TempDir::new().unwrap();
    let store = LocalStagingStore::new(dir.path().to_path_buf(), max_file_size).unwrap();
    (dir, store)
}

fn entries(dir: &tempfile::TempDir) -> usize {
    std::fs::read_dir(dir.path()).unwrap().count()
}

#[tokio::test]
async fn given_valid_stream_when_staging_then_file_is_persisted_with_extension() {
    let (dir, store) = create_test_store(1024);
    let document = Document::new("notes.txt".to_string(), DocumentFormat::Txt);

    let chunks = vec![Ok(Bytes::from("hello ")), Ok(Bytes::from("world"))];
    let staged = store
        .stage(&document, stream::iter(chunks).boxed())
        .await
        .unwrap();

    assert_eq!(staged.size_bytes(), 11);
    assert!(staged.path().starts_with(dir.path()));
    assert_eq!(staged.path().extension().unwrap(), "txt");
    assert_eq!(std::fs::read(staged.path()).unwrap(), b"hello world");
}

#[tokio::test]
async fn given_staged_file_when_dropped_then_directory_is_empty() {
    let (dir, store) = create_test_store(1024);
    let document = Document::new("notes.txt".to_string(), DocumentFormat::Txt);

    let staged = store
        .stage(&document, stream::iter(vec![Ok(Bytes::from("data"))]).boxed())
        .await
        .unwrap();
    assert_eq!(entries(&dir), 1);

    drop(staged);

    assert_eq!(entries(&dir), 0);
}

#[tokio::test]
async fn given_two_uploads_with_same_name_when_staging_then_paths_differ() {
    let (_dir, store) = create_test_store(1024);
    let first = Document::new("same.txt".to_string(), DocumentFormat::Txt);
    let second = Document::new("same.txt".to_string(), DocumentFormat::Txt);

    let a = store
        .stage(&first, stream::iter(vec![Ok(Bytes::from("a"))]).boxed())
        .await
        .unwrap();
    let b = store
        .stage(&second, stream::iter(vec![Ok(Bytes::from("b"))]).boxed())
        .await
        .unwrap();

    assert_ne!(a.path(), b.path());
}

#[tokio::test]
async fn given_stream_over_limit_when_staging_then_returns_too_large_and_cleans_up() {
    let (dir, store) = create_test_store(8);
    let document = Document::new("big.txt".to_string(), DocumentFormat::Txt);

    let chunks = vec![Ok(Bytes::from("12345")), Ok(Bytes::from("67890"))];
    let result = store.stage(&document, stream::iter(chunks).boxed()).await;

    assert!(matches!(result, Err(StagingStoreError::TooLarge { limit: 8 })));
    assert_eq!(entries(&dir), 0);
}

#[tokio::test]
async fn given_stream_exactly_at_limit_when_staging_then_succeeds() {
    let (_dir, store) = create_test_store(5);
    let document = Document::new("fit.txt".to_string(), DocumentFormat::Txt);

    let staged = store
        .stage(&document, stream::iter(vec![Ok(Bytes::from("12345"))]).boxed())
        .await
        .unwrap();

    assert_eq!(staged.size_bytes(), 5);
}

#[tokio::test]
async fn given_stream_error_when_staging_then_returns_error_and_cleans_up() {
    let (dir, store) = create_test_store(1024);
    let document = Document::new("broken.txt".to_string(), DocumentFormat::Txt);

    let chunks: Vec<Result<Bytes, io::Error>> = vec![
        Ok(Bytes::from("partial")),
        Err(io::Error::new(io::ErrorKind::ConnectionReset, "client went away")),
    ];
    let result = store.stage(&document, stream::iter(chunks).boxed()).await;

    assert!(matches!(result, Err(StagingStoreError::Io(_))));
    assert_eq!(entries(&dir), 0);
}

#[test]
fn given_missing_directory_when_creating_store_then_directory_is_created() {
    let dir = tempfile::TempDir::new().unwrap();
    let nested = dir.path().join("uploads").join("staging");

    let store = LocalStagingStore::new(nested.clone(), 1024).unwrap();

    assert!(nested.is_dir());
    assert_eq!(store.base_path(), nested.as_path());
    assert_eq!(store.max_file_size(), 1024);
}
