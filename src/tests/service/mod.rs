use std::path::Path;
use std::sync::Arc;

use rstest::rstest;

use crate::core::client::storage::{MockStorageClient, ObjectPage, StorageClient as _, StorageError};
use crate::error::StowageError;
use crate::service::StowageService;
use crate::tests::common::{storage_args, InMemoryStorage};
use crate::types::params::StorageArgs;

#[rstest]
#[tokio::test]
async fn put_missing_local_file_fails_before_any_backend_call(storage_args: StorageArgs) {
    // a mock with zero expectations panics on any backend call
    let client = Arc::new(MockStorageClient::new());
    let service = StowageService::new(storage_args, client);

    let result = service.put(Path::new("/definitely/not/here.bin"), None).await;

    assert!(matches!(result, Err(StowageError::FileNotFound(_))));
}

#[rstest]
#[tokio::test]
async fn put_defaults_key_to_uploads_prefix_and_returns_url(storage_args: StorageArgs) -> color_eyre::Result<()> {
    let dir = tempfile::tempdir()?;
    let local_path = dir.path().join("report.csv");
    std::fs::write(&local_path, b"a,b\n1,2\n")?;

    let client = Arc::new(InMemoryStorage::new());
    let service = StowageService::new(storage_args, client.clone());

    let url = service.put(&local_path, None).await?;

    assert_eq!(url, "https://stowage-test-bucket.s3.ap-south-1.amazonaws.com/uploads/report.csv");
    assert!(client.contains("uploads/report.csv"));
    assert_eq!(client.content_type_of("uploads/report.csv"), Some("text/csv".to_string()));
    Ok(())
}

#[rstest]
#[tokio::test]
async fn put_with_explicit_key_leaves_unknown_content_type_unset(storage_args: StorageArgs) -> color_eyre::Result<()> {
    let dir = tempfile::tempdir()?;
    let local_path = dir.path().join("blob.no-such-extension");
    std::fs::write(&local_path, b"payload")?;

    let client = Arc::new(InMemoryStorage::new());
    let service = StowageService::new(storage_args, client.clone());

    let url = service.put(&local_path, Some("archive/blob.bin")).await?;

    assert!(url.ends_with("/archive/blob.bin"));
    assert!(client.contains("archive/blob.bin"));
    assert_eq!(client.content_type_of("archive/blob.bin"), None);
    Ok(())
}

#[rstest]
#[tokio::test]
async fn list_concatenates_pages_in_backend_order(storage_args: StorageArgs) -> color_eyre::Result<()> {
    // three pages: 1000, 1000 and 7 keys under the prefix, plus one decoy outside it
    let keys = (0..2007).map(|i| format!("a/object-{:05}", i)).chain(["b/other".to_string()]);
    let client = Arc::new(InMemoryStorage::with_keys(keys));
    let service = StowageService::new(storage_args, client.clone());

    let listed = service.list("a/").await?;

    assert_eq!(listed.len(), 2007);
    assert_eq!(client.list_calls(), 3);
    assert_eq!(listed.first().map(String::as_str), Some("a/object-00000"));
    assert_eq!(listed.last().map(String::as_str), Some("a/object-02006"));
    let mut sorted = listed.clone();
    sorted.sort();
    assert_eq!(listed, sorted);
    Ok(())
}

#[rstest]
#[tokio::test]
async fn list_without_prefix_returns_every_key(storage_args: StorageArgs) -> color_eyre::Result<()> {
    let client =
        Arc::new(InMemoryStorage::with_keys(["a/one".to_string(), "b/two".to_string(), "c/three".to_string()]));
    let service = StowageService::new(storage_args, client);

    let listed = service.list("").await?;

    assert_eq!(listed, vec!["a/one", "b/two", "c/three"]);
    Ok(())
}

#[rstest]
#[tokio::test]
async fn list_backend_failure_discards_partial_results(storage_args: StorageArgs) {
    let mut client = MockStorageClient::new();
    let mut seq = mockall::Sequence::new();
    client.expect_list_page().times(1).in_sequence(&mut seq).returning(|_, _, _| {
        Ok(ObjectPage {
            keys: vec!["a/0".to_string()],
            next_cursor: Some("a/0".to_string()),
            is_truncated: true,
        })
    });
    client
        .expect_list_page()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _, _| Err(StorageError::ObjectStreamError("connection reset".to_string())));

    let service = StowageService::new(storage_args, Arc::new(client));
    let result = service.list("a/").await;

    assert!(matches!(result, Err(StowageError::StorageOperationError(_))));
}

#[rstest]
#[tokio::test]
async fn list_stops_on_truncated_page_without_cursor(storage_args: StorageArgs) {
    // a backend claiming more results without handing back a cursor cannot be
    // resumed; the enumeration ends with what it has
    let mut client = MockStorageClient::new();
    client.expect_list_page().times(1).returning(|_, _, _| {
        Ok(ObjectPage {
            keys: vec!["a/0".to_string(), "a/1".to_string()],
            next_cursor: None,
            is_truncated: true,
        })
    });

    let service = StowageService::new(storage_args, Arc::new(client));
    let listed = service.list("a/").await.expect("enumeration terminates");

    assert_eq!(listed, vec!["a/0", "a/1"]);
}

#[cfg(unix)]
#[rstest]
#[tokio::test]
async fn put_rejects_a_filename_that_is_not_valid_utf8(storage_args: StorageArgs) -> color_eyre::Result<()> {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let dir = tempfile::tempdir()?;
    let local_path = dir.path().join(OsStr::from_bytes(b"report-\xff.csv"));
    std::fs::write(&local_path, b"payload")?;

    // no expectations: deriving a key must fail before any backend call
    let client = Arc::new(MockStorageClient::new());
    let service = StowageService::new(storage_args, client);

    let result = service.put(&local_path, None).await;

    assert!(matches!(result, Err(StowageError::InvalidPath(_))));
    Ok(())
}

#[rstest]
#[tokio::test]
async fn get_missing_key_surfaces_storage_error_and_writes_nothing(
    storage_args: StorageArgs,
) -> color_eyre::Result<()> {
    let dir = tempfile::tempdir()?;
    let dest_path = dir.path().join("nested").join("out.bin");

    let client = Arc::new(InMemoryStorage::new());
    let service = StowageService::new(storage_args, client);

    let result = service.get("missing-key", &dest_path).await;

    assert!(matches!(result, Err(StowageError::StorageOperationError(_))));
    assert!(!dest_path.exists());
    assert!(!dest_path.parent().unwrap().exists());
    Ok(())
}

#[rstest]
#[tokio::test]
async fn get_creates_parent_directories(storage_args: StorageArgs) -> color_eyre::Result<()> {
    let dir = tempfile::tempdir()?;
    let dest_path = dir.path().join("deeply").join("nested").join("out.txt");

    let client = Arc::new(InMemoryStorage::new());
    let service = StowageService::new(storage_args, client.clone());

    client.put_data(bytes::Bytes::from_static(b"hello"), "greeting.txt", None).await?;
    service.get("greeting.txt", &dest_path).await?;

    assert_eq!(std::fs::read(&dest_path)?, b"hello");
    Ok(())
}

#[rstest]
#[tokio::test]
async fn put_then_get_round_trips_content(storage_args: StorageArgs) -> color_eyre::Result<()> {
    let dir = tempfile::tempdir()?;
    let local_path = dir.path().join("payload.json");
    let content = serde_json::to_vec(&serde_json::json!({ "body": "hello world. hello world." }))?;
    std::fs::write(&local_path, &content)?;

    let client = Arc::new(InMemoryStorage::new());
    let service = StowageService::new(storage_args, client);

    service.put(&local_path, Some("roundtrip/payload.json")).await?;

    let dest_path = dir.path().join("fetched").join("payload.json");
    service.get("roundtrip/payload.json", &dest_path).await?;

    assert_eq!(std::fs::read(&dest_path)?, content);
    Ok(())
}

#[rstest]
#[tokio::test]
async fn remove_deletes_an_existing_object(storage_args: StorageArgs) -> color_eyre::Result<()> {
    let client = Arc::new(InMemoryStorage::with_keys(["uploads/gone.txt".to_string()]));
    let service = StowageService::new(storage_args, client.clone());

    service.remove("uploads/gone.txt").await?;

    assert!(!client.contains("uploads/gone.txt"));
    Ok(())
}

#[rstest]
#[tokio::test]
async fn remove_missing_key_is_idempotent(storage_args: StorageArgs) -> color_eyre::Result<()> {
    let client = Arc::new(InMemoryStorage::new());
    let service = StowageService::new(storage_args, client);

    service.remove("never-existed").await?;
    Ok(())
}
