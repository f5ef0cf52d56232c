pub mod error;
pub mod s3;

use async_trait::async_trait;
use bytes::Bytes;
pub use error::StorageError;

/// One page of a cursor-paginated enumeration.
#[derive(Debug, Clone, Default)]
pub struct ObjectPage {
    /// Keys in the order the backend returned them.
    pub keys: Vec<String>,

    /// Opaque token resuming the enumeration after this page.
    pub next_cursor: Option<String>,

    /// Whether the backend reported that more results remain.
    pub is_truncated: bool,
}

/// Trait defining object storage operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StorageClient: Send + Sync {
    /// Fetch the object stored under `key`.
    async fn get_data(&self, key: &str) -> Result<Bytes, StorageError>;

    /// Store `data` under `key`, overwriting any existing object.
    async fn put_data<'a>(&self, data: Bytes, key: &str, content_type: Option<&'a str>) -> Result<(), StorageError>;

    /// Delete the object under `key`. Deleting a missing key is not an error.
    async fn delete_data(&self, key: &str) -> Result<(), StorageError>;

    /// Fetch a single page of at most `max_keys` keys starting with `prefix`,
    /// resuming from `cursor` when given.
    async fn list_page(&self, prefix: &str, max_keys: i32, cursor: Option<String>)
        -> Result<ObjectPage, StorageError>;
}
