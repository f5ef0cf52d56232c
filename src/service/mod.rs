use std::path::Path;
use std::sync::Arc;

use bytes::Bytes;
use tracing::debug;

use crate::core::client::storage::s3::AWSS3;
use crate::core::client::storage::StorageClient;
use crate::error::{StowageError, StowageResult};
use crate::types::constant::{MAX_KEYS_PER_PAGE, UPLOADS_PREFIX};
use crate::types::params::StorageArgs;

/// Object façade: the four bucket operations over an injected backend client.
///
/// The service holds no mutable state; every call is one request/response
/// cycle against the backend (a bounded series of them for [`list`](Self::list)).
pub struct StowageService {
    args: StorageArgs,
    client: Arc<dyn StorageClient>,
}

impl StowageService {
    /// Builds a service over an explicit backend client.
    pub fn new(args: StorageArgs, client: Arc<dyn StorageClient>) -> Self {
        Self { args, client }
    }

    /// Builds a service backed by AWS S3, resolving credentials from the
    /// environment the way the SDK does.
    pub async fn setup(args: StorageArgs) -> Self {
        let aws_config = aws_config::from_env().load().await;
        let client = Arc::new(AWSS3::new(&aws_config, &args));
        Self::new(args, client)
    }

    /// Upload `local_path` to the bucket and return the object's URL.
    ///
    /// When `key` is omitted the object is stored under
    /// `uploads/<basename of local_path>`. The content type is inferred from
    /// the file extension and left unset when unknown. An existing object
    /// under the same key is overwritten without any existence check.
    ///
    /// The returned URL follows the
    /// `https://<bucket>.s3.<region>.amazonaws.com/<key>` naming convention
    /// and is never verified; a private bucket serves 403 from it all the
    /// same.
    pub async fn put(&self, local_path: &Path, key: Option<&str>) -> StowageResult<String> {
        if !local_path.is_file() {
            return Err(StowageError::FileNotFound(local_path.to_path_buf()));
        }

        let key = match key {
            Some(key) => key.to_string(),
            None => {
                let basename = local_path
                    .file_name()
                    .and_then(|name| name.to_str())
                    .ok_or_else(|| StowageError::InvalidPath(local_path.to_path_buf()))?;
                format!("{}{}", UPLOADS_PREFIX, basename)
            }
        };

        let content_type = mime_guess::from_path(local_path).first_raw();
        let data = Bytes::from(tokio::fs::read(local_path).await?);
        let size = data.len();

        self.client.put_data(data, &key, content_type).await?;
        debug!(bucket = %self.args.bucket_name, key = %key, bytes = size, "Uploaded object");

        Ok(self.object_url(&key))
    }

    /// Enumerate every key in the bucket starting with `prefix`, in the order
    /// the backend returns them.
    ///
    /// Pages of at most 1000 keys are fetched until the backend reports no
    /// more results remain. Any backend failure aborts the enumeration;
    /// partial results are discarded.
    pub async fn list(&self, prefix: &str) -> StowageResult<Vec<String>> {
        let mut keys = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let page = self.client.list_page(prefix, MAX_KEYS_PER_PAGE, cursor.take()).await?;
            keys.extend(page.keys);
            if !page.is_truncated {
                break;
            }
            match page.next_cursor {
                Some(next_cursor) => cursor = Some(next_cursor),
                // a truncated page without a cursor cannot be resumed
                None => break,
            }
        }

        debug!(bucket = %self.args.bucket_name, prefix = %prefix, count = keys.len(), "Listed objects");
        Ok(keys)
    }

    /// Download the object under `key` into `dest_path`, creating parent
    /// directories as needed.
    ///
    /// The object is fetched before anything touches the filesystem, so a
    /// backend failure leaves no local traces. A write failure after a
    /// successful fetch can leave a partial file at `dest_path`; there is no
    /// atomic rename.
    pub async fn get(&self, key: &str, dest_path: &Path) -> StowageResult<()> {
        let data = self.client.get_data(key).await?;

        if let Some(parent) = dest_path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        tokio::fs::write(dest_path, &data).await?;

        debug!(bucket = %self.args.bucket_name, key = %key, bytes = data.len(), "Downloaded object");
        Ok(())
    }

    /// Delete the object under `key`. Deleting a missing key succeeds.
    pub async fn remove(&self, key: &str) -> StowageResult<()> {
        self.client.delete_data(key).await?;
        debug!(bucket = %self.args.bucket_name, key = %key, "Deleted object");
        Ok(())
    }

    fn object_url(&self, key: &str) -> String {
        format!("https://{}.s3.{}.amazonaws.com/{}", self.args.bucket_name, self.args.region, key)
    }
}
