use std::sync::Arc;

use async_trait::async_trait;
use aws_config::{Region, SdkConfig};
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use bytes::Bytes;

use crate::core::client::storage::{ObjectPage, StorageClient, StorageError};
use crate::types::params::StorageArgs;

/// AWS S3 implementation of [`StorageClient`].
///
/// Each method is a single SDK request; retries, signing and credential
/// resolution all live in the SDK configuration this client was built from.
#[derive(Clone, Debug)]
pub struct AWSS3 {
    client: Arc<Client>,
    bucket_name: String,
}

impl AWSS3 {
    /// Creates a new instance of AWSS3 scoped to the configured bucket and region.
    pub fn new(aws_config: &SdkConfig, args: &StorageArgs) -> Self {
        let mut s3_config_builder = aws_sdk_s3::config::Builder::from(aws_config);
        s3_config_builder = s3_config_builder.region(Region::new(args.region.clone()));
        // path-style addressing keeps localstack endpoints working in tests
        s3_config_builder = s3_config_builder.force_path_style(true);

        let client = Client::from_conf(s3_config_builder.build());
        Self { client: Arc::new(client), bucket_name: args.bucket_name.clone() }
    }
}

#[async_trait]
impl StorageClient for AWSS3 {
    async fn get_data(&self, key: &str) -> Result<Bytes, StorageError> {
        let output = self.client.get_object().bucket(&self.bucket_name).key(key).send().await?;

        let data = output.body.collect().await.map_err(|e| StorageError::ObjectStreamError(e.to_string()))?;

        Ok(data.into_bytes())
    }

    async fn put_data<'a>(&self, data: Bytes, key: &str, content_type: Option<&'a str>) -> Result<(), StorageError> {
        let mut request =
            self.client.put_object().bucket(&self.bucket_name).key(key).body(ByteStream::from(data));
        if let Some(content_type) = content_type {
            request = request.content_type(content_type);
        }
        request.send().await?;

        Ok(())
    }

    async fn delete_data(&self, key: &str) -> Result<(), StorageError> {
        // S3 reports success for missing keys, which gives remove its idempotence
        Ok(self.client.delete_object().bucket(&self.bucket_name).key(key).send().await.map(|_| ())?)
    }

    async fn list_page(
        &self,
        prefix: &str,
        max_keys: i32,
        cursor: Option<String>,
    ) -> Result<ObjectPage, StorageError> {
        let mut request =
            self.client.list_objects_v2().bucket(&self.bucket_name).prefix(prefix).max_keys(max_keys);
        if let Some(cursor) = cursor {
            request = request.continuation_token(cursor);
        }
        let output = request.send().await?;

        let keys = output.contents().iter().filter_map(|object| object.key().map(str::to_string)).collect();

        Ok(ObjectPage {
            keys,
            next_cursor: output.next_continuation_token().map(str::to_string),
            is_truncated: output.is_truncated().unwrap_or(false),
        })
    }
}
