use aws_sdk_s3::error::SdkError;
use aws_sdk_s3::operation::delete_object::DeleteObjectError;
use aws_sdk_s3::operation::get_object::GetObjectError;
use aws_sdk_s3::operation::list_objects_v2::ListObjectsV2Error;
use aws_sdk_s3::operation::put_object::PutObjectError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    /// AWS SDK errors
    #[error("Failed to put object: {0}")]
    PutObjectError(#[from] SdkError<PutObjectError>),
    #[error("Failed to get object: {0}")]
    GetObjectError(#[from] SdkError<GetObjectError>),
    #[error("Failed to delete object: {0}")]
    DeleteObjectError(#[from] SdkError<DeleteObjectError>),
    #[error("Failed to list objects: {0}")]
    ListObjectsError(#[from] SdkError<ListObjectsV2Error>),
    #[error("Failed to stream object body: {0}")]
    ObjectStreamError(String),
}
