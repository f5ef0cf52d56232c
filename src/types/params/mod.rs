use crate::cli::storage::StorageCliArgs;
use crate::error::StowageError;
use crate::types::constant::{AWS_REGION_ENV, BUCKET_NAME_ENV, DEFAULT_AWS_REGION};

/// StorageArgs - validated arguments scoping every storage operation.
///
/// Immutable once constructed. Operations receive this explicitly instead of
/// reading ambient environment state, so tests can inject fixed
/// configurations.
#[derive(Debug, Clone)]
pub struct StorageArgs {
    pub bucket_name: String,
    pub region: String,
}

impl StorageArgs {
    /// Resolve the configuration from the process environment.
    ///
    /// Reads `STOWAGE_BUCKET_NAME` (required; missing or empty is a
    /// configuration error) and `STOWAGE_AWS_REGION` (optional, defaults to
    /// `ap-south-1`). Nothing is cached; callers needing stability across
    /// calls hold on to the returned value.
    pub fn from_env() -> Result<Self, StowageError> {
        let bucket_name = std::env::var(BUCKET_NAME_ENV).unwrap_or_default();
        let region = std::env::var(AWS_REGION_ENV)
            .ok()
            .filter(|region| !region.is_empty())
            .unwrap_or_else(|| DEFAULT_AWS_REGION.to_string());
        Self::validated(bucket_name, region)
    }

    fn validated(bucket_name: String, region: String) -> Result<Self, StowageError> {
        if bucket_name.is_empty() {
            return Err(StowageError::ConfigurationError(format!("{} is not set", BUCKET_NAME_ENV)));
        }
        Ok(Self { bucket_name, region })
    }
}

impl TryFrom<StorageCliArgs> for StorageArgs {
    type Error = StowageError;

    fn try_from(args: StorageCliArgs) -> Result<Self, Self::Error> {
        Self::validated(args.bucket_name.unwrap_or_default(), args.region)
    }
}
