/// Region applied when the environment does not specify one.
pub const DEFAULT_AWS_REGION: &str = "ap-south-1";

/// Key prefix applied when an upload does not name an explicit key.
pub const UPLOADS_PREFIX: &str = "uploads/";

/// Maximum number of keys requested per list page.
pub const MAX_KEYS_PER_PAGE: i32 = 1000;

/// Environment variable naming the target bucket.
pub const BUCKET_NAME_ENV: &str = "STOWAGE_BUCKET_NAME";

/// Environment variable overriding the AWS region.
pub const AWS_REGION_ENV: &str = "STOWAGE_AWS_REGION";
