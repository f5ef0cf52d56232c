use clap::Args;

use crate::types::constant::DEFAULT_AWS_REGION;

/// Parameters used to configure the target S3 bucket.
#[derive(Debug, Clone, Args)]
pub struct StorageCliArgs {
    /// Name of the S3 bucket all operations target.
    #[arg(env = "STOWAGE_BUCKET_NAME", long)]
    pub bucket_name: Option<String>,

    /// AWS region the bucket lives in.
    #[arg(env = "STOWAGE_AWS_REGION", long, default_value = DEFAULT_AWS_REGION)]
    pub region: String,
}
