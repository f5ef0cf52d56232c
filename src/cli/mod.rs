use std::path::PathBuf;

use clap::{Parser, Subcommand};

use storage::StorageCliArgs;

pub mod storage;

#[derive(Parser, Debug)]
#[command(
    name = "stowage",
    about = "Move named blobs in and out of a single S3 bucket",
    long_about = "stowage is a thin convenience layer over AWS S3: upload, list, download and \
    delete objects in one configured bucket. Durability, retries, signing and credential \
    resolution are the AWS SDK's business, not this tool's."
)]
pub struct Cli {
    #[command(flatten)]
    pub storage_args: StorageCliArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Upload a local file to the bucket and print its URL
    Put {
        /// Path of the local file to upload
        local_path: PathBuf,

        /// Object key; defaults to uploads/<basename of the file>
        #[arg(long)]
        key: Option<String>,
    },
    /// List keys in the bucket
    List {
        /// Only return keys starting with this prefix
        #[arg(long, default_value = "")]
        prefix: String,
    },
    /// Download an object to a local path
    Get {
        /// Key of the object to download
        key: String,

        /// Local destination path; parent directories are created as needed
        dest_path: PathBuf,
    },
    /// Delete an object from the bucket
    Remove {
        /// Key of the object to delete
        key: String,
    },
}
