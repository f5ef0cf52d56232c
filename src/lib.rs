/// Contains the CLI arguments for the binary
pub mod cli;
/// Contains the backend client abstractions
pub mod core;
/// Contains all the errors that can be returned by the crate
pub mod error;
/// Contains the object façade over the storage client
pub mod service;
/// Contains configuration types and constants
pub mod types;
/// Contains utility modules
pub mod utils;

#[cfg(test)]
pub mod tests;

// Re-export commonly used items
pub use error::{StowageError, StowageResult};

// Re-export client abstractions for convenience
pub use crate::core::client::storage::{StorageClient, StorageError};
pub use service::StowageService;
