use thiserror::Error;

/// Errors that can occur while managing the recipe catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Failed to read or write the storage backend
    #[error("Storage error: {0}")]
    StorageError(#[from] std::io::Error),

    /// Failed to serialize the recipe list or the storage file
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// A shell command could not be understood
    #[error("Invalid command: {0}")]
    CommandError(String),
}
