use std::path::PathBuf;
use thiserror::Error;

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors that can occur while loading or saving a string catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// No file exists at the given path
    #[error("string catalog file not found: {path}")]
    NotFound { path: PathBuf },

    /// File content is not a well-formed string catalog document
    #[error("failed to parse string catalog {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Catalog could not be serialized back to JSON
    #[error("failed to serialize string catalog: {0}")]
    Serialize(#[source] serde_json::Error),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
