//! Error types for manifold-core

use thiserror::Error;

/// Result type alias for manifold-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in manifold-core
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration file could not be found
    #[error("configuration file not found: {path}")]
    ConfigNotFound {
        /// Path that was searched
        path: String,
    },

    /// Failed to parse YAML configuration
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    /// Gateway request failed (transport error or non-2xx response)
    #[error("gateway error: {message}")]
    Gateway {
        /// HTTP status, when the gateway answered at all
        status: Option<u16>,
        /// Description of the failure
        message: String,
    },

    /// Gateway load response did not match the double-encoded envelope shape
    #[error("malformed gateway envelope: {message}")]
    Envelope {
        /// Description of what failed to decode
        message: String,
    },

    /// Attached file is not one of the accepted spreadsheet kinds
    #[error("unsupported file type for {path}: '{detected}' is not CSV or XLSX")]
    UnsupportedFile {
        /// Path of the rejected file
        path: String,
        /// Extension or MIME type that was detected
        detected: String,
    },

    /// No configuration entry with the given id exists
    #[error("no configuration entry with id {id}")]
    UnknownEntry {
        /// Identifier that was requested
        id: u64,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
