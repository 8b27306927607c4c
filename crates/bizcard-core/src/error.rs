//! Error types for the bizcard-core library.

use thiserror::Error;

/// Main error type for the bizcard library.
///
/// Extraction itself never fails: unresolvable fields degrade to empty
/// strings. These errors cover the surrounding surfaces, primarily
/// configuration files.
#[derive(Error, Debug)]
pub enum BizcardError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for the bizcard library.
pub type Result<T> = std::result::Result<T, BizcardError>;
