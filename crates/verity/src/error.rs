//! Error types for the Verity library.

use thiserror::Error;

/// Main error type for Verity operations.
#[derive(Debug, Error)]
pub enum VerityError {
    /// Configuration error (missing API key, bad client setup).
    #[error("Configuration error: {0}")]
    Config(String),

    /// The LLM returned text with no parseable JSON object.
    #[error("No JSON object found in LLM response")]
    MissingJson,

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Verity operations.
pub type Result<T> = std::result::Result<T, VerityError>;
