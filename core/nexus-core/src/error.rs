//! Error types for nexus-core operations.
//!
//! Most failures in this crate are recoverable: the facade logs them and keeps
//! the in-memory state. These variants let lower layers say precisely what
//! went wrong.

use std::path::PathBuf;

/// All errors that can occur in nexus-core operations.
#[derive(Debug, thiserror::Error)]
pub enum NexusError {
    // ─────────────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────────────
    #[error("Home directory not found")]
    HomeDirNotFound,

    #[error("Configuration file malformed: {path}: {details}")]
    ConfigMalformed { path: PathBuf, details: String },

    // ─────────────────────────────────────────────────────────────────────
    // State Document Errors
    // ─────────────────────────────────────────────────────────────────────
    #[error("Saved state malformed: {path}: {details}")]
    StateMalformed { path: PathBuf, details: String },

    // ─────────────────────────────────────────────────────────────────────
    // I/O Errors
    // ─────────────────────────────────────────────────────────────────────
    #[error("I/O error: {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {context}: {source}")]
    Json {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience type alias for Results using NexusError.
pub type Result<T> = std::result::Result<T, NexusError>;

impl From<NexusError> for String {
    fn from(err: NexusError) -> String {
        err.to_string()
    }
}
