//! Store error types.
//!
//! Every store operation returns a structured error with a user-facing
//! message and an optional remediation hint.

use std::path::PathBuf;
use thiserror::Error;

/// Store operation error.
#[derive(Debug, Error)]
pub enum StoreError {
    /// File I/O error.
    #[error("Failed to {operation} file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Key contains characters that cannot name a file.
    #[error("Invalid store key: {0:?}")]
    InvalidKey(String),

    /// Stored value under `key` is not a recipe list.
    #[error("Stored data under {key} is malformed")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Serialization error.
    #[error("Failed to serialize recipes")]
    Serialization {
        #[source]
        source: serde_json::Error,
    },

    /// Atomic write failed (temp file couldn't be renamed).
    #[error("Failed to complete save operation")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Io {
                operation, path, ..
            } => {
                format!("Could not {} the file at {}", operation, path.display())
            }
            Self::InvalidKey(key) => format!("'{key}' cannot be used as a storage key."),
            Self::Malformed { key, .. } => {
                format!("The saved recipes under '{key}' could not be read.")
            }
            Self::Serialization { .. } => {
                "An error occurred while saving the recipes.".to_string()
            }
            Self::AtomicWriteFailed { target_path, .. } => {
                format!(
                    "Could not save the file to {}. Please check disk space and permissions.",
                    target_path.display()
                )
            }
        }
    }

    /// Get a suggestion for how to resolve this error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::Io { operation, .. } => {
                if *operation == "read" {
                    Some("Check that the file exists and you have permission to read it.".into())
                } else {
                    Some("Check that you have permission to write to this location.".into())
                }
            }
            Self::InvalidKey(_) => None,
            Self::Malformed { .. } => {
                Some("Remove or repair the data file; the list will start empty.".into())
            }
            Self::Serialization { .. } => None,
            Self::AtomicWriteFailed { .. } => {
                Some("Free up disk space or try a different data directory.".into())
            }
        }
    }
}

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
