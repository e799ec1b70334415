//! Error types for the almanac library.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::TaskStatus;

/// Comprehensive error type for all almanac operations.
#[derive(Error, Debug)]
pub enum AlmanacError {
    /// No plan document exists yet at the configured path
    #[error("No plan found at '{path}'. Create one with `almanac plan create`")]
    PlanNotFound { path: PathBuf },
    /// Task not found for the given ID
    #[error("Task with ID {id} not found")]
    TaskNotFound { id: u64 },
    /// Term-year label that does not match `YYYY-YYYY`
    #[error("Invalid term year '{label}': {reason}")]
    InvalidTermYear { label: String, reason: String },
    /// Status change the soft-delete rules do not allow
    #[error("Cannot move task from {from} to {to}")]
    InvalidTransition { from: TaskStatus, to: TaskStatus },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// An assistant operation was requested without a signed-in client
    #[error("Assistant is not signed in")]
    Unauthenticated,
    /// The text generator failed or returned something unusable
    #[error("Assistant error: {message}")]
    Assistant { message: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> AlmanacError {
        AlmanacError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl AlmanacError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Wraps an I/O failure with the path it happened at.
    pub fn file_system(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileSystem {
            path: path.into(),
            source,
        }
    }

    /// Wraps a text generator failure.
    pub fn assistant(message: impl Into<String>) -> Self {
        Self::Assistant {
            message: message.into(),
        }
    }
}

/// Result type alias for almanac operations
pub type Result<T> = std::result::Result<T, AlmanacError>;
