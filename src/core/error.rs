//! Error types and error handling for docbatch.
//!
//! This module defines the error types used throughout the
//! application. Per-file skips are not errors; they are modeled as
//! [`crate::core::types::SkipReason`] values so callers can
//! distinguish failure reasons programmatically.

use thiserror::Error;

/// Result type alias for docbatch operations
pub type Result<T> = std::result::Result<T, DocbatchError>;

/// Main error type for the docbatch pipeline
#[derive(Error, Debug)]
pub enum DocbatchError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Batch write failed: {0}")]
    BatchWriteFailed(String),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl DocbatchError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a configuration error (caller input, detected
    /// before any file is processed)
    pub fn is_config_error(&self) -> bool {
        matches!(self, DocbatchError::ConfigError(_))
    }

    /// Check if this is a fatal I/O failure (persisting batches or the
    /// summary, or accessing the root directory)
    pub fn is_fatal_io(&self) -> bool {
        matches!(
            self,
            DocbatchError::BatchWriteFailed(_) | DocbatchError::InvalidPath(_)
        )
    }
}
