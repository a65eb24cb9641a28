//! Error types for the jargon application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire jargon application.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum JargonError {
    /// Model client invocation failure (network/process error from the
    /// external model host)
    #[error("Model client error: {message}")]
    ModelClient { message: String },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "JSON", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl JargonError {
    /// Creates a ModelClient error
    pub fn model_client(message: impl Into<String>) -> Self {
        Self::ModelClient {
            message: message.into(),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Check if this is a ModelClient error
    pub fn is_model_client(&self) -> bool {
        matches!(self, Self::ModelClient { .. })
    }
}

impl From<std::io::Error> for JargonError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for JargonError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, JargonError>`.
pub type Result<T> = std::result::Result<T, JargonError>;
