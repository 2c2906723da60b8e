//! Custom error types for translation operations

use thiserror::Error;

/// Translation-related errors
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Remote API answered with a non-success status
    #[error("API request failed with status {status}: {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },

    /// Transport could not complete the request
    #[error("Network error: {message}")]
    NetworkError {
        /// What went wrong
        message: String,
    },

    /// Success response body was not JSON
    #[error("Invalid response: {message}")]
    InvalidResponseError {
        /// What went wrong
        message: String,
    },

    /// Missing API key or invalid settings
    #[error("Configuration error: {message}")]
    ConfigError {
        /// What went wrong
        message: String,
    },

    /// File operation error
    #[error("File error: {path} - {message}")]
    FileError {
        /// Offending path
        path: String,
        /// What went wrong
        message: String,
    },

    /// Layered configuration could not be read
    #[error("Failed to load configuration: {0}")]
    ConfigLoadError(#[from] config::ConfigError),

    /// Unexpected failure inside the translator, such as a closed semaphore
    #[error("Internal error: {0}")]
    InternalError(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Reqwest error
    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl TranslationError {
    /// Shorthand for a [`TranslationError::ConfigError`]
    pub fn config(message: impl Into<String>) -> Self {
        TranslationError::ConfigError {
            message: message.into(),
        }
    }
}

/// Result type for translation operations
pub type Result<T> = std::result::Result<T, TranslationError>;
