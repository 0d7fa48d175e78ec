//! Error types for numberknocker.
//!
//! This module defines all error types used throughout the numberknocker crate,
//! providing enough context to tell the user which file or URL was involved.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for numberknocker operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// A configuration file that was asked for does not exist.
    #[error("configuration file not found: {path}")]
    ConfigNotFound {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Output Errors ===
    /// Failed to write one of the generated documents.
    #[error("failed to write {path}: {source}")]
    FileWrite {
        /// Path of the file being written.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to create the output directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Input Errors ===
    /// No phone number was supplied.
    #[error("phone number is required")]
    MissingPhoneNumber,

    // === Browser Errors ===
    /// The system browser could not be launched for a URL.
    #[error("failed to open {url} in browser: {source}")]
    BrowserOpen {
        /// The URL that was being opened.
        url: String,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Session Errors ===
    /// The user ended the session before it finished.
    #[error("interrupted by user")]
    Interrupted,

    // === I/O Errors ===
    /// Terminal or file system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Serialization Errors ===
    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for numberknocker operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a configuration validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }

    /// Check if this error means the user ended the session.
    #[must_use]
    pub fn is_interrupted(&self) -> bool {
        matches!(self, Self::Interrupted)
    }
}
