//! Error types for the zatlas plugin.
//!
//! This module defines the centralized error type [`AtlasError`] and a type alias
//! [`Result`] used throughout the crate. Errors are implemented with `thiserror`.

use thiserror::Error;

/// The main error type for zatlas operations.
///
/// Consolidates the failure modes of the data-access layer (HTTP status,
/// missing records, malformed payloads) with local concerns such as theme
/// loading and configuration parsing.
///
/// # Examples
///
/// ```
/// use zatlas::AtlasError;
///
/// let err = AtlasError::Http { status: 503 };
/// assert_eq!(err.to_string(), "HTTP request failed with status 503");
/// ```
#[derive(Debug, Error)]
pub enum AtlasError {
    /// The country service answered with a non-success status.
    ///
    /// Network failures reported by the host also land here, since Zellij
    /// surfaces them as a failed status on the request result.
    #[error("HTTP request failed with status {status}")]
    Http {
        /// Status code reported for the request.
        status: u16,
    },

    /// The requested country code is unknown to the service.
    #[error("Country not found: {code}")]
    NotFound {
        /// The 3-letter code that was requested.
        code: String,
    },

    /// The response body could not be decoded into country records.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration value is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for AtlasError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

impl AtlasError {
    /// Returns `true` when the error means the record does not exist, as
    /// opposed to the service being unreachable.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::Http { status: 404 })
    }
}

/// A specialized `Result` type for zatlas operations.
pub type Result<T> = std::result::Result<T, AtlasError>;
