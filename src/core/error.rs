//! Custom error types for the application.
//!
//! Provides structured error handling for each domain:
//!
//! - [`GalleryError`] - Anything that can fail an API call or upload
//! - [`ValidationError`] - Local checks that fail before any network call
//! - [`TokenStoreError`] - sessionStorage operations for the bearer token
//!
//! User-facing text is produced by [`crate::core::reporter`], never by
//! formatting these errors directly.

use thiserror::Error;

/// Failure of a gallery operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GalleryError {
    /// No response body (connection refused, CORS, timeout).
    #[error("transport failure: {status_text}")]
    Transport { status_text: String },
    /// Non-success HTTP response; `body` is kept raw for the reporter.
    #[error("HTTP {status} {status_text}")]
    Api {
        status: u16,
        status_text: String,
        body: String,
    },
    /// Request body could not be serialized.
    #[error("failed to encode request: {0}")]
    Encode(String),
    /// Success response whose body is not the expected JSON.
    #[error("failed to decode response: {0}")]
    Decode(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The bearer token could not be kept for the session.
    #[error(transparent)]
    TokenStore(#[from] TokenStoreError),
}

/// Local validation failures, surfaced without a network call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("File must have an extension in name")]
    MissingExtension { file_name: String },
    #[error("You must select at least one file")]
    NoFilesSelected,
    /// Authentication succeeded at the HTTP level but carried no token.
    #[error("Could not authenticate!")]
    EmptyToken,
    #[error("Could not read file {file_name}: {reason}")]
    FileRead { file_name: String, reason: String },
}

/// Bearer token storage errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenStoreError {
    #[error("sessionStorage not available")]
    StorageUnavailable,
    #[error("failed to save to sessionStorage")]
    WriteFailed,
    #[error("failed to remove from sessionStorage")]
    RemoveFailed,
}
