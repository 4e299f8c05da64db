//! Error types exposed by the comment store layer.

use http::StatusCode;
use thiserror::Error;

/// Errors surfaced while validating construction input or talking to the
/// remote comment collection.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// No delivery record identifier was supplied.
    #[error("delivery record id is required")]
    MissingRecordId,

    /// The access credential was missing or blank.
    #[error("service key is required")]
    MissingServiceKey,

    /// The collection base location could not be parsed.
    #[error("collection base URL is invalid: {0}")]
    InvalidBaseUrl(String),

    /// The requested page size cannot be used for paging.
    #[error("page size must be at least 1")]
    InvalidPageSize,

    /// Networking failed before a response was received.
    #[error("network error talking to the comment store: {message}")]
    Transport {
        /// Transport-level error detail.
        message: String,
    },

    /// The remote store answered with a non-success status.
    #[error("comment store error ({status}): {message}")]
    Remote {
        /// HTTP status returned by the store.
        status: StatusCode,
        /// Error body from the store describing the failure.
        message: String,
    },

    /// The response payload did not match the expected comment shape.
    #[error("comment store returned an unexpected payload: {message}")]
    Decode {
        /// Details about the decode failure.
        message: String,
    },

    /// Configuration could not be loaded or is incomplete.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}
