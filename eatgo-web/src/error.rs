//! Error types surfaced by the service and action layers.

use thiserror::Error;

/// Failure talking to the EatGo HTTP API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport or decoding failure.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status.
    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },
}

/// Failure reading or writing persistent browser storage.
#[derive(Debug, Error)]
pub enum StorageError {
    /// No `localStorage` in this context.
    #[error("localStorage is not available")]
    Unavailable,

    /// The browser rejected the operation.
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Error returned by an asynchronous action creator.
#[derive(Debug, Error)]
pub enum ActionError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}
