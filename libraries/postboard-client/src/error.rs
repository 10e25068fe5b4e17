//! Error types for the Postboard client.

use postboard_core::ResourceKind;
use postboard_store::StoreError;
use thiserror::Error;

/// Errors surfaced by a resource client operation.
///
/// An unreachable API is not an error: the probe turns it into fallback
/// routing. Everything here comes from the dispatch phase.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Requested id is absent from the backing store that served the call
    #[error("{resource} not found: {id}")]
    NotFound {
        /// Collection the lookup ran against
        resource: ResourceKind,
        /// Requested identifier
        id: i64,
    },

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error response
    #[error("Server error ({status}): {message}")]
    ServerError {
        /// HTTP status code
        status: u16,
        /// Response body, if any
        message: String,
    },

    /// Failed to parse server response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Invalid server URL
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    /// Fallback store rejected the operation
    #[error(transparent)]
    Store(StoreError),

    /// Backend answered with a different shape than the operation expects
    #[error("Unexpected result for {0}")]
    UnexpectedOutcome(&'static str),
}

impl ClientError {
    /// Create a not found error
    pub fn not_found(resource: ResourceKind, id: i64) -> Self {
        Self::NotFound { resource, id }
    }

    /// Whether this error reports a missing entity
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<StoreError> for ClientError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { resource, id } => Self::NotFound { resource, id },
            other => Self::Store(other),
        }
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
