/// Store-specific errors
use postboard_core::ResourceKind;
use thiserror::Error;

/// Result type alias using `StoreError`
pub type Result<T> = std::result::Result<T, StoreError>;

/// Store error types
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    /// Entity not found
    #[error("{resource} not found: {id}")]
    NotFound { resource: ResourceKind, id: i64 },

    /// Seed data contained the same id twice
    #[error("Duplicate {resource} id in seed data: {id}")]
    DuplicateId { resource: ResourceKind, id: i64 },

    /// The next id would not fit in an `i64`
    #[error("No {resource} ids left after {last}")]
    IdsExhausted { resource: ResourceKind, last: i64 },
}

impl StoreError {
    /// Create a not found error
    pub fn not_found(resource: ResourceKind, id: i64) -> Self {
        Self::NotFound { resource, id }
    }
}
