//! Domain errors
//!
//! Structural failures only. Policy refusals (slot taken, duplicate owner,
//! and so on) are not errors; the engine returns them as `Decision::Rejected`
//! values and callers turn them into user-facing messages.

use thiserror::Error;

use uuid::Uuid;

/// Domain-level error types
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Reservation {reservation} is not held by {owner}")]
    NotOwner { reservation: Uuid, owner: String },

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Validation: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
