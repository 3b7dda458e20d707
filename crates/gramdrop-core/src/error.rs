//! Domain-level error types.

use std::time::Duration;

use thiserror::Error;
use uuid::Uuid;

use crate::domain::UnknownStatus;
use crate::validation::ValidationError;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Failed to fetch metadata: {0}")]
    Fetch(#[from] FetchError),

    #[error("No update fields provided")]
    NoFields,

    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: Uuid },

    #[error(transparent)]
    InvalidStatus(#[from] UnknownStatus),

    #[error(transparent)]
    Repository(#[from] RepoError),
}

/// Metadata acquisition errors.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("{stage} responded with {status}")]
    Status { stage: &'static str, status: u16 },

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("no metadata strategies configured")]
    NoStrategies,
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),
}
