//! Error handling middleware - `{ error, code }` JSON responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use gramdrop_core::DomainError;
use gramdrop_core::error::RepoError;
use gramdrop_shared::ErrorResponse;
use std::fmt;

/// Application-level error type that converts to JSON error responses.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest { message: String, code: &'static str },
    Fetch(String),
    Internal(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, code: &'static str) -> Self {
        AppError::BadRequest {
            message: message.into(),
            code,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest { message, code } => {
                write!(f, "Bad request ({}): {}", code, message)
            }
            AppError::Fetch(msg) => write!(f, "Metadata fetch failed: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::Fetch(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound(detail) => ErrorResponse::not_found(detail),
            AppError::BadRequest { message, code } => ErrorResponse::bad_request(message, *code),
            AppError::Fetch(detail) => {
                tracing::warn!("Metadata fetch failed: {}", detail);
                ErrorResponse::new(detail).with_code("fetch-failed")
            }
            AppError::Internal(detail) => {
                // Log internal errors
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error("Internal server error")
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(e) => AppError::bad_request(e.to_string(), e.code.as_str()),
            DomainError::NoFields => AppError::bad_request(err.to_string(), "no-fields"),
            DomainError::InvalidStatus(e) => AppError::bad_request(e.to_string(), "invalid-status"),
            DomainError::NotFound { entity_type, id } => {
                AppError::NotFound(format!("{} with id {} not found", entity_type, id))
            }
            DomainError::Fetch(_) => AppError::Fetch(err.to_string()),
            DomainError::Repository(e) => e.into(),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Constraint(msg) => {
                tracing::error!("Database constraint violation: {}", msg);
                AppError::Internal("Database error".to_string())
            }
            RepoError::Connection(msg) => {
                tracing::error!("Database connection error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
            RepoError::Query(msg) => {
                tracing::error!("Database query error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
