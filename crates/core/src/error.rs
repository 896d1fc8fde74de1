// Central Error Type for the Application

use thiserror::Error;

/// Application-level error type
///
/// A lookup that finds nothing is `Ok(None)`, not an error.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Domain error: {0}")]
    Domain(#[from] crate::domain::DomainError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Subscriber error: {subscriber}: {message}")]
    Subscriber {
        subscriber: &'static str,
        message: String,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

// Note: sqlx::Error conversion is handled in infra-sqlite crate
// by converting to AppError::Database(String)
