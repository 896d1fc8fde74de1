// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid identifier for {field}: {value}")]
    InvalidId { field: &'static str, value: i64 },

    #[error("Unknown payment status: {0}")]
    UnknownPaymentStatus(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

pub type Result<T> = std::result::Result<T, DomainError>;
