// Payment Domain Model
//
// Minimal view of the payment entity: the queue only needs the owner.

use super::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Payment identifier
pub type PaymentId = i64;

/// User identifier (payment owner)
pub type UserId = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Pending,
    Success,
    Failed,
    Cancelled,
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentStatus::Pending => write!(f, "PENDING"),
            PaymentStatus::Success => write!(f, "SUCCESS"),
            PaymentStatus::Failed => write!(f, "FAILED"),
            PaymentStatus::Cancelled => write!(f, "CANCELLED"),
        }
    }
}

impl FromStr for PaymentStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "PENDING" => Ok(PaymentStatus::Pending),
            "SUCCESS" => Ok(PaymentStatus::Success),
            "FAILED" => Ok(PaymentStatus::Failed),
            "CANCELLED" => Ok(PaymentStatus::Cancelled),
            _ => Err(DomainError::UnknownPaymentStatus(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub pid: PaymentId,
    pub uid: UserId,
    pub status: PaymentStatus,
    pub created_at: i64, // epoch ms
}
