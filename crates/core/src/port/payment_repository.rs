// Payment Repository Port (Interface)

use crate::domain::{Payment, PaymentId, PaymentStatus, UserId};
use crate::error::Result;
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

/// Minimal payment storage. Payment processing itself lives elsewhere.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PaymentRepository: Send + Sync {
    /// Insert a payment and return its allocated id
    async fn create(&self, uid: UserId, status: PaymentStatus, created_at: i64)
        -> Result<PaymentId>;

    async fn find_by_id(&self, pid: PaymentId) -> Result<Option<Payment>>;

    /// Returns false if the payment does not exist
    async fn update_status(&self, pid: PaymentId, status: PaymentStatus) -> Result<bool>;

    /// Returns false if the payment did not exist
    async fn delete(&self, pid: PaymentId) -> Result<bool>;
}
