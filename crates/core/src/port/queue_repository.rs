// Queue Repository Port (Interface)

use crate::domain::{ComponentId, PaymentId, QueueEntry, UserId};
use crate::error::Result;
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

/// Repository interface for the payment/component association table
///
/// Implementations never enforce uniqueness on `(cid, pid)`.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait QueueRepository: Send + Sync {
    /// Persist an entry
    async fn insert(&self, entry: &QueueEntry) -> Result<()>;

    /// Most recently inserted pid queued under `cid` whose payment is owned by `uid`
    async fn find_by_component_and_user(
        &self,
        cid: ComponentId,
        uid: UserId,
    ) -> Result<Option<PaymentId>>;

    /// Remove every entry for a payment (returns rows removed)
    async fn delete_by_payment(&self, pid: PaymentId) -> Result<u64>;

    /// Remove every entry for a component (returns rows removed)
    async fn delete_by_component(&self, cid: ComponentId) -> Result<u64>;

    /// Count entries referencing a payment
    async fn count_by_payment(&self, pid: PaymentId) -> Result<i64>;

    /// Count entries referencing a component
    async fn count_by_component(&self, cid: ComponentId) -> Result<i64>;

    /// Count entries for an exact pair
    async fn count_pair(&self, cid: ComponentId, pid: PaymentId) -> Result<i64>;

    /// Entries queued under a component, in insertion order
    async fn list_by_component(&self, cid: ComponentId) -> Result<Vec<QueueEntry>>;
}
