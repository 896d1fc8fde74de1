// Payment Queue Service - insert, load and delete queue entries

use crate::domain::{ComponentId, PaymentId, QueueEntry, UserId};
use crate::error::Result;
use crate::port::{QueueRepository, TimeProvider};
use std::sync::Arc;
use tracing::{debug, info};

/// Queue of payments waiting to be used by a webform submission.
///
/// A payment is queued under the component that collected it. The paying
/// user can later claim it with [`PaymentQueue::load`].
pub struct PaymentQueue {
    queue_repo: Arc<dyn QueueRepository>,
    time_provider: Arc<dyn TimeProvider>,
}

impl PaymentQueue {
    pub fn new(queue_repo: Arc<dyn QueueRepository>, time_provider: Arc<dyn TimeProvider>) -> Self {
        Self {
            queue_repo,
            time_provider,
        }
    }

    /// Queue a payment under a component.
    ///
    /// Duplicate pairs are stored as separate rows.
    pub async fn insert(&self, cid: ComponentId, pid: PaymentId) -> Result<()> {
        let entry = QueueEntry::new(cid, pid, self.time_provider.now_millis())?;
        self.queue_repo.insert(&entry).await?;

        info!(cid = cid, pid = pid, "Payment queued");
        Ok(())
    }

    /// Payment queued under `cid` for user `uid`, if any.
    ///
    /// A wrong component or a wrong user both yield `None`.
    pub async fn load(&self, cid: ComponentId, uid: UserId) -> Result<Option<PaymentId>> {
        let pid = self.queue_repo.find_by_component_and_user(cid, uid).await?;
        debug!(cid = cid, uid = uid, pid = ?pid, "Queue lookup");
        Ok(pid)
    }

    /// Remove every entry for a payment. Unknown payments are a no-op.
    pub async fn delete_by_pid(&self, pid: PaymentId) -> Result<u64> {
        let removed = self.queue_repo.delete_by_payment(pid).await?;
        info!(pid = pid, removed = removed, "Queue entries deleted by payment");
        Ok(removed)
    }

    /// Remove every entry for a component. Unknown components are a no-op.
    pub async fn delete_by_cid(&self, cid: ComponentId) -> Result<u64> {
        let removed = self.queue_repo.delete_by_component(cid).await?;
        info!(cid = cid, removed = removed, "Queue entries deleted by component");
        Ok(removed)
    }

    /// Entries queued under a component, in insertion order
    pub async fn entries(&self, cid: ComponentId) -> Result<Vec<QueueEntry>> {
        self.queue_repo.list_by_component(cid).await
    }
}
