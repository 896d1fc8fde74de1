// Queue cleanup on payment / component deletion

use super::{LifecycleEvent, LifecycleSubscriber};
use crate::application::queue::PaymentQueue;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Removes queue entries that reference a deleted payment or component.
pub struct QueueCascade {
    queue: Arc<PaymentQueue>,
}

impl QueueCascade {
    pub fn new(queue: Arc<PaymentQueue>) -> Self {
        Self { queue }
    }
}

#[async_trait]
impl LifecycleSubscriber for QueueCascade {
    fn name(&self) -> &'static str {
        "payment_queue"
    }

    fn is_interested(&self, _event: &LifecycleEvent) -> bool {
        true
    }

    async fn handle(&self, event: &LifecycleEvent) -> Result<()> {
        match event {
            LifecycleEvent::PaymentDeleted { pid } => {
                self.queue.delete_by_pid(*pid).await?;
            }
            LifecycleEvent::ComponentDeleted { cid, .. } => {
                self.queue.delete_by_cid(*cid).await?;
            }
        }
        Ok(())
    }
}
