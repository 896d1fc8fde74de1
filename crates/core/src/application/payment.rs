// Payment lifecycle service
//
// Thin stand-in for the payment entity system: create, look up, and delete
// payments. Deletion publishes `PaymentDeleted` so dependents can clean up.

use crate::application::events::{EventBus, LifecycleEvent};
use crate::domain::{Payment, PaymentId, PaymentStatus, UserId};
use crate::error::{AppError, Result};
use crate::port::{PaymentRepository, TimeProvider};
use std::sync::Arc;
use tracing::info;

pub struct PaymentService {
    payment_repo: Arc<dyn PaymentRepository>,
    events: Arc<EventBus>,
    time_provider: Arc<dyn TimeProvider>,
}

impl PaymentService {
    pub fn new(
        payment_repo: Arc<dyn PaymentRepository>,
        events: Arc<EventBus>,
        time_provider: Arc<dyn TimeProvider>,
    ) -> Self {
        Self {
            payment_repo,
            events,
            time_provider,
        }
    }

    pub async fn create(&self, uid: UserId, status: PaymentStatus) -> Result<PaymentId> {
        if uid <= 0 {
            return Err(AppError::Validation(format!("Invalid uid: {}", uid)));
        }

        let pid = self
            .payment_repo
            .create(uid, status, self.time_provider.now_millis())
            .await?;

        info!(pid = pid, uid = uid, status = %status, "Payment created");
        Ok(pid)
    }

    pub async fn get(&self, pid: PaymentId) -> Result<Option<Payment>> {
        self.payment_repo.find_by_id(pid).await
    }

    pub async fn set_status(&self, pid: PaymentId, status: PaymentStatus) -> Result<()> {
        if !self.payment_repo.update_status(pid, status).await? {
            return Err(AppError::NotFound(format!("Payment {}", pid)));
        }
        info!(pid = pid, status = %status, "Payment status changed");
        Ok(())
    }

    /// Delete a payment and notify subscribers.
    ///
    /// The event is published even when the payment was already gone, so a
    /// retried delete still cleans up anything left behind.
    pub async fn delete(&self, pid: PaymentId) -> Result<bool> {
        let existed = self.payment_repo.delete(pid).await?;
        info!(pid = pid, existed = existed, "Payment deleted");

        self.events
            .publish(LifecycleEvent::PaymentDeleted { pid })
            .await?;
        Ok(existed)
    }
}
