//! Lifecycle events - explicit cascade from external entity deletion
//!
//! Payment and webform component storage publish an event after a delete.
//! Subscribers (such as [`QueueCascade`]) clean up whatever referenced the
//! deleted entity. Nothing is cascaded implicitly by the database.

mod cascade;

pub use cascade::QueueCascade;

use crate::domain::{ComponentId, NodeId, PaymentId};
use crate::error::{AppError, Result};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, error};

/// Lifecycle event types, emitted after a successful delete
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleEvent {
    PaymentDeleted { pid: PaymentId },
    ComponentDeleted { nid: NodeId, cid: ComponentId },
}

impl LifecycleEvent {
    /// Get the event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::PaymentDeleted { .. } => "payment_deleted",
            Self::ComponentDeleted { .. } => "component_deleted",
        }
    }
}

/// Handler for lifecycle events
#[async_trait]
pub trait LifecycleSubscriber: Send + Sync {
    /// Name used in logs and errors
    fn name(&self) -> &'static str;

    /// Check if this subscriber is interested in the event
    fn is_interested(&self, event: &LifecycleEvent) -> bool;

    /// Handle a lifecycle event
    async fn handle(&self, event: &LifecycleEvent) -> Result<()>;
}

/// Dispatches events to registered subscribers in registration order.
#[derive(Default)]
pub struct EventBus {
    subscribers: Vec<Arc<dyn LifecycleSubscriber>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, subscriber: Arc<dyn LifecycleSubscriber>) {
        debug!(subscriber = subscriber.name(), "Lifecycle subscriber registered");
        self.subscribers.push(subscriber);
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Deliver an event to every interested subscriber.
    ///
    /// All subscribers run even if one fails; the first failure is returned.
    pub async fn publish(&self, event: LifecycleEvent) -> Result<()> {
        debug!(event = event.event_type(), "Publishing lifecycle event");

        let mut first_error = None;
        for subscriber in &self.subscribers {
            if !subscriber.is_interested(&event) {
                continue;
            }

            if let Err(e) = subscriber.handle(&event).await {
                error!(
                    subscriber = subscriber.name(),
                    event = event.event_type(),
                    error = %e,
                    "Lifecycle subscriber failed"
                );
                if first_error.is_none() {
                    first_error = Some(AppError::Subscriber {
                        subscriber: subscriber.name(),
                        message: e.to_string(),
                    });
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
