// Domain Layer - Pure business logic and entities

pub mod component;
pub mod error;
pub mod payment;
pub mod queue;

// Re-exports
pub use component::{ComponentId, NewComponent, NodeId, WebformComponent};
pub use error::DomainError;
pub use payment::{Payment, PaymentId, PaymentStatus, UserId};
pub use queue::QueueEntry;
