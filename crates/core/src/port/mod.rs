// Port Layer - Interfaces for external dependencies

pub mod component_repository;
pub mod payment_repository;
pub mod queue_repository;
pub mod time_provider; // For deterministic testing

// Re-exports
pub use component_repository::ComponentRepository;
pub use payment_repository::PaymentRepository;
pub use queue_repository::QueueRepository;
pub use time_provider::TimeProvider;

#[cfg(test)]
pub use component_repository::MockComponentRepository;
#[cfg(test)]
pub use payment_repository::MockPaymentRepository;
#[cfg(test)]
pub use queue_repository::MockQueueRepository;
#[cfg(test)]
pub use time_provider::MockTimeProvider;
