// Application Layer - Use Cases and Business Logic

pub mod component;
pub mod events;
pub mod payment;
pub mod queue;

// Re-exports
pub use component::ComponentService;
pub use events::{EventBus, LifecycleEvent, LifecycleSubscriber, QueueCascade};
pub use payment::PaymentService;
pub use queue::PaymentQueue;
