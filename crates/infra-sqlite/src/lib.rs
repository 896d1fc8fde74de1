// Payment Webform Infrastructure - SQLite Adapter
// Implements: QueueRepository, PaymentRepository, ComponentRepository

mod component_repository;
mod connection;
mod error;
mod migration;
mod payment_repository;
mod queue_repository;

pub use component_repository::SqliteComponentRepository;
pub use connection::create_pool;
pub use migration::run_migrations;
pub use payment_repository::SqlitePaymentRepository;
pub use queue_repository::SqliteQueueRepository;

// Note: sqlx::Error conversion is handled by `error::map_sqlx_error`
// due to Rust's orphan rules (cannot implement From<sqlx::Error> for AppError here)
