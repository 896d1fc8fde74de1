//! Composition root: wires the SQLite adapters into the core services.

use anyhow::{anyhow, Context, Result};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use paywebform_core::application::{
    ComponentService, EventBus, PaymentQueue, PaymentService, QueueCascade,
};
use paywebform_core::port::time_provider::SystemTimeProvider;
use paywebform_infra_sqlite::{
    create_pool, run_migrations, SqliteComponentRepository, SqlitePaymentRepository,
    SqliteQueueRepository,
};

pub struct App {
    pub queue: Arc<PaymentQueue>,
    pub payments: PaymentService,
    pub components: ComponentService,
}

impl App {
    /// Open (creating if needed) the database and run migrations.
    pub async fn open(db_path: &str) -> Result<Self> {
        ensure_parent_dir(db_path)?;

        info!(db_path = %db_path, "Initializing database...");
        let pool = create_pool(db_path)
            .await
            .map_err(|e| anyhow!("DB pool creation failed: {}", e))?;
        run_migrations(&pool)
            .await
            .map_err(|e| anyhow!("Migration failed: {}", e))?;

        // DI wiring
        let time_provider = Arc::new(SystemTimeProvider);
        let queue = Arc::new(PaymentQueue::new(
            Arc::new(SqliteQueueRepository::new(pool.clone())),
            time_provider.clone(),
        ));

        let mut events = EventBus::new();
        events.subscribe(Arc::new(QueueCascade::new(queue.clone())));
        let events = Arc::new(events);

        let payments = PaymentService::new(
            Arc::new(SqlitePaymentRepository::new(pool.clone())),
            events.clone(),
            time_provider,
        );
        let components =
            ComponentService::new(Arc::new(SqliteComponentRepository::new(pool)), events);

        Ok(Self {
            queue,
            payments,
            components,
        })
    }
}

/// File-backed databases need their directory to exist before SQLite opens them.
fn ensure_parent_dir(db_path: &str) -> Result<()> {
    let file = db_path
        .trim_start_matches("sqlite://")
        .trim_start_matches("sqlite:");
    if file.is_empty() || file.contains(":memory:") {
        return Ok(());
    }

    let file = file.split('?').next().unwrap_or(file);
    if let Some(parent) = Path::new(file).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }
    Ok(())
}
