// Shared wiring for integration tests: real SQLite adapters, in-memory DB.
#![allow(dead_code)]

use std::sync::Arc;

use paywebform_core::application::{
    ComponentService, EventBus, PaymentQueue, PaymentService, QueueCascade,
};
use paywebform_core::port::time_provider::SystemTimeProvider;
use paywebform_core::port::QueueRepository;
use paywebform_infra_sqlite::{
    create_pool, run_migrations, SqliteComponentRepository, SqlitePaymentRepository,
    SqliteQueueRepository,
};
use sqlx::SqlitePool;

pub struct Harness {
    pub pool: SqlitePool,
    pub queue_repo: Arc<SqliteQueueRepository>,
    pub queue: Arc<PaymentQueue>,
    pub payments: PaymentService,
    pub components: ComponentService,
}

pub async fn harness() -> Harness {
    harness_at(":memory:").await
}

pub async fn harness_at(database_url: &str) -> Harness {
    let pool = create_pool(database_url).await.unwrap();
    run_migrations(&pool).await.unwrap();
    wire(pool)
}

pub fn wire(pool: SqlitePool) -> Harness {
    let time_provider = Arc::new(SystemTimeProvider);
    let queue_repo = Arc::new(SqliteQueueRepository::new(pool.clone()));
    let queue = Arc::new(PaymentQueue::new(queue_repo.clone(), time_provider.clone()));

    let mut events = EventBus::new();
    events.subscribe(Arc::new(QueueCascade::new(queue.clone())));
    let events = Arc::new(events);

    let payments = PaymentService::new(
        Arc::new(SqlitePaymentRepository::new(pool.clone())),
        events.clone(),
        time_provider,
    );
    let components = ComponentService::new(
        Arc::new(SqliteComponentRepository::new(pool.clone())),
        events,
    );

    Harness {
        pool,
        queue_repo,
        queue,
        payments,
        components,
    }
}

impl Harness {
    pub async fn count_pair(&self, cid: i64, pid: i64) -> i64 {
        self.queue_repo.count_pair(cid, pid).await.unwrap()
    }

    pub async fn count_by_payment(&self, pid: i64) -> i64 {
        self.queue_repo.count_by_payment(pid).await.unwrap()
    }

    pub async fn count_by_component(&self, cid: i64) -> i64 {
        self.queue_repo.count_by_component(cid).await.unwrap()
    }
}
