// SQLite PaymentRepository Implementation

use crate::error::map_sqlx_error;
use async_trait::async_trait;
use paywebform_core::domain::{Payment, PaymentId, PaymentStatus, UserId};
use paywebform_core::error::Result;
use paywebform_core::port::PaymentRepository;
use sqlx::SqlitePool;
use tracing::warn;

pub struct SqlitePaymentRepository {
    pool: SqlitePool,
}

impl SqlitePaymentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PaymentRepository for SqlitePaymentRepository {
    async fn create(
        &self,
        uid: UserId,
        status: PaymentStatus,
        created_at: i64,
    ) -> Result<PaymentId> {
        let result = sqlx::query("INSERT INTO payments (uid, status, created_at) VALUES (?, ?, ?)")
            .bind(uid)
            .bind(status.to_string())
            .bind(created_at)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.last_insert_rowid())
    }

    async fn find_by_id(&self, pid: PaymentId) -> Result<Option<Payment>> {
        let row = sqlx::query_as::<_, PaymentRow>(
            "SELECT pid, uid, status, created_at FROM payments WHERE pid = ?",
        )
        .bind(pid)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(PaymentRow::into_payment))
    }

    async fn update_status(&self, pid: PaymentId, status: PaymentStatus) -> Result<bool> {
        let result = sqlx::query("UPDATE payments SET status = ? WHERE pid = ?")
            .bind(status.to_string())
            .bind(pid)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, pid: PaymentId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM payments WHERE pid = ?")
            .bind(pid)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }
}

#[derive(sqlx::FromRow)]
struct PaymentRow {
    pid: i64,
    uid: i64,
    status: String,
    created_at: i64,
}

impl PaymentRow {
    fn into_payment(self) -> Payment {
        let status = self.status.parse().unwrap_or_else(|_| {
            warn!(pid = self.pid, status = %self.status, "Unknown payment status, treating as FAILED");
            PaymentStatus::Failed // Default fallback
        });

        Payment {
            pid: self.pid,
            uid: self.uid,
            status,
            created_at: self.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_pool, run_migrations};

    async fn setup_repo() -> SqlitePaymentRepository {
        let pool = create_pool("sqlite::memory:").await.unwrap();
        run_migrations(&pool).await.unwrap();
        SqlitePaymentRepository::new(pool)
    }

    #[tokio::test]
    async fn test_create_allocates_sequential_ids() {
        let repo = setup_repo().await;

        let first = repo.create(2, PaymentStatus::Success, 10).await.unwrap();
        let second = repo.create(2, PaymentStatus::Success, 20).await.unwrap();
        assert_eq!(first, 1);
        assert_eq!(second, 2);

        let payment = repo.find_by_id(second).await.unwrap().unwrap();
        assert_eq!(payment.uid, 2);
        assert_eq!(payment.status, PaymentStatus::Success);
        assert_eq!(payment.created_at, 20);
    }

    #[tokio::test]
    async fn test_update_status() {
        let repo = setup_repo().await;
        let pid = repo.create(1, PaymentStatus::Pending, 0).await.unwrap();

        assert!(repo.update_status(pid, PaymentStatus::Success).await.unwrap());
        assert_eq!(
            repo.find_by_id(pid).await.unwrap().unwrap().status,
            PaymentStatus::Success
        );
        assert!(!repo.update_status(999, PaymentStatus::Success).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = setup_repo().await;
        let pid = repo.create(1, PaymentStatus::Success, 0).await.unwrap();

        assert!(repo.delete(pid).await.unwrap());
        assert!(repo.find_by_id(pid).await.unwrap().is_none());
        assert!(!repo.delete(pid).await.unwrap());
    }
}
