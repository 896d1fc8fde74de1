// SQLite QueueRepository Implementation

use crate::error::map_sqlx_error;
use async_trait::async_trait;
use paywebform_core::domain::{ComponentId, PaymentId, QueueEntry, UserId};
use paywebform_core::error::Result;
use paywebform_core::port::QueueRepository;
use sqlx::SqlitePool;
use tracing::debug;

/// `payment_webform` table adapter
pub struct SqliteQueueRepository {
    pool: SqlitePool,
}

impl SqliteQueueRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QueueRepository for SqliteQueueRepository {
    async fn insert(&self, entry: &QueueEntry) -> Result<()> {
        sqlx::query("INSERT INTO payment_webform (cid, pid, queued_at) VALUES (?, ?, ?)")
            .bind(entry.cid)
            .bind(entry.pid)
            .bind(entry.queued_at)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn find_by_component_and_user(
        &self,
        cid: ComponentId,
        uid: UserId,
    ) -> Result<Option<PaymentId>> {
        // Ownership comes from the payment; an entry whose payment row is
        // gone is never returned. Newest write wins by id, not by clock.
        let pid: Option<i64> = sqlx::query_scalar(
            r#"
            SELECT pw.pid
            FROM payment_webform pw
            INNER JOIN payments p ON p.pid = pw.pid
            WHERE pw.cid = ? AND p.uid = ?
            ORDER BY pw.id DESC
            LIMIT 1
            "#,
        )
        .bind(cid)
        .bind(uid)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(pid)
    }

    async fn delete_by_payment(&self, pid: PaymentId) -> Result<u64> {
        let result = sqlx::query("DELETE FROM payment_webform WHERE pid = ?")
            .bind(pid)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        debug!(pid = pid, rows = result.rows_affected(), "Deleted queue rows by pid");
        Ok(result.rows_affected())
    }

    async fn delete_by_component(&self, cid: ComponentId) -> Result<u64> {
        let result = sqlx::query("DELETE FROM payment_webform WHERE cid = ?")
            .bind(cid)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        debug!(cid = cid, rows = result.rows_affected(), "Deleted queue rows by cid");
        Ok(result.rows_affected())
    }

    async fn count_by_payment(&self, pid: PaymentId) -> Result<i64> {
        sqlx::query_scalar("SELECT COUNT(1) FROM payment_webform WHERE pid = ?")
            .bind(pid)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)
    }

    async fn count_by_component(&self, cid: ComponentId) -> Result<i64> {
        sqlx::query_scalar("SELECT COUNT(1) FROM payment_webform WHERE cid = ?")
            .bind(cid)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)
    }

    async fn count_pair(&self, cid: ComponentId, pid: PaymentId) -> Result<i64> {
        sqlx::query_scalar("SELECT COUNT(1) FROM payment_webform WHERE cid = ? AND pid = ?")
            .bind(cid)
            .bind(pid)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)
    }

    async fn list_by_component(&self, cid: ComponentId) -> Result<Vec<QueueEntry>> {
        let rows = sqlx::query_as::<_, QueueRow>(
            r#"
            SELECT cid, pid, queued_at
            FROM payment_webform
            WHERE cid = ?
            ORDER BY id ASC
            "#,
        )
        .bind(cid)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(QueueRow::into_entry).collect())
    }
}

#[derive(sqlx::FromRow)]
struct QueueRow {
    cid: i64,
    pid: i64,
    queued_at: i64,
}

impl QueueRow {
    fn into_entry(self) -> QueueEntry {
        QueueEntry {
            cid: self.cid,
            pid: self.pid,
            queued_at: self.queued_at,
        }
    }
}
