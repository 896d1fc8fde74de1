// SQLite ComponentRepository Implementation

use crate::error::map_sqlx_error;
use async_trait::async_trait;
use paywebform_core::domain::{ComponentId, NewComponent, NodeId, WebformComponent};
use paywebform_core::error::Result;
use paywebform_core::port::ComponentRepository;
use sqlx::SqlitePool;

pub struct SqliteComponentRepository {
    pool: SqlitePool,
}

impl SqliteComponentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ComponentRepository for SqliteComponentRepository {
    async fn insert(&self, component: &NewComponent) -> Result<ComponentId> {
        // cid is global (MAX + 1) so the queue can key on cid alone.
        // Allocation and insert share a transaction.
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        let cid: i64 =
            sqlx::query_scalar("SELECT COALESCE(MAX(cid), 0) + 1 FROM webform_components")
                .fetch_one(&mut *tx)
                .await
                .map_err(map_sqlx_error)?;

        sqlx::query(
            r#"
            INSERT INTO webform_components (
                nid, cid, form_key, name, component_type, mandatory, weight
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(component.nid)
        .bind(cid)
        .bind(&component.form_key)
        .bind(&component.name)
        .bind(&component.component_type)
        .bind(if component.mandatory { 1 } else { 0 })
        .bind(component.weight)
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx_error)?;

        tx.commit().await.map_err(map_sqlx_error)?;
        Ok(cid)
    }

    async fn find(&self, nid: NodeId, cid: ComponentId) -> Result<Option<WebformComponent>> {
        let row = sqlx::query_as::<_, ComponentRow>(
            r#"
            SELECT nid, cid, form_key, name, component_type, mandatory, weight
            FROM webform_components
            WHERE nid = ? AND cid = ?
            "#,
        )
        .bind(nid)
        .bind(cid)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(ComponentRow::into_component))
    }

    async fn delete(&self, nid: NodeId, cid: ComponentId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM webform_components WHERE nid = ? AND cid = ?")
            .bind(nid)
            .bind(cid)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn cid_in_use(&self, cid: ComponentId) -> Result<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(1) FROM webform_components WHERE cid = ?")
            .bind(cid)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(count > 0)
    }
}

#[derive(sqlx::FromRow)]
struct ComponentRow {
    nid: i64,
    cid: i64,
    form_key: String,
    name: String,
    component_type: String,
    mandatory: i32, // SQLite boolean as integer
    weight: i32,
}

impl ComponentRow {
    fn into_component(self) -> WebformComponent {
        WebformComponent {
            nid: self.nid,
            cid: self.cid,
            form_key: self.form_key,
            name: self.name,
            component_type: self.component_type,
            mandatory: self.mandatory != 0,
            weight: self.weight,
        }
    }
}
