//! Dining Table Repository

use chrono::{DateTime, Utc};
use serde::Serialize;
use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

use shared::models::{TableCreate, TableUpdate};

use super::{BaseRepository, RepoError, RepoResult, strip_table_prefix};
use crate::db::models::Table;

const TABLE: &str = "dining_table";

#[derive(Clone)]
pub struct TableRepository {
    base: BaseRepository,
}

impl TableRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// 列出餐桌, 可按餐厅过滤
    pub async fn find_all(&self, restaurant_id: Option<&str>) -> RepoResult<Vec<Table>> {
        let mut sql = String::from("SELECT * FROM dining_table");
        if restaurant_id.is_some() {
            sql.push_str(" WHERE restaurant_id = $restaurant_id");
        }
        sql.push_str(" ORDER BY number ASC");

        let mut query = self.base.db().query(sql);
        if let Some(rid) = restaurant_id {
            query = query.bind(("restaurant_id", rid.to_string()));
        }

        let tables: Vec<Table> = query.await?.take(0)?;
        Ok(tables)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Table>> {
        let pure_id = strip_table_prefix(TABLE, id);
        let table: Option<Table> = self.base.db().select((TABLE, pure_id)).await?;
        Ok(table)
    }

    pub async fn create(&self, data: TableCreate) -> RepoResult<Table> {
        let now = Utc::now();
        let table = Table {
            id: None,
            restaurant_id: data.restaurant_id,
            number: data.number,
            capacity: data.capacity.unwrap_or(4),
            is_available: data.is_available.unwrap_or(true),
            qr_code_url: data.qr_code_url,
            created_at: now,
            updated_at: now,
        };

        let created: Option<Table> = self.base.db().create(TABLE).content(table).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create table".to_string()))
    }

    pub async fn update(&self, id: &str, data: TableUpdate) -> RepoResult<Table> {
        let pure_id = strip_table_prefix(TABLE, id);

        self.find_by_id(pure_id)
            .await?
            .ok_or_else(|| RepoError::NotFound("Table not found".to_string()))?;

        #[derive(Serialize)]
        struct TableUpdateDb {
            #[serde(skip_serializing_if = "Option::is_none")]
            restaurant_id: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            number: Option<i32>,
            #[serde(skip_serializing_if = "Option::is_none")]
            capacity: Option<i32>,
            #[serde(skip_serializing_if = "Option::is_none")]
            is_available: Option<bool>,
            #[serde(skip_serializing_if = "Option::is_none")]
            qr_code_url: Option<String>,
            updated_at: DateTime<Utc>,
        }

        let update_data = TableUpdateDb {
            restaurant_id: data.restaurant_id,
            number: data.number,
            capacity: data.capacity,
            is_available: data.is_available,
            qr_code_url: data.qr_code_url,
            updated_at: Utc::now(),
        };

        let record = RecordId::from_table_key(TABLE, pure_id);
        self.base
            .db()
            .query("UPDATE $record MERGE $data")
            .bind(("record", record))
            .bind(("data", update_data))
            .await?;

        self.find_by_id(pure_id)
            .await?
            .ok_or_else(|| RepoError::NotFound("Table not found".to_string()))
    }

    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let pure_id = strip_table_prefix(TABLE, id);
        let deleted: Option<Table> = self.base.db().delete((TABLE, pure_id)).await?;
        Ok(deleted.is_some())
    }
}
