//! Category Repository

use chrono::{DateTime, Utc};
use serde::Serialize;
use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

use shared::models::{CategoryCreate, CategoryUpdate};

use super::{BaseRepository, RepoError, RepoResult, strip_table_prefix};
use crate::db::models::Category;

const TABLE: &str = "category";

#[derive(Clone)]
pub struct CategoryRepository {
    base: BaseRepository,
}

impl CategoryRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// 列出分类, 可按餐厅过滤
    pub async fn find_all(&self, restaurant_id: Option<&str>) -> RepoResult<Vec<Category>> {
        let mut sql = String::from("SELECT * FROM category");
        if restaurant_id.is_some() {
            sql.push_str(" WHERE restaurant_id = $restaurant_id");
        }
        sql.push_str(" ORDER BY display_order ASC, name ASC");

        let mut query = self.base.db().query(sql);
        if let Some(rid) = restaurant_id {
            query = query.bind(("restaurant_id", rid.to_string()));
        }

        let categories: Vec<Category> = query.await?.take(0)?;
        Ok(categories)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Category>> {
        let pure_id = strip_table_prefix(TABLE, id);
        let category: Option<Category> = self.base.db().select((TABLE, pure_id)).await?;
        Ok(category)
    }

    pub async fn create(&self, data: CategoryCreate) -> RepoResult<Category> {
        let now = Utc::now();
        let category = Category {
            id: None,
            restaurant_id: data.restaurant_id,
            name: data.name,
            description: data.description,
            display_order: data.display_order.unwrap_or(0),
            created_at: now,
            updated_at: now,
        };

        let created: Option<Category> = self.base.db().create(TABLE).content(category).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create category".to_string()))
    }

    pub async fn update(&self, id: &str, data: CategoryUpdate) -> RepoResult<Category> {
        let pure_id = strip_table_prefix(TABLE, id);

        self.find_by_id(pure_id)
            .await?
            .ok_or_else(|| RepoError::NotFound("Category not found".to_string()))?;

        #[derive(Serialize)]
        struct CategoryUpdateDb {
            #[serde(skip_serializing_if = "Option::is_none")]
            name: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            description: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            display_order: Option<i32>,
            updated_at: DateTime<Utc>,
        }

        let update_data = CategoryUpdateDb {
            name: data.name,
            description: data.description,
            display_order: data.display_order,
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
            .ok_or_else(|| RepoError::NotFound("Category not found".to_string()))
    }

    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let pure_id = strip_table_prefix(TABLE, id);
        let deleted: Option<Category> = self.base.db().delete((TABLE, pure_id)).await?;
        Ok(deleted.is_some())
    }
}
