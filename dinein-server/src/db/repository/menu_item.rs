//! Menu Item Repository

use chrono::{DateTime, Utc};
use serde::Serialize;
use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

use shared::models::{MenuItemCreate, MenuItemUpdate, SpiceLevel};

use super::{BaseRepository, RepoError, RepoResult, strip_table_prefix};
use crate::db::models::MenuItem;

const TABLE: &str = "menu_item";

#[derive(Clone)]
pub struct MenuItemRepository {
    base: BaseRepository,
}

impl MenuItemRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// 列出菜品, 可按餐厅/分类过滤
    pub async fn find_all(
        &self,
        restaurant_id: Option<&str>,
        category_id: Option<&str>,
    ) -> RepoResult<Vec<MenuItem>> {
        let mut conditions: Vec<&str> = Vec::new();
        if restaurant_id.is_some() {
            conditions.push("restaurant_id = $restaurant_id");
        }
        if category_id.is_some() {
            conditions.push("category_id = $category_id");
        }

        let mut sql = String::from("SELECT * FROM menu_item");
        if !conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&conditions.join(" AND "));
        }
        sql.push_str(" ORDER BY name ASC");

        let mut query = self.base.db().query(sql);
        if let Some(rid) = restaurant_id {
            query = query.bind(("restaurant_id", rid.to_string()));
        }
        if let Some(cid) = category_id {
            query = query.bind(("category_id", cid.to_string()));
        }

        let items: Vec<MenuItem> = query.await?.take(0)?;
        Ok(items)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<MenuItem>> {
        let pure_id = strip_table_prefix(TABLE, id);
        let item: Option<MenuItem> = self.base.db().select((TABLE, pure_id)).await?;
        Ok(item)
    }

    pub async fn create(&self, data: MenuItemCreate) -> RepoResult<MenuItem> {
        let now = Utc::now();
        let item = MenuItem {
            id: None,
            restaurant_id: data.restaurant_id,
            category_id: data.category_id,
            name: data.name,
            description: data.description,
            price: data.price,
            image: data.image,
            is_available: data.is_available.unwrap_or(true),
            is_vegetarian: data.is_vegetarian.unwrap_or(false),
            is_vegan: data.is_vegan.unwrap_or(false),
            is_gluten_free: data.is_gluten_free.unwrap_or(false),
            spice_level: data.spice_level.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };

        let created: Option<MenuItem> = self.base.db().create(TABLE).content(item).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create menu item".to_string()))
    }

    pub async fn update(&self, id: &str, data: MenuItemUpdate) -> RepoResult<MenuItem> {
        let pure_id = strip_table_prefix(TABLE, id);

        self.find_by_id(pure_id)
            .await?
            .ok_or_else(|| RepoError::NotFound("Menu item not found".to_string()))?;

        #[derive(Serialize)]
        struct MenuItemUpdateDb {
            #[serde(skip_serializing_if = "Option::is_none")]
            category_id: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            name: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            description: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            price: Option<f64>,
            #[serde(skip_serializing_if = "Option::is_none")]
            image: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            is_available: Option<bool>,
            #[serde(skip_serializing_if = "Option::is_none")]
            is_vegetarian: Option<bool>,
            #[serde(skip_serializing_if = "Option::is_none")]
            is_vegan: Option<bool>,
            #[serde(skip_serializing_if = "Option::is_none")]
            is_gluten_free: Option<bool>,
            #[serde(skip_serializing_if = "Option::is_none")]
            spice_level: Option<SpiceLevel>,
            updated_at: DateTime<Utc>,
        }

        let update_data = MenuItemUpdateDb {
            category_id: data.category_id,
            name: data.name,
            description: data.description,
            price: data.price,
            image: data.image,
            is_available: data.is_available,
            is_vegetarian: data.is_vegetarian,
            is_vegan: data.is_vegan,
            is_gluten_free: data.is_gluten_free,
            spice_level: data.spice_level,
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
            .ok_or_else(|| RepoError::NotFound("Menu item not found".to_string()))
    }

    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let pure_id = strip_table_prefix(TABLE, id);
        let deleted: Option<MenuItem> = self.base.db().delete((TABLE, pure_id)).await?;
        Ok(deleted.is_some())
    }
}
