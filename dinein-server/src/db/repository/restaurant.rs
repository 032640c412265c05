//! Restaurant Repository

use chrono::{DateTime, Utc};
use serde::Serialize;
use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

use shared::client::RegisterRequest;
use shared::models::RestaurantUpdate;

use super::{BaseRepository, RepoError, RepoResult, strip_table_prefix};
use crate::db::models::Restaurant;

const TABLE: &str = "restaurant";

#[derive(Clone)]
pub struct RestaurantRepository {
    base: BaseRepository,
}

impl RestaurantRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<Restaurant>> {
        let restaurants: Vec<Restaurant> = self
            .base
            .db()
            .query("SELECT * FROM restaurant ORDER BY name ASC")
            .await?
            .take(0)?;
        Ok(restaurants)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Restaurant>> {
        let pure_id = strip_table_prefix(TABLE, id);
        let restaurant: Option<Restaurant> = self.base.db().select((TABLE, pure_id)).await?;
        Ok(restaurant)
    }

    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<Restaurant>> {
        let restaurant: Option<Restaurant> = self
            .base
            .db()
            .query("SELECT * FROM restaurant WHERE contact_email = $email LIMIT 1")
            .bind(("email", email.to_string()))
            .await?
            .take(0)?;
        Ok(restaurant)
    }

    /// 注册新餐厅, 邮箱唯一
    pub async fn create(&self, data: RegisterRequest) -> RepoResult<Restaurant> {
        if self.find_by_email(&data.contact_email).await?.is_some() {
            return Err(RepoError::Duplicate("Email already registered".to_string()));
        }

        let password_hash = Restaurant::hash_password(&data.password)
            .map_err(|e| RepoError::Database(format!("Password hashing failed: {e}")))?;

        let now = Utc::now();
        let restaurant = Restaurant {
            id: None,
            name: data.name,
            contact_email: data.contact_email,
            password_hash,
            contact_phone: data.contact_phone,
            address: data.address,
            description: data.description,
            image: data.image,
            is_open: true,
            created_at: now,
            updated_at: now,
        };

        let created: Option<Restaurant> = self.base.db().create(TABLE).content(restaurant).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create restaurant".to_string()))
    }

    pub async fn update(&self, id: &str, data: RestaurantUpdate) -> RepoResult<Restaurant> {
        let pure_id = strip_table_prefix(TABLE, id);

        let existing = self
            .find_by_id(pure_id)
            .await?
            .ok_or_else(|| RepoError::NotFound("Restaurant not found".to_string()))?;

        // 换邮箱时检查唯一性
        if let Some(email) = &data.contact_email
            && *email != existing.contact_email
            && self.find_by_email(email).await?.is_some()
        {
            return Err(RepoError::Duplicate("Email already registered".to_string()));
        }

        #[derive(Serialize)]
        struct RestaurantUpdateDb {
            #[serde(skip_serializing_if = "Option::is_none")]
            name: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            contact_email: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            contact_phone: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            address: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            description: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            image: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            is_open: Option<bool>,
            updated_at: DateTime<Utc>,
        }

        let update_data = RestaurantUpdateDb {
            name: data.name,
            contact_email: data.contact_email,
            contact_phone: data.contact_phone,
            address: data.address,
            description: data.description,
            image: data.image,
            is_open: data.is_open,
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
            .ok_or_else(|| RepoError::NotFound("Restaurant not found".to_string()))
    }

    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let pure_id = strip_table_prefix(TABLE, id);
        let deleted: Option<Restaurant> = self.base.db().delete((TABLE, pure_id)).await?;
        Ok(deleted.is_some())
    }
}
