//! Order Repository

use chrono::{DateTime, Utc};
use serde::Serialize;
use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

use shared::models::{OrderCreate, OrderStatus, OrderUpdate};

use super::{BaseRepository, RepoError, RepoResult, strip_table_prefix};
use crate::db::models::Order;

// `order` is a reserved keyword in SurrealQL (ORDER BY), so the table is `orders`.
const TABLE: &str = "orders";

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// 列出订单, 最新的在前, 可按餐厅/状态过滤
    pub async fn find_all(
        &self,
        restaurant_id: Option<&str>,
        status: Option<OrderStatus>,
    ) -> RepoResult<Vec<Order>> {
        let mut conditions: Vec<&str> = Vec::new();
        if restaurant_id.is_some() {
            conditions.push("restaurant_id = $restaurant_id");
        }
        if status.is_some() {
            conditions.push("status = $status");
        }

        let mut sql = String::from("SELECT * FROM orders");
        if !conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&conditions.join(" AND "));
        }
        sql.push_str(" ORDER BY created_at DESC");

        let mut query = self.base.db().query(sql);
        if let Some(rid) = restaurant_id {
            query = query.bind(("restaurant_id", rid.to_string()));
        }
        if let Some(s) = status {
            query = query.bind(("status", s));
        }

        let orders: Vec<Order> = query.await?.take(0)?;
        Ok(orders)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Order>> {
        let pure_id = strip_table_prefix(TABLE, id);
        let order: Option<Order> = self.base.db().select((TABLE, pure_id)).await?;
        Ok(order)
    }

    /// 新订单总是从 placed 开始
    pub async fn create(&self, data: OrderCreate) -> RepoResult<Order> {
        let now = Utc::now();
        let order = Order {
            id: None,
            restaurant_id: data.restaurant_id,
            table_number: data.table_number,
            items: data.items,
            status: OrderStatus::Placed,
            total_amount: data.total_amount,
            notes: data.notes,
            rejection_reason: None,
            created_at: now,
            updated_at: now,
        };

        let created: Option<Order> = self.base.db().create(TABLE).content(order).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create order".to_string()))
    }

    /// 状态更新不做流转限制, 由调用方自行约束
    pub async fn update(&self, id: &str, data: OrderUpdate) -> RepoResult<Order> {
        let pure_id = strip_table_prefix(TABLE, id);

        self.find_by_id(pure_id)
            .await?
            .ok_or_else(|| RepoError::NotFound("Order not found".to_string()))?;

        #[derive(Serialize)]
        struct OrderUpdateDb {
            #[serde(skip_serializing_if = "Option::is_none")]
            status: Option<OrderStatus>,
            #[serde(skip_serializing_if = "Option::is_none")]
            rejection_reason: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            notes: Option<String>,
            updated_at: DateTime<Utc>,
        }

        let update_data = OrderUpdateDb {
            status: data.status,
            rejection_reason: data.rejection_reason,
            notes: data.notes,
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
            .ok_or_else(|| RepoError::NotFound("Order not found".to_string()))
    }

    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let pure_id = strip_table_prefix(TABLE, id);
        let deleted: Option<Order> = self.base.db().delete((TABLE, pure_id)).await?;
        Ok(deleted.is_some())
    }
}
