//! Order storage model

use super::serde_helpers;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::models::{OrderItem, OrderStatus};
use surrealdb::RecordId;

/// Order row (订单)
///
/// `total_amount` is stored exactly as the client submitted it; nothing
/// recomputes it from the line items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub restaurant_id: String,
    pub table_number: i32,
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub status: OrderStatus,
    pub total_amount: f64,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub rejection_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
