//! Menu item storage model

use super::serde_helpers;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::models::SpiceLevel;
use surrealdb::RecordId;

/// Menu item row (菜品)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub restaurant_id: String,
    pub category_id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Price in currency unit
    pub price: f64,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(
        default = "default_true",
        deserialize_with = "serde_helpers::bool_true"
    )]
    pub is_available: bool,
    #[serde(default, deserialize_with = "serde_helpers::bool_false")]
    pub is_vegetarian: bool,
    #[serde(default, deserialize_with = "serde_helpers::bool_false")]
    pub is_vegan: bool,
    #[serde(default, deserialize_with = "serde_helpers::bool_false")]
    pub is_gluten_free: bool,
    #[serde(default)]
    pub spice_level: SpiceLevel,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_true() -> bool {
    true
}
