//! Dining table storage model

use super::serde_helpers;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Dining table row (桌台)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    #[serde(default)]
    pub restaurant_id: Option<String>,
    pub number: i32,
    #[serde(default = "default_capacity")]
    pub capacity: i32,
    #[serde(
        default = "default_true",
        deserialize_with = "serde_helpers::bool_true"
    )]
    pub is_available: bool,
    #[serde(default)]
    pub qr_code_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_capacity() -> i32 {
    4
}

fn default_true() -> bool {
    true
}
