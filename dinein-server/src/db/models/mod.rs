//! Storage models
//!
//! SurrealDB row types. Ids are `Option<RecordId>` (None before insert);
//! cross-record references stay plain strings. Wire twins live in
//! `shared::models` and conversions in `crate::api::convert`.

pub mod category;
pub mod menu_item;
pub mod order;
pub mod restaurant;
pub mod serde_helpers;
pub mod table;

// Re-exports
pub use category::*;
pub use menu_item::*;
pub use order::*;
pub use restaurant::*;
pub use table::*;
