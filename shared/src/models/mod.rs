//! Data models
//!
//! Wire representations shared between dinein-server and its clients.
//! Record ids are server-assigned opaque strings; cross-record references
//! (`restaurant_id`, `category_id`, `menu_item_id`) are plain strings checked
//! only at the application layer.

pub mod category;
pub mod menu_item;
pub mod order;
pub mod restaurant;
pub mod table;

// Re-exports
pub use category::*;
pub use menu_item::*;
pub use order::*;
pub use restaurant::*;
pub use table::*;
