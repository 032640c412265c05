//! Shared types for the DineIn platform
//!
//! Wire models and DTOs used by both the API server and the client crate.
//! All JSON on the wire is camelCase; structs keep snake_case field names.

pub mod client;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{
    Category, MenuItem, Order, OrderCreate, OrderItem, OrderStatus, OrderUpdate, Restaurant,
    SpiceLevel, Table,
};
