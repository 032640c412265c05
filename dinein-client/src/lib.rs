//! DineIn Client - HTTP client and on-device flows for the DineIn server
//!
//! Provides the typed REST surface plus the two client-side state machines:
//! the customer flow (scan, cart, checkout, order tracking) and the admin
//! flow (login, live order queue).

pub mod admin;
pub mod api;
pub mod cart;
pub mod config;
pub mod customer;
pub mod error;
pub mod http;
pub mod session;
pub mod store;
pub mod tracker;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;

pub use admin::{AdminSession, OrderQueue, QueueDelta, QueueWatcher};
pub use cart::{Cart, CartLine};
pub use customer::{CustomerFlow, OrderLine};
pub use session::{DeepLink, TableSession};
pub use store::{ClientState, STATE_VERSION, StateStore};
pub use tracker::{OrderTracker, TrackerEvent};

// Re-export shared types for convenience
pub use shared::client::{DeleteAck, Health, LoginRequest, RegisterRequest, UploadResponse};
pub use shared::models::{
    Category, CategoryCreate, CategoryUpdate, MenuItem, MenuItemCreate, MenuItemUpdate, Order,
    OrderCreate, OrderItem, OrderStatus, OrderUpdate, Restaurant, RestaurantUpdate, SpiceLevel,
    Table, TableCreate, TableUpdate,
};
