//! API Module
//!
//! 每个资源一个子模块: mod.rs 挂路由, handler.rs 放处理函数

pub mod auth;
pub mod categories;
pub mod convert;
pub mod health;
pub mod menu_items;
pub mod orders;
pub mod restaurants;
pub mod tables;
pub mod upload;
