//! 数据库层 - 嵌入式 SurrealDB 存储
//!
//! 每种记录类型一张表，无 schema 约束；跨记录引用是普通字符串，
//! 只在应用层校验。

pub mod models;
pub mod repository;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

/// SurrealDB namespace for all platform data
pub const NAMESPACE: &str = "dinein";

/// SurrealDB database name
pub const DATABASE: &str = "main";

/// Open the embedded database at the given path.
///
/// The special path `":memory:"` selects the in-memory engine, used by tests
/// and local development.
pub async fn connect(path: &str) -> Result<Surreal<Db>, surrealdb::Error> {
    let db = if path == ":memory:" {
        Surreal::new::<Mem>(()).await?
    } else {
        Surreal::new::<RocksDb>(path).await?
    };
    db.use_ns(NAMESPACE).use_db(DATABASE).await?;
    Ok(db)
}
