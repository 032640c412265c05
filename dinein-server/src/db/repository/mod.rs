//! Repository Module
//!
//! CRUD operations over the SurrealDB tables, one repository per record
//! type. Handlers own nothing below this layer.

pub mod category;
pub mod menu_item;
pub mod order;
pub mod restaurant;
pub mod table;

// Re-exports
pub use category::CategoryRepository;
pub use menu_item::MenuItemRepository;
pub use order::OrderRepository;
pub use restaurant::RestaurantRepository;
pub use table::TableRepository;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}

/// Extract the pure key if the id carries a table prefix
/// (e.g. "dining_table:xyz" -> "xyz"); bare keys pass through unchanged.
pub fn strip_table_prefix<'a>(table: &str, id: &'a str) -> &'a str {
    id.strip_prefix(table)
        .and_then(|rest| rest.strip_prefix(':'))
        .unwrap_or(id)
}
