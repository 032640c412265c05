//! Server State
//!
//! Handler 之间共享的东西都在这: 配置, 数据库连接, 图床客户端。

use anyhow::{Context, Result};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::core::config::Config;
use crate::db;
use crate::services::MediaService;

#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub db: Surreal<Db>,
    pub media: MediaService,
}

impl ServerState {
    pub async fn initialize(config: Config) -> Result<Self> {
        let db = db::connect(&config.db_path)
            .await
            .with_context(|| format!("opening database at {}", config.db_path))?;
        let media = MediaService::new(config.media.clone());

        Ok(Self { config, db, media })
    }
}
