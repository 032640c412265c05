//! Health API
//!
//! 永远 200, 把进程存活和数据库状态分开报告

use std::sync::OnceLock;
use std::time::Instant;

use axum::{Json, Router, extract::State, routing::get};

use shared::client::Health;

use crate::core::state::ServerState;

static START_TIME: OnceLock<Instant> = OnceLock::new();

pub fn router() -> Router<ServerState> {
    START_TIME.get_or_init(Instant::now);
    Router::new().route("/", get(health))
}

async fn health(State(state): State<ServerState>) -> Json<Health> {
    let uptime = START_TIME.get_or_init(Instant::now).elapsed().as_secs_f64();
    let db = match state.db.query("RETURN 1").await {
        Ok(_) => "connected",
        Err(_) => "error",
    };

    Json(Health {
        ok: true,
        uptime,
        db: db.to_string(),
    })
}
