//! Upload API

mod handler;

use axum::{Router, extract::DefaultBodyLimit, routing::post};

use crate::core::state::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/image", post(handler::upload))
        // multipart 封包比文件本体大一些
        .layer(DefaultBodyLimit::max(handler::MAX_FILE_SIZE + 1024 * 1024))
}
