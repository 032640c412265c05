//! Categories API

mod handler;

use axum::{Router, routing::get};

use crate::core::state::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route(
            "/{id}",
            get(handler::get)
                .put(handler::update)
                .delete(handler::remove),
        )
}
