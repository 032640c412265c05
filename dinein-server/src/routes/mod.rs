//! 路由组装
//!
//! [`build_router`] 只挂业务路由, [`build_app`] 再套上
//! CORS / 压缩 / 日志 / 请求 id 这些横切层。

use axum::{
    Router,
    http::{HeaderValue, Request},
    middleware::from_fn,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    trace::TraceLayer,
};
use uuid::Uuid;

use crate::api;
use crate::core::config::Config;
use crate::core::state::ServerState;
use crate::middleware::logging_middleware;

pub fn build_router() -> Router<ServerState> {
    Router::new()
        .nest("/restaurants", api::restaurants::router())
        .nest("/tables", api::tables::router())
        .nest("/categories", api::categories::router())
        .nest("/menu-items", api::menu_items::router())
        .nest("/orders", api::orders::router())
        .nest("/auth", api::auth::router())
        .nest("/upload", api::upload::router())
        .nest("/health", api::health::router())
}

pub fn build_app(state: ServerState) -> Router {
    let cors = cors_layer(&state.config);

    build_router()
        .layer(from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(XRequestId))
        .with_state(state)
}

/// 未配置 ALLOWED_ORIGINS 时全放行 (本地开发/扫码客户端),
/// 配置了就只放白名单
fn cors_layer(config: &Config) -> CorsLayer {
    if config.allowed_origins.is_empty() {
        CorsLayer::permissive()
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

#[derive(Clone, Copy, Default)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}
