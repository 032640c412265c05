//! 请求日志中间件
//!
//! 每个请求记录一行: 请求 id, 方法, 匹配到的路由, 状态码, 耗时。
//! 4xx 记 warn, 5xx 记 error。

use std::time::Instant;

use axum::{
    body::Body,
    extract::MatchedPath,
    http::Request,
    http::header::USER_AGENT,
    middleware::Next,
    response::Response,
};
use tracing::{error, info, warn};

pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();

    let method = request.method().clone();
    // 优先记录路由模板 (/orders/{id}), 拿不到再退回原始路径
    let path = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string());
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();
    let user_agent = request
        .headers()
        .get(USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();

    let response = next.run(request).await;

    let status = response.status();
    let latency_ms = start.elapsed().as_millis() as u64;

    if status.is_server_error() {
        error!(%request_id, %method, %path, %status, latency_ms, user_agent, "request failed");
    } else if status.is_client_error() {
        warn!(%request_id, %method, %path, %status, latency_ms, user_agent, "request rejected");
    } else {
        info!(%request_id, %method, %path, %status, latency_ms, user_agent, "request completed");
    }

    response
}
