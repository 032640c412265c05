//! 统一错误处理
//!
//! 提供应用级错误类型和 JSON 错误响应：
//!
//! - [`AppError`] - 应用错误枚举
//! - [`AppResult`] - Handler 返回类型别名
//!
//! # 错误分类
//!
//! | 分类 | 状态码 | 响应体 |
//! |------|--------|--------|
//! | 校验失败 | 400 | `{"error": msg}` 或 `{"error", "details", "received"}` |
//! | 无效 ID | 400 | `{"error": "Invalid {resource} ID"}` |
//! | 未认证 | 401 | `{"error": msg}` (登录失败统一文案) |
//! | 不存在 | 404 | `{"error": msg}` |
//! | 冲突 | 409 | `{"error": msg}` |
//! | 上游/内部 | 500 | 通用文案，详情只进日志 |
//!
//! # 使用示例
//!
//! ```ignore
//! // 返回错误
//! Err(AppError::not_found("Order not found"))
//!
//! // 返回成功响应
//! Ok(Json(order))
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

/// JSON 错误响应体
///
/// `details` 和 `received` 仅在订单创建校验等逐项报错场景出现。
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// 错误消息
    pub error: String,
    /// 逐项错误列表
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    /// 原始输入回显 (诊断用)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received: Option<serde_json::Value>,
}

/// 应用错误枚举
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 资源不存在 (404)
    #[error("{0}")]
    NotFound(String),

    /// 标识符形状非法，拒绝于任何存储访问之前 (400)
    #[error("Invalid {0} ID")]
    InvalidId(String),

    /// 校验失败 (400)
    #[error("{0}")]
    Validation(String),

    /// 下单逐项校验失败，带字段级明细和输入回显 (400)
    #[error("Order validation failed")]
    ValidationDetails {
        details: Vec<String>,
        received: serde_json::Value,
    },

    /// 认证失败 (401)
    #[error("{0}")]
    Unauthorized(String),

    /// 资源冲突 (409)
    #[error("{0}")]
    Conflict(String),

    /// 上游媒体服务失败 (500)
    #[error("Upload failed: {0}")]
    Upload(String),

    /// 数据库错误 (500)
    #[error("Database error: {0}")]
    Database(String),

    /// 内部错误 (500)
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Result type for API handlers
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorBody::message(msg)),
            AppError::InvalidId(resource) => (
                StatusCode::BAD_REQUEST,
                ErrorBody::message(format!("Invalid {resource} ID")),
            ),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, ErrorBody::message(msg)),
            AppError::ValidationDetails { details, received } => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: "Order validation failed".to_string(),
                    details: Some(serde_json::Value::from(details)),
                    received: Some(received),
                },
            ),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, ErrorBody::message(msg)),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, ErrorBody::message(msg)),
            AppError::Upload(detail) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    error: "Upload failed".to_string(),
                    details: Some(serde_json::Value::String(detail)),
                    received: None,
                },
            ),
            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::message("Internal Server Error"),
                )
            }
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::message("Internal Server Error"),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl ErrorBody {
    fn message(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
            received: None,
        }
    }
}

impl From<crate::db::repository::RepoError> for AppError {
    fn from(err: crate::db::repository::RepoError) -> Self {
        use crate::db::repository::RepoError;
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Duplicate(msg) => AppError::Conflict(msg),
            RepoError::Validation(msg) => AppError::Validation(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}

// ========== Helper Constructors ==========

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// `resource` is the human name used in the message, e.g. "table" ->
    /// "Invalid table ID".
    pub fn invalid_id(resource: impl Into<String>) -> Self {
        Self::InvalidId(resource.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn validation_details(details: Vec<String>, received: serde_json::Value) -> Self {
        Self::ValidationDetails { details, received }
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    /// Unified login failure message so unknown email and wrong password are
    /// indistinguishable from outside.
    pub fn invalid_credentials() -> Self {
        Self::Unauthorized("Invalid email or password".to_string())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn upload(detail: impl Into<String>) -> Self {
        Self::Upload(detail.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    #[test]
    fn invalid_id_message_names_the_resource() {
        let err = AppError::invalid_id("table");
        assert_eq!(err.to_string(), "Invalid table ID");
    }

    #[test]
    fn invalid_credentials_is_a_single_message() {
        let a = AppError::invalid_credentials().to_string();
        let b = AppError::invalid_credentials().to_string();
        assert_eq!(a, b);
        assert_eq!(a, "Invalid email or password");
    }

    #[tokio::test]
    async fn validation_details_carry_every_error() {
        let err = AppError::validation_details(
            vec!["restaurantId is bad".into(), "items array is empty".into()],
            serde_json::json!({"restaurantId": null}),
        );
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Order validation failed");
        assert_eq!(body["details"].as_array().unwrap().len(), 2);
        assert_eq!(body["received"]["restaurantId"], serde_json::Value::Null);
    }

    #[tokio::test]
    async fn database_errors_hide_internals() {
        let response = AppError::database("connection refused").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Internal Server Error");
        assert!(body.get("details").is_none());
    }
}
